use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendar, FaGaugeHigh, FaRightFromBracket, FaRocket,
};
use dioxus_free_icons::Icon;
use spacex_explorer::session::SessionStore;

use crate::client::{router::Route, store::navigation::NavState};

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Dashboard,
    Rockets,
    Launches,
}

impl Section {
    fn of(route: &Route) -> Option<Self> {
        match route {
            Route::Dashboard {} => Some(Self::Dashboard),
            Route::RocketList {} | Route::RocketDetail { .. } => Some(Self::Rockets),
            Route::LaunchList {} | Route::LaunchDetail { .. } => Some(Self::Launches),
            _ => None,
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut session = use_context::<Signal<SessionStore>>();
    let route = use_route::<Route>();
    let active = Section::of(&route);
    let mut nav_state = use_context::<Signal<NavState>>();
    let navigator = navigator();

    let user_name = session.read().user().map(|user| user.name.clone());

    let link_class = move |section: Section| {
        if active == Some(section) {
            "btn btn-ghost btn-active flex gap-2"
        } else {
            "btn btn-ghost flex gap-2"
        }
    };

    rsx! {
        div {
            class: "navbar bg-base-200 px-4",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Dashboard {},
                    class: "flex items-center gap-2",
                    Icon { width: 24, height: 24, icon: FaRocket }
                    p { class: "text-xl font-bold", "SpaceX Explorer" }
                }
            }
            div {
                class: "navbar-center hidden md:flex gap-1",
                Link {
                    to: Route::Dashboard {},
                    class: link_class(Section::Dashboard),
                    Icon { width: 16, height: 16, icon: FaGaugeHigh }
                    "Dashboard"
                }
                Link {
                    to: Route::RocketList {},
                    class: link_class(Section::Rockets),
                    Icon { width: 16, height: 16, icon: FaRocket }
                    "Rockets"
                }
                Link {
                    to: Route::LaunchList {},
                    class: link_class(Section::Launches),
                    Icon { width: 16, height: 16, icon: FaCalendar }
                    "Launches"
                }
            }
            div {
                class: "navbar-end flex gap-4",
                if let Some(name) = user_name {
                    p { class: "text-sm hidden sm:block", "Welcome, {name}" }
                }
                button {
                    class: "btn btn-outline flex gap-2",
                    onclick: move |_| {
                        session.write().logout();
                        nav_state.with_mut(|nav| nav.return_to.clear());
                        navigator.push(Route::Login {});
                    },
                    Icon { width: 16, height: 16, icon: FaRightFromBracket }
                    "Logout"
                }
            }
        }
    }
}
