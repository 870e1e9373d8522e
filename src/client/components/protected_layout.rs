use dioxus::prelude::*;
use dioxus_logger::tracing;
use spacex_explorer::session::{
    guard::{check_access, Access},
    SessionStore,
};

use crate::client::{
    components::{Loading, Navbar},
    router::Route,
    store::navigation::NavState,
};

/// Layout of every route that requires a logged in user.
#[component]
pub fn ProtectedLayout() -> Element {
    let session = use_context::<Signal<SessionStore>>();
    let route = use_route::<Route>();

    let access = check_access(&session.read());

    match access {
        Access::Pending => rsx!(Loading {}),
        Access::Denied => rsx!(RedirectToLogin { from: route }),
        Access::Granted => rsx! {
            Navbar {}
            main {
                Outlet::<Route> {}
            }
        },
    }
}

/// Remembers `from` for after login and replaces the current entry with the login page.
#[component]
fn RedirectToLogin(from: Route) -> Element {
    let mut nav_state = use_context::<Signal<NavState>>();
    let navigator = navigator();

    use_effect(move || {
        tracing::debug!(route = %from, "Redirecting unauthenticated visitor to login");

        nav_state.with_mut(|nav| nav.return_to.remember(from.clone()));
        navigator.replace(Route::Login {});
    });

    rsx!(Loading {})
}
