use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendar, FaRocket};
use dioxus_free_icons::Icon;
use spacex_explorer::{
    gateway::AppGateway,
    model::launch::LaunchDto,
    util::format::format_date,
    view::{
        dashboard::{fetch_dashboard, DashboardSummary},
        load::{load_into, LoadState, LoadStatus},
    },
};

use crate::client::{
    components::{ErrorAlert, Loading, Page},
    router::Route,
};

#[component]
pub fn Dashboard() -> Element {
    let gateway = use_context::<AppGateway>();
    let mut summary = use_signal(LoadState::<DashboardSummary>::default);

    use_future(move || {
        let gateway = gateway.clone();

        async move {
            load_into(&mut summary, fetch_dashboard(&gateway)).await;
        }
    });

    let content = match summary.read().status() {
        LoadStatus::Idle | LoadStatus::Loading => rsx!(Loading {}),
        LoadStatus::Failed(message) => rsx!(ErrorAlert { message: message.clone() }),
        LoadStatus::Loaded(summary) => rsx!(
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                RocketsCard { summary: summary.clone() }
                UpcomingLaunchesCard { summary: summary.clone() }
            }
        ),
    };

    rsx!(
        Title { "Dashboard | SpaceX Explorer" }
        Meta {
            name: "description",
            content: "Overview of the SpaceX rocket fleet and upcoming launches."
        }
        Page {
            h1 { class: "text-3xl font-bold mb-6", "Dashboard" }
            {content}
        }
    )
}

#[component]
fn RocketsCard(summary: DashboardSummary) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title flex gap-2",
                    Icon { width: 24, height: 24, icon: FaRocket }
                    "SpaceX Rockets"
                }
                p {
                    "Explore the SpaceX rocket fleet, including the Falcon 9, Falcon Heavy, and the revolutionary Starship."
                }
                if summary.rockets.is_empty() {
                    p { class: "text-center opacity-70 p-6", "No rockets found" }
                }
                for rocket in summary.rockets.iter() {
                    Link {
                        key: "{rocket.id}",
                        to: Route::RocketDetail { id: rocket.id.clone() },
                        class: "card bg-base-100 shadow-sm hover:shadow-md",
                        div { class: "card-body flex-row gap-4 p-4",
                            if let Some(image) = rocket.cover_image() {
                                img {
                                    class: "w-20 h-20 rounded object-cover",
                                    src: "{image}",
                                    alt: "{rocket.name}",
                                }
                            }
                            div {
                                p { class: "font-bold", "{rocket.name}" }
                                p { class: "text-sm opacity-70 line-clamp-2", "{rocket.description}" }
                            }
                        }
                    }
                }
                div { class: "card-actions",
                    Link { to: Route::RocketList {}, class: "btn btn-primary btn-block", "View all rockets" }
                }
            }
        }
    )
}

#[component]
fn UpcomingLaunchesCard(summary: DashboardSummary) -> Element {
    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title flex gap-2",
                    Icon { width: 24, height: 24, icon: FaCalendar }
                    "Upcoming Launches"
                }
                p {
                    "Stay informed about upcoming SpaceX missions, launch schedules, and mission details."
                }
                if summary.upcoming_launches.is_empty() {
                    p { class: "text-center opacity-70 p-6", "No upcoming launches found" }
                }
                for launch in summary.upcoming_launches.iter() {
                    UpcomingLaunchRow { key: "{launch.id}", launch: launch.clone() }
                }
                div { class: "card-actions",
                    Link { to: Route::LaunchList {}, class: "btn btn-primary btn-block", "View all launches" }
                }
            }
        }
    )
}

#[component]
fn UpcomingLaunchRow(launch: LaunchDto) -> Element {
    let date = format_date(launch.date_utc.date_naive());

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body flex-row items-center justify-between p-4",
                div {
                    p { class: "font-bold", "{launch.name}" }
                    p { class: "text-sm", "{date} • Mission {launch.flight_number}" }
                }
                Link {
                    to: Route::LaunchDetail { id: launch.id.clone() },
                    class: "btn btn-ghost btn-sm",
                    "Details"
                }
            }
        }
    )
}
