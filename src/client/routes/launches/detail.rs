use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaWikipediaW, FaYoutube};
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaRocket};
use dioxus_free_icons::Icon;
use spacex_explorer::{
    gateway::AppGateway,
    model::{launch::LaunchDto, rocket::RocketDto},
    util::format::{format_datetime, format_optional},
    view::detail::{load_launch_detail, LaunchDetail as LaunchDetailState},
};

use crate::client::{
    components::{LaunchStatusBadge, Loading, MissingEntity, Page, RocketStatusBadge},
    router::Route,
};

#[component]
pub fn LaunchDetail(id: ReadSignal<String>) -> Element {
    let gateway = use_context::<AppGateway>();
    let mut detail = use_signal(LaunchDetailState::default);

    use_effect(move || {
        let id = id();
        let gateway = gateway.clone();

        spawn(async move {
            load_launch_detail(&mut detail, &gateway, &id).await;
        });
    });

    let state = detail.read();

    if state.primary_loading() {
        return rsx!(Loading { label: "Loading launch..." });
    }

    let Some(launch) = state.primary() else {
        return rsx!(
            Title { "Launch Not Found | SpaceX Explorer" }
            Page {
                MissingEntity {
                    title: "Launch not found",
                    message: state.message().unwrap_or("The requested launch could not be found.").to_string(),
                    back_to: Route::LaunchList {},
                    back_label: "Back to Launches",
                }
            }
        );
    };

    let rocket = state.secondary().cloned();
    let rocket_loading = state.secondary_loading();
    let rocket_unavailable = state.secondary_unavailable();

    rsx!(
        Title { "{launch.name} | SpaceX Explorer" }
        Meta { name: "description", content: "Mission details for SpaceX flight {launch.flight_number}." }
        Page {
            Link { to: Route::LaunchList {}, class: "btn btn-ghost mb-4 flex gap-2 w-fit",
                Icon { width: 16, height: 16, icon: FaArrowLeft }
                "Back to Launches"
            }
            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                div { class: "lg:col-span-2 flex flex-col gap-6",
                    LaunchOverview { launch: launch.clone() }
                    if !launch.mission_images().is_empty() {
                        MissionImages { images: launch.mission_images().to_vec(), name: launch.name.clone() }
                    }
                }
                div { class: "flex flex-col gap-6",
                    if rocket_loading {
                        Loading { label: "Loading rocket..." }
                    } else if let Some(rocket) = rocket {
                        RocketSummary { rocket }
                    } else if rocket_unavailable {
                        div { class: "card bg-base-200",
                            div { class: "card-body",
                                p { class: "opacity-70", "No rocket data available." }
                            }
                        }
                    }
                    LaunchLinks { launch: launch.clone() }
                }
            }
        }
    )
}

#[component]
fn LaunchOverview(launch: LaunchDto) -> Element {
    let date = format_datetime(launch.date_utc);
    let static_fire = launch
        .static_fire_date_utc
        .map(format_datetime)
        .unwrap_or_else(|| "N/A".to_string());
    let window = format_optional(launch.window, "sec");
    let details = launch
        .details
        .clone()
        .unwrap_or_else(|| "No details available for this mission.".to_string());

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-4",
                div { class: "flex items-center gap-4",
                    if let Some(patch) = launch.links.patch.small.clone() {
                        img { class: "h-24 w-24 object-contain", src: patch, alt: "{launch.name} patch" }
                    }
                    div {
                        h1 { class: "text-3xl font-bold", "{launch.name}" }
                        div { class: "flex items-center gap-2 mt-1",
                            LaunchStatusBadge { status: launch.status() }
                            span { class: "text-sm opacity-70", "Flight #{launch.flight_number}" }
                        }
                    }
                }
                p { "{details}" }
                div { class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                    div {
                        p { class: "text-sm font-medium opacity-70", "Launch Date" }
                        p { "{date}" }
                    }
                    div {
                        p { class: "text-sm font-medium opacity-70", "Static Fire" }
                        p { "{static_fire}" }
                    }
                    div {
                        p { class: "text-sm font-medium opacity-70", "Launch Window" }
                        p { "{window}" }
                    }
                }
                if !launch.failures.is_empty() {
                    div { role: "alert", class: "alert alert-error flex-col items-start",
                        p { class: "font-bold", "Failures" }
                        ul { class: "list-disc pl-6",
                            for (i, failure) in launch.failures.iter().enumerate() {
                                li { key: "{i}",
                                    "{failure.reason}"
                                    if let Some(time) = failure.time {
                                        " (T+{time}s"
                                        if let Some(altitude) = failure.altitude {
                                            ", {altitude} km"
                                        }
                                        ")"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn MissionImages(images: Vec<String>, name: String) -> Element {
    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body",
                h2 { class: "card-title", "Mission Images" }
                div { class: "grid grid-cols-2 gap-4",
                    for image in images {
                        a { key: "{image}", href: "{image}", target: "_blank", rel: "noopener noreferrer",
                            img { class: "rounded h-48 w-full object-cover", src: "{image}", alt: "{name}" }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn RocketSummary(rocket: RocketDto) -> Element {
    rsx!(
        div { class: "card bg-base-200",
            if let Some(image) = rocket.cover_image() {
                figure {
                    img { class: "h-40 w-full object-cover", src: "{image}", alt: "{rocket.name}" }
                }
            }
            div { class: "card-body",
                div { class: "flex justify-between items-center",
                    h2 { class: "card-title flex gap-2",
                        Icon { width: 18, height: 18, icon: FaRocket }
                        "{rocket.name}"
                    }
                    RocketStatusBadge { label: rocket.status_label(), class: rocket.badge_class() }
                }
                p { class: "text-sm opacity-70 line-clamp-3", "{rocket.description}" }
                div { class: "card-actions",
                    Link {
                        to: Route::RocketDetail { id: rocket.id.clone() },
                        class: "btn btn-outline btn-block",
                        "View Rocket"
                    }
                }
            }
        }
    )
}

#[component]
fn LaunchLinks(launch: LaunchDto) -> Element {
    let webcast = launch.links.webcast.clone();
    let wikipedia = launch.links.wikipedia.clone();

    if webcast.is_none() && wikipedia.is_none() {
        return rsx!();
    }

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title", "Links" }
                if let Some(webcast) = webcast {
                    a { class: "btn btn-error flex gap-2", href: webcast, target: "_blank", rel: "noopener noreferrer",
                        Icon { width: 16, height: 16, icon: FaYoutube }
                        "Watch Webcast"
                    }
                }
                if let Some(wikipedia) = wikipedia {
                    a { class: "btn btn-outline flex gap-2", href: wikipedia, target: "_blank", rel: "noopener noreferrer",
                        Icon { width: 16, height: 16, icon: FaWikipediaW }
                        "Wikipedia"
                    }
                }
            }
        }
    )
}
