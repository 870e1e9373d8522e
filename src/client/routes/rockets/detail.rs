use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaArrowUpRightFromSquare, FaRocket};
use dioxus_free_icons::Icon;
use spacex_explorer::{
    config::Config,
    gateway::AppGateway,
    model::{
        launch::LaunchDto,
        rocket::{RocketDto, StageDto},
    },
    util::format::{format_date, format_number, format_optional},
    view::detail::{load_rocket_detail, RocketDetail as RocketDetailState},
};

use crate::client::{
    components::{LaunchStatusBadge, Loading, MissingEntity, Page, RocketStatusBadge},
    router::Route,
    store::navigation::NavState,
};

#[component]
pub fn RocketDetail(id: ReadSignal<String>) -> Element {
    let config = use_context::<Config>();
    let gateway = use_context::<AppGateway>();
    let mut nav_state = use_context::<Signal<NavState>>();
    let navigator = navigator();

    let mut detail = use_signal(RocketDetailState::default);

    // Reloads whenever the route ID changes; results of the previous ID are dropped
    use_effect(move || {
        let id = id();
        let gateway = gateway.clone();

        spawn(async move {
            load_rocket_detail(&mut detail, &gateway, &id).await;
        });
    });

    let state = detail.read();

    if state.primary_loading() {
        return rsx!(Loading { label: "Loading rocket..." });
    }

    let Some(rocket) = state.primary() else {
        return rsx!(
            Title { "Rocket Not Found | SpaceX Explorer" }
            Page {
                MissingEntity {
                    title: "Rocket not found",
                    message: state.message().unwrap_or("The requested rocket could not be found.").to_string(),
                    back_to: Route::RocketList {},
                    back_label: "Back to Rockets",
                }
            }
        );
    };

    let limit = config.related_launch_limit;
    let preview: Vec<LaunchDto> = state.launch_preview(limit).to_vec();
    let has_more = state.has_more_launches(limit);
    let launches_loading = state.secondary_loading();
    let rocket_id = rocket.id.clone();

    let view_all = move |_| {
        nav_state.write().launch_rocket_scope = Some(rocket_id.clone());
        navigator.push(Route::LaunchList {});
    };

    rsx!(
        Title { "{rocket.name} | SpaceX Explorer" }
        Meta { name: "description", content: "{rocket.description}" }
        Page {
            Link { to: Route::RocketList {}, class: "btn btn-ghost mb-4 flex gap-2 w-fit",
                Icon { width: 16, height: 16, icon: FaArrowLeft }
                "Back to Rockets"
            }
            RocketOverview { rocket: rocket.clone() }
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6",
                RocketSpecifications { rocket: rocket.clone() }
                div { class: "card bg-base-200",
                    div { class: "card-body",
                        h2 { class: "card-title", "Launches" }
                        if launches_loading {
                            Loading { label: "Loading launches..." }
                        } else if preview.is_empty() {
                            p { class: "opacity-70", "No launches found for this rocket." }
                        } else {
                            ul { class: "timeline timeline-vertical timeline-compact",
                                for launch in preview.iter() {
                                    RelatedLaunch { key: "{launch.id}", launch: launch.clone() }
                                }
                            }
                            if has_more {
                                button {
                                    class: "btn btn-outline mt-4",
                                    onclick: view_all,
                                    "View All Launches"
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
fn RocketOverview(rocket: RocketDto) -> Element {
    let first_flight = format_date(rocket.first_flight);
    let cost = format_number(rocket.cost_per_launch);

    rsx!(
        div { class: "card lg:card-side bg-base-200 shadow-sm",
            if let Some(image) = rocket.cover_image() {
                figure { class: "lg:w-1/2",
                    img { class: "h-96 w-full object-cover", src: "{image}", alt: "{rocket.name}" }
                }
            }
            div { class: "card-body",
                div { class: "flex items-center gap-4",
                    h1 { class: "text-3xl font-bold", "{rocket.name}" }
                    RocketStatusBadge { label: rocket.status_label(), class: rocket.badge_class() }
                }
                p { class: "opacity-70", "{rocket.description}" }
                div { class: "grid grid-cols-2 gap-2 mt-2",
                    Fact { label: "First Flight", value: first_flight }
                    Fact { label: "Success Rate", value: "{rocket.success_rate_pct}%" }
                    Fact { label: "Company", value: rocket.company.clone() }
                    Fact { label: "Country", value: rocket.country.clone() }
                    Fact { label: "Cost Per Launch", value: "${cost}" }
                    Fact { label: "Stages", value: "{rocket.stages}" }
                }
                if let Some(wikipedia) = rocket.wikipedia.clone() {
                    a {
                        class: "link link-primary flex items-center gap-2 mt-2",
                        href: wikipedia,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { width: 14, height: 14, icon: FaArrowUpRightFromSquare }
                        "Wikipedia Page"
                    }
                }
            }
        }
    )
}

#[component]
fn RocketSpecifications(rocket: RocketDto) -> Element {
    let height = format!(
        "{} m / {} ft",
        format_optional(rocket.height.meters, ""),
        format_optional(rocket.height.feet, "")
    );
    let diameter = format!(
        "{} m / {} ft",
        format_optional(rocket.diameter.meters, ""),
        format_optional(rocket.diameter.feet, "")
    );
    let mass = format!(
        "{} kg / {} lb",
        format_number(rocket.mass.kg),
        format_number(rocket.mass.lb)
    );
    let payloads: Vec<(String, String, String)> = rocket
        .payload_weights
        .iter()
        .map(|payload| {
            (
                payload.id.clone(),
                payload.name.clone(),
                format!(
                    "{} kg / {} lb",
                    format_number(payload.kg),
                    format_number(payload.lb)
                ),
            )
        })
        .collect();
    let engines = &rocket.engines;

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body gap-2",
                h2 { class: "card-title", "Specifications" }
                div { class: "collapse collapse-arrow bg-base-100",
                    input { r#type: "radio", name: "rocket-specs", checked: true }
                    div { class: "collapse-title font-semibold", "Dimensions" }
                    div { class: "collapse-content grid grid-cols-2 gap-2",
                        Fact { label: "Height", value: height }
                        Fact { label: "Diameter", value: diameter }
                        Fact { label: "Mass", value: mass }
                    }
                }
                div { class: "collapse collapse-arrow bg-base-100",
                    input { r#type: "radio", name: "rocket-specs" }
                    div { class: "collapse-title font-semibold", "Engines" }
                    div { class: "collapse-content grid grid-cols-2 gap-2",
                        Fact { label: "Number of Engines", value: "{engines.number}" }
                        Fact { label: "Type", value: engines.kind.clone() }
                        Fact { label: "Version", value: engines.version.clone() }
                        Fact { label: "Layout", value: format_optional(engines.layout.as_deref(), "") }
                        Fact { label: "Propellant", value: "{engines.propellant_1} / {engines.propellant_2}" }
                    }
                }
                div { class: "collapse collapse-arrow bg-base-100",
                    input { r#type: "radio", name: "rocket-specs" }
                    div { class: "collapse-title font-semibold", "Stages" }
                    div { class: "collapse-content flex flex-col gap-4",
                        Stage { title: "First Stage", stage: rocket.first_stage.clone() }
                        Stage { title: "Second Stage", stage: rocket.second_stage.clone() }
                    }
                }
                div { class: "collapse collapse-arrow bg-base-100",
                    input { r#type: "radio", name: "rocket-specs" }
                    div { class: "collapse-title font-semibold", "Payload Capacity" }
                    div { class: "collapse-content",
                        ul { class: "list-disc pl-6",
                            for (id, name, weight) in payloads {
                                li { key: "{id}",
                                    strong { "{name}: " }
                                    "{weight}"
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
fn Stage(title: &'static str, stage: StageDto) -> Element {
    let reusable = if stage.reusable { "Yes" } else { "No" };

    rsx!(
        div {
            p { class: "font-bold mb-2", "{title}" }
            div { class: "grid grid-cols-2 gap-2",
                Fact { label: "Reusable", value: reusable.to_string() }
                Fact { label: "Engines", value: "{stage.engines}" }
                Fact { label: "Fuel Amount", value: format_optional(stage.fuel_amount_tons, "tons") }
                Fact { label: "Burn Time", value: format_optional(stage.burn_time_sec, "sec") }
            }
        }
    )
}

#[component]
fn Fact(label: &'static str, value: String) -> Element {
    rsx!(
        div {
            p { class: "text-sm font-medium opacity-70", "{label}" }
            p { "{value}" }
        }
    )
}

#[component]
fn RelatedLaunch(launch: LaunchDto) -> Element {
    let date = format_date(launch.date_utc.date_naive());
    let details = launch
        .details
        .clone()
        .unwrap_or_else(|| "No details available".to_string());

    rsx!(
        li {
            div { class: "timeline-middle",
                Icon { width: 14, height: 14, icon: FaRocket }
            }
            div { class: "timeline-end mb-4",
                div { class: "flex items-center gap-2",
                    Link {
                        to: Route::LaunchDetail { id: launch.id.clone() },
                        class: "font-bold link link-hover",
                        "{launch.name}"
                    }
                    LaunchStatusBadge { status: launch.status() }
                }
                p { class: "text-sm", "Launch Date: {date}" }
                p { class: "text-sm opacity-70 line-clamp-2", "{details}" }
            }
            hr {}
        }
    )
}
