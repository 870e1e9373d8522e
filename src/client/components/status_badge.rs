use dioxus::prelude::*;
use spacex_explorer::model::launch::LaunchStatus;

#[component]
pub fn LaunchStatusBadge(status: LaunchStatus) -> Element {
    let class = status.badge_class();

    rsx!(
        span { class: "badge {class}", "{status.label()}" }
    )
}

#[component]
pub fn RocketStatusBadge(label: &'static str, class: &'static str) -> Element {
    rsx!(
        span { class: "badge {class}", "{label}" }
    )
}
