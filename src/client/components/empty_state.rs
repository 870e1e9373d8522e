use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowLeft;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

/// Card shown in place of a list without results.
#[component]
pub fn EmptyState(title: String, message: String) -> Element {
    rsx!(
        div { class: "card bg-base-200 w-full",
            div { class: "card-body items-center text-center",
                h3 { class: "card-title", "{title}" }
                p { class: "opacity-70", "{message}" }
            }
        }
    )
}

#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx!(
        div { role: "alert", class: "alert alert-error",
            span { "{message}" }
        }
    )
}

/// Detail page fallback when the entity could not be loaded, with a single way back.
#[component]
pub fn MissingEntity(title: String, message: String, back_to: Route, back_label: String) -> Element {
    rsx!(
        div { class: "card bg-base-200 w-full max-w-xl mx-auto",
            div { class: "card-body items-center text-center gap-4",
                h2 { class: "card-title", "{title}" }
                p { class: "opacity-70", "{message}" }
                Link {
                    to: back_to,
                    class: "btn btn-primary flex gap-2",
                    Icon { width: 16, height: 16, icon: FaArrowLeft }
                    "{back_label}"
                }
            }
        }
    )
}
