use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Page Not Found | SpaceX Explorer" }
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4 p-4 text-center",
            p { class: "text-8xl font-bold opacity-30", "404" }
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { class: "opacity-70 max-w-md",
                "The page {path} does not exist. It may have been moved or deleted."
            }
            Link { to: Route::Dashboard {}, class: "btn btn-primary", "Go to Home" }
        }
    )
}
