use dioxus::prelude::*;

#[component]
pub fn Loading(label: Option<&'static str>) -> Element {
    rsx!(
        div { class: "flex flex-col items-center justify-center gap-2 min-h-[50vh]",
            span { class: "loading loading-spinner loading-lg" }
            if let Some(label) = label {
                p { class: "text-sm opacity-70", "{label}" }
            }
        }
    )
}
