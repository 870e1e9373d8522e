use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or("");

    rsx!(
        div {
            class: "w-full max-w-[1440px] mx-auto p-6 {class}",
            {children}
        }
    )
}
