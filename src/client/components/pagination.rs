use dioxus::prelude::*;

/// Page buttons for a list with more than one page.
#[component]
pub fn Pagination(page: usize, total_pages: usize, on_change: EventHandler<usize>) -> Element {
    rsx!(
        div { class: "join flex justify-center mt-6",
            button {
                class: "join-item btn",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page - 1),
                "«"
            }
            for number in 1..=total_pages {
                button {
                    key: "{number}",
                    class: if number == page { "join-item btn btn-active" } else { "join-item btn" },
                    onclick: move |_| on_change.call(number),
                    "{number}"
                }
            }
            button {
                class: "join-item btn",
                disabled: page >= total_pages,
                onclick: move |_| on_change.call(page + 1),
                "»"
            }
        }
    )
}
