use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

#[component]
pub fn SearchInput(value: String, placeholder: &'static str, on_input: EventHandler<String>) -> Element {
    rsx!(
        label { class: "input w-full md:max-w-md flex items-center gap-2",
            Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
            input {
                r#type: "search",
                class: "grow",
                placeholder,
                value,
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        }
    )
}

/// `<select>` over `(value, label)` options, reporting the selected value.
#[component]
pub fn FilterSelect(
    options: Vec<(&'static str, &'static str)>,
    value: &'static str,
    on_change: EventHandler<String>,
) -> Element {
    rsx!(
        select {
            class: "select w-full md:w-48",
            value,
            onchange: move |evt: FormEvent| on_change.call(evt.value()),
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    value: option_value,
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
    )
}
