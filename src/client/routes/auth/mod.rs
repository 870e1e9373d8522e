pub mod login;
pub mod register;

pub use login::Login;
pub use register::Register;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRocket;
use dioxus_free_icons::Icon;

/// Centered card framing the login & registration forms.
#[component]
fn AuthCard(title: &'static str, children: Element) -> Element {
    rsx!(
        div { class: "min-h-screen flex items-center justify-center p-4 bg-base-300",
            div { class: "card bg-base-100 shadow-xl w-full max-w-md",
                div { class: "card-body gap-4",
                    div { class: "flex flex-col items-center gap-2",
                        Icon { width: 40, height: 40, icon: FaRocket }
                        h1 { class: "text-2xl font-bold", "{title}" }
                    }
                    {children}
                }
            }
        }
    )
}

/// Labelled form input with its validation message.
#[component]
fn FormField(
    label: &'static str,
    input_type: &'static str,
    value: String,
    error: Option<String>,
    on_input: EventHandler<String>,
) -> Element {
    let input_class = if error.is_some() {
        "input input-error w-full"
    } else {
        "input w-full"
    };

    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            input {
                r#type: input_type,
                class: input_class,
                value,
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            if let Some(error) = error {
                p { class: "label text-error", "{error}" }
            }
        }
    )
}
