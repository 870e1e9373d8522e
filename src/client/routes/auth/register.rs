use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use spacex_explorer::{
    form::{Field, FormErrors, RegisterForm},
    session::{self, SessionStore},
};

use crate::client::{
    components::ErrorAlert,
    router::Route,
    routes::auth::{AuthCard, FormField},
    store::navigation::NavState,
};

#[component]
pub fn Register() -> Element {
    let mut session = use_context::<Signal<SessionStore>>();
    let mut nav_state = use_context::<Signal<NavState>>();
    let navigator = navigator();

    let mut form = use_signal(RegisterForm::default);
    let mut errors = use_signal(FormErrors::default);
    let mut failure = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let values = form();
        let validation = values.validate();
        let valid = validation.is_empty();
        errors.set(validation);

        if !valid || submitting() {
            return;
        }

        submitting.set(true);
        failure.set(None);

        spawn(async move {
            let registered =
                session::register(&mut session, &values.name, &values.email, &values.password)
                    .await;

            submitting.set(false);

            if registered {
                nav_state.with_mut(|nav| nav.return_to.clear());
                navigator.replace(Route::Dashboard {});
            } else {
                failure.set(Some("Email already exists".to_string()));
            }
        });
    };

    rsx!(
        Title { "Register | SpaceX Explorer" }
        Meta { name: "description", content: "Create a SpaceX Explorer account." }
        AuthCard { title: "Create an account",
            if let Some(message) = failure() {
                ErrorAlert { message }
            }
            form {
                class: "flex flex-col gap-2",
                onsubmit: submit,
                FormField {
                    label: "Name",
                    input_type: "text",
                    value: form.read().name.clone(),
                    error: errors.read().message(Field::Name),
                    on_input: move |value| form.write().name = value,
                }
                FormField {
                    label: "Email",
                    input_type: "email",
                    value: form.read().email.clone(),
                    error: errors.read().message(Field::Email),
                    on_input: move |value| form.write().email = value,
                }
                FormField {
                    label: "Password",
                    input_type: "password",
                    value: form.read().password.clone(),
                    error: errors.read().message(Field::Password),
                    on_input: move |value| form.write().password = value,
                }
                FormField {
                    label: "Confirm password",
                    input_type: "password",
                    value: form.read().confirm_password.clone(),
                    error: errors.read().message(Field::ConfirmPassword),
                    on_input: move |value| form.write().confirm_password = value,
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary w-full mt-2",
                    disabled: submitting(),
                    if submitting() {
                        span { class: "loading loading-spinner" }
                    }
                    "Create account"
                }
            }
            p { class: "text-sm text-center",
                "Already have an account? "
                Link { to: Route::Login {}, class: "link link-primary", "Login" }
            }
        }
    )
}
