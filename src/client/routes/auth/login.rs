use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use spacex_explorer::{
    form::{Field, FormErrors, LoginForm},
    session::{self, SessionStore},
};

use crate::client::{
    components::ErrorAlert,
    router::Route,
    routes::auth::{AuthCard, FormField},
    store::navigation::NavState,
};

#[component]
pub fn Login() -> Element {
    let mut session = use_context::<Signal<SessionStore>>();
    let mut nav_state = use_context::<Signal<NavState>>();
    let navigator = navigator();

    let mut form = use_signal(LoginForm::default);
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
            let logged_in = session::login(&mut session, &values.email, &values.password).await;

            submitting.set(false);

            if logged_in {
                let destination = nav_state
                    .with_mut(|nav| nav.return_to.take())
                    .unwrap_or(Route::Dashboard {});

                navigator.replace(destination);
            } else {
                failure.set(Some("Invalid email or password".to_string()));
            }
        });
    };

    rsx!(
        Title { "Login | SpaceX Explorer" }
        Meta { name: "description", content: "Log in to browse SpaceX rockets and launches." }
        AuthCard { title: "Welcome to SpaceX Explorer",
            if let Some(message) = failure() {
                ErrorAlert { message }
            }
            form {
                class: "flex flex-col gap-2",
                onsubmit: submit,
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
                button {
                    r#type: "submit",
                    class: "btn btn-primary w-full mt-2",
                    disabled: submitting(),
                    if submitting() {
                        span { class: "loading loading-spinner" }
                    }
                    "Sign in"
                }
            }
            button {
                class: "btn btn-ghost btn-sm",
                onclick: move |_| {
                    form.set(LoginForm::test_credentials());
                    errors.set(FormErrors::default());
                },
                "Use test account"
            }
            p { class: "text-sm text-center",
                "Don't have an account? "
                Link { to: Route::Register {}, class: "link link-primary", "Register" }
            }
        }
    )
}
