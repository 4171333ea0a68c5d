//! Registration page view with client-side validation.

use dioxus::prelude::*;
use ui::components::{FormMessage, MessageTone};
use ui::controllers::{CREATING_ACCOUNT, REGISTERED};
use ui::{use_services, SignupForm, SignupOutcome};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let services = use_services();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut message = use_signal(|| Option::<(MessageTone, String)>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let signup = services.signup();
        let form = SignupForm {
            username: username(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
        };

        let valid = match signup.validate(&form) {
            Ok(valid) => valid,
            Err(err) => {
                message.set(Some((MessageTone::Error, err.to_string())));
                return;
            }
        };

        message.set(Some((MessageTone::Info, CREATING_ACCOUNT.to_string())));
        loading.set(true);
        spawn(async move {
            match signup.register(&valid).await {
                SignupOutcome::Registered { .. } => {
                    message.set(Some((MessageTone::Success, REGISTERED.to_string())));
                    signup.redirect_to_dashboard().await;
                }
                SignupOutcome::Failed(failure) => {
                    message.set(Some((MessageTone::Error, failure.message())));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "page auth-page",
            h1 { "Create Account" }

            form { class: "auth-form", onsubmit: handle_signup,
                FormMessage { message: message() }

                label { r#for: "signup-username", "Username" }
                input {
                    id: "signup-username",
                    r#type: "text",
                    autocomplete: "username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                label { r#for: "signup-email", "Email" }
                input {
                    id: "signup-email",
                    r#type: "email",
                    autocomplete: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "signup-password", "Password" }
                input {
                    id: "signup-password",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                label { r#for: "signup-confirm-password", "Confirm password" }
                input {
                    id: "signup-confirm-password",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p { class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
