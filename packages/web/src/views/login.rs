//! Login page: credentials in, session out.

use dioxus::prelude::*;
use ui::components::{FormMessage, MessageTone};
use ui::{use_services, LoginOutcome};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let services = use_services();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut message = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let login = services.login();
        spawn(async move {
            message.set(None);
            loading.set(true);
            if let LoginOutcome::Rejected(reason) = login.submit(&username(), &password()).await {
                message.set(Some(reason));
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "page auth-page",
            h1 { "Sign in" }

            form { class: "auth-form", onsubmit: handle_login,
                FormMessage { message: message().map(|text| (MessageTone::Error, text)) }

                label { r#for: "username", "Username" }
                input {
                    id: "username",
                    name: "username",
                    r#type: "text",
                    autocomplete: "username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }

            p { class: "auth-switch",
                "No account yet? "
                Link { to: Route::Signup {}, "Create one" }
            }
        }
    }
}
