use dioxus::prelude::*;

use super::ModalOverlay;
use crate::controllers::NewUserForm;

/// Admin "add user" dialog. The page owns `form` so it can reset it after a
/// successful submission.
#[component]
pub fn AddUserDialog(
    open: bool,
    mut form: Signal<NewUserForm>,
    on_submit: EventHandler<NewUserForm>,
    on_close: EventHandler<()>,
) -> Element {
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(form());
    };

    rsx! {
        ModalOverlay { open, on_close,
            div { class: "modal-header",
                h2 { "Add User" }
                button {
                    class: "close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            form { onsubmit: handle_submit,
                label { r#for: "new-user-username", "Username" }
                input {
                    id: "new-user-username",
                    r#type: "text",
                    value: form().username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                label { r#for: "new-user-password", "Password" }
                input {
                    id: "new-user-password",
                    r#type: "password",
                    value: form().password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                label { class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: form().is_admin,
                        onchange: move |evt: FormEvent| form.write().is_admin = evt.checked(),
                    }
                    "Administrator"
                }
                div { class: "form-actions",
                    button { class: "primary", r#type: "submit", "Create User" }
                    button {
                        class: "secondary",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
