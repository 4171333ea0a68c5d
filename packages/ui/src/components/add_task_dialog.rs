use dioxus::prelude::*;

use super::ModalOverlay;
use crate::controllers::NewTaskForm;

/// "Add task" dialog. The shared checkbox is only drawn for admins.
#[component]
pub fn AddTaskDialog(
    open: bool,
    show_shared: bool,
    mut form: Signal<NewTaskForm>,
    on_submit: EventHandler<NewTaskForm>,
    on_close: EventHandler<()>,
) -> Element {
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(form());
    };

    rsx! {
        ModalOverlay { open, on_close,
            div { class: "modal-header",
                h2 { "Add Task" }
                button {
                    class: "close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            form { onsubmit: handle_submit,
                label { r#for: "new-task-title", "Title" }
                input {
                    id: "new-task-title",
                    r#type: "text",
                    value: form().title,
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
                label { r#for: "new-task-description", "Description" }
                textarea {
                    id: "new-task-description",
                    rows: 3,
                    value: form().description,
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }
                if show_shared {
                    label { class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: form().is_shared,
                            onchange: move |evt: FormEvent| form.write().is_shared = evt.checked(),
                        }
                        "Shared with everyone"
                    }
                }
                div { class: "form-actions",
                    button { class: "primary", r#type: "submit", "Create Task" }
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
