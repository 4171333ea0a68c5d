use dioxus::prelude::*;

use crate::render::UserRow;

/// Admin user panel. Actions are reported by username; the page decides
/// what to confirm and send.
#[component]
pub fn UserList(
    rows: Vec<UserRow>,
    on_toggle_role: EventHandler<UserRow>,
    on_reset_password: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        ul { id: "user-list", class: "user-list",
            for row in rows {
                li { key: "{row.username}", class: "user-row",
                    span { class: "user-name", "{row.username}" }
                    span { class: "user-role", "{row.role_label()}" }
                    div { class: "user-actions",
                        button {
                            class: "secondary",
                            onclick: {
                                let row = row.clone();
                                move |_| on_toggle_role.call(row.clone())
                            },
                            "{row.toggle_label()}"
                        }
                        button {
                            class: "secondary",
                            onclick: {
                                let username = row.username.clone();
                                move |_| on_reset_password.call(username.clone())
                            },
                            "Reset Password"
                        }
                        button {
                            class: "danger",
                            onclick: {
                                let username = row.username.clone();
                                move |_| on_delete.call(username.clone())
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
