use dioxus::prelude::*;

use crate::render::{TaskListView, NO_TASKS};

/// The task container: one row per task, or the empty notice.
#[component]
pub fn TaskList(view: TaskListView) -> Element {
    rsx! {
        ul { id: "task-list", class: "task-list",
            {match view {
                TaskListView::Empty => rsx! {
                    li { class: "task-empty", "{NO_TASKS}" }
                },
                TaskListView::Rows(rows) => rsx! {
                    for row in rows {
                        li { key: "{row.key}", class: "task-row",
                            div { class: "task-title", "{row.title}" }
                            div { class: "task-description", "{row.description}" }
                            div { class: "task-meta",
                                span { class: "task-status", "{row.status.glyph()}" }
                                if let Some(owner) = &row.owner {
                                    span { class: "task-owner", "{owner.text()}" }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
