//! # Pure view models for the dashboard
//!
//! Everything the dashboard draws is computed here from API records, with no
//! signals, no DOM and no network. Components in [`crate::components`] only
//! turn these structs into markup, which keeps the interesting decisions
//! (which label an admin sees, what an empty list says) unit-testable.

use api::{TaskRecord, UserSummary};
use store::Session;

/// Text rendered in place of an empty task list.
pub const NO_TASKS: &str = "No tasks found.";

/// Profile card contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub username: String,
    pub role: &'static str,
    pub created_at: String,
}

impl ProfileView {
    pub fn from_session(session: &Session) -> Self {
        Self {
            username: session.username.clone(),
            role: session.role_label(),
            created_at: session.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Done,
    Pending,
}

impl TaskStatus {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Done => "✅ Done",
            Self::Pending => "⏳ Pending",
        }
    }
}

/// Ownership badge, only shown to admins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerLabel {
    Shared,
    Owner(i64),
}

impl OwnerLabel {
    pub fn text(&self) -> String {
        match self {
            Self::Shared => "Shared".to_string(),
            Self::Owner(id) => format!("Owner: {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Stable key for list diffing; falls back to the row index.
    pub key: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub owner: Option<OwnerLabel>,
}

impl TaskRow {
    pub fn new(index: usize, task: &TaskRecord, viewer_is_admin: bool) -> Self {
        let owner = viewer_is_admin.then(|| {
            if task.is_shared {
                OwnerLabel::Shared
            } else {
                OwnerLabel::Owner(task.owner_id)
            }
        });
        Self {
            key: task
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| format!("row-{index}")),
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: if task.done {
                TaskStatus::Done
            } else {
                TaskStatus::Pending
            },
            owner,
        }
    }
}

/// Full contents of the task list container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskListView {
    #[default]
    Empty,
    Rows(Vec<TaskRow>),
}

impl TaskListView {
    pub fn build(tasks: &[TaskRecord], viewer_is_admin: bool) -> Self {
        if tasks.is_empty() {
            return Self::Empty;
        }
        Self::Rows(
            tasks
                .iter()
                .enumerate()
                .map(|(i, task)| TaskRow::new(i, task, viewer_is_admin))
                .collect(),
        )
    }

    pub fn rows(&self) -> &[TaskRow] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows.as_slice(),
        }
    }
}

/// One line of the admin user panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub username: String,
    pub is_admin: bool,
}

impl UserRow {
    pub fn from_summary(user: &UserSummary) -> Self {
        Self {
            username: user.username.clone(),
            is_admin: user.is_admin,
        }
    }

    pub fn role_label(&self) -> &'static str {
        if self.is_admin {
            "Admin"
        } else {
            "User"
        }
    }

    /// Role the toggle button switches to.
    pub fn toggled_role(&self) -> bool {
        !self.is_admin
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.toggled_role() {
            "Make Admin"
        } else {
            "Make User"
        }
    }
}

pub fn user_rows(users: &[UserSummary]) -> Vec<UserRow> {
    users.iter().map(UserRow::from_summary).collect()
}
