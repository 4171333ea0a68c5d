use api::{ApiError, NewTask, RegisterRequest, TaskApi};
use store::{Session, SessionStore};

use super::{paths, ActionOutcome};
use crate::browser::Browser;
use crate::render::{user_rows, TaskListView, UserRow};

const LOAD_TASKS_FAILED: &str = "Failed to load tasks";

/// Fields of the admin "add user" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUserForm {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

/// Fields of the "add task" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTaskForm {
    pub title: String,
    pub description: String,
    /// Only honoured for admins.
    pub is_shared: bool,
}

/// The `/user` page.
///
/// Every method takes the [`Session`] returned by [`Self::enter`]. List
/// loaders return `None` when the previous render should stay on screen.
pub struct DashboardController<A, S, B> {
    api: A,
    store: S,
    browser: B,
}

impl<A: TaskApi, S: SessionStore, B: Browser> DashboardController<A, S, B> {
    pub fn new(api: A, store: S, browser: B) -> Self {
        Self {
            api,
            store,
            browser,
        }
    }

    /// Load the stored session, or leave for the login page without
    /// touching the network.
    pub fn enter(&self) -> Option<Session> {
        let session = Session::load(&self.store);
        if session.is_none() {
            tracing::info!("no stored session, redirecting to login");
            self.browser.navigate(paths::LOGIN);
        }
        session
    }

    pub async fn load_tasks(&self, session: &Session) -> Option<TaskListView> {
        match self.api.list_tasks(&session.token).await {
            Ok(tasks) => Some(TaskListView::build(&tasks, session.is_admin)),
            Err(err) if err.is_network() => {
                tracing::error!(%err, "task list unreachable");
                None
            }
            Err(err) => {
                tracing::error!(%err, "failed to load tasks");
                self.browser.alert(err.detail_or(LOAD_TASKS_FAILED));
                None
            }
        }
    }

    /// Admins only; any failure is logged and nothing else happens.
    pub async fn load_users(&self, session: &Session) -> Option<Vec<UserRow>> {
        if !session.is_admin {
            return None;
        }
        match self.api.list_users(&session.token).await {
            Ok(users) => Some(user_rows(&users)),
            Err(err) => {
                tracing::error!(%err, "failed to load users");
                None
            }
        }
    }

    pub async fn toggle_role(
        &self,
        session: &Session,
        user: &UserRow,
    ) -> ActionOutcome<Vec<UserRow>> {
        let result = self
            .api
            .change_role(&session.token, &user.username, user.toggled_role())
            .await
            .map(|reply| reply.text_or("Role updated").to_string());
        self.finish_user_action(session, result, "Failed to update role")
            .await
    }

    /// Prompt for a new password. An empty or cancelled answer sends nothing.
    pub async fn reset_password(
        &self,
        session: &Session,
        username: &str,
    ) -> ActionOutcome<Vec<UserRow>> {
        let answer = self
            .browser
            .prompt(&format!("Enter a new password for {username}:"));
        let Some(new_password) = answer.filter(|p| !p.is_empty()) else {
            return ActionOutcome::Skipped;
        };

        let result = self
            .api
            .reset_password(&session.token, username, &new_password)
            .await
            .map(|reply| reply.text_or("Password updated successfully").to_string());
        self.finish_user_action(session, result, "Failed to update password")
            .await
    }

    pub async fn delete_user(
        &self,
        session: &Session,
        username: &str,
    ) -> ActionOutcome<Vec<UserRow>> {
        let question = format!("Are you sure you want to delete user \"{username}\"?");
        if !self.browser.confirm(&question) {
            return ActionOutcome::Skipped;
        }

        let result = self
            .api
            .delete_user(&session.token, username)
            .await
            .map(|reply| reply.text_or("User deleted").to_string());
        self.finish_user_action(session, result, "Failed to delete user")
            .await
    }

    pub async fn add_user(
        &self,
        session: &Session,
        form: &NewUserForm,
    ) -> ActionOutcome<Vec<UserRow>> {
        let username = form.username.trim();
        if username.is_empty() || form.password.is_empty() {
            self.browser.alert("Username and password are required");
            return ActionOutcome::Skipped;
        }

        let request = RegisterRequest {
            username: username.to_string(),
            password: form.password.clone(),
            is_admin: form.is_admin,
        };
        let result = self
            .api
            .register(&request, Some(&session.token))
            .await
            .map(|reply| {
                reply
                    .msg
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "User created successfully".to_string())
            });
        self.finish_user_action(session, result, "Failed to create user")
            .await
    }

    pub async fn add_task(
        &self,
        session: &Session,
        form: &NewTaskForm,
    ) -> ActionOutcome<TaskListView> {
        let title = form.title.trim();
        if title.is_empty() {
            self.browser.alert("Task title is required.");
            return ActionOutcome::Skipped;
        }

        let task = NewTask {
            title: title.to_string(),
            description: form.description.trim().to_string(),
            is_shared: form.is_shared && session.is_admin,
        };
        match self.api.create_task(&session.token, &task).await {
            Ok(reply) => {
                self.browser.alert(reply.text_or("Task created successfully"));
                ActionOutcome::Applied(self.load_tasks(session).await)
            }
            Err(err) => {
                tracing::error!(%err, "failed to create task");
                self.browser.alert(err.detail_or("Failed to create task"));
                ActionOutcome::Failed
            }
        }
    }

    pub fn logout(&self) {
        Session::clear(&self.store);
        self.browser.navigate(paths::LOGIN);
    }

    /// Alert the outcome and, on success, re-fetch the user list once.
    async fn finish_user_action(
        &self,
        session: &Session,
        result: Result<String, ApiError>,
        fallback: &str,
    ) -> ActionOutcome<Vec<UserRow>> {
        match result {
            Ok(message) => {
                self.browser.alert(&message);
                ActionOutcome::Applied(self.load_users(session).await)
            }
            Err(err) => {
                tracing::error!(%err, "{fallback}");
                self.browser.alert(err.detail_or(fallback));
                ActionOutcome::Failed
            }
        }
    }
}
