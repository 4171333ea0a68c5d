//! # Page controllers
//!
//! The effectful half of each page: they call the API, read and write the
//! session, and talk to the user through [`crate::Browser`]. Each controller
//! is generic over its three collaborators so the same code runs against
//! `HttpClient` + `localStorage` in the browser and against scripted doubles
//! in tests.
//!
//! | Controller | Page | Entry points |
//! |------------|------|--------------|
//! | [`LoginController`] | `/` | `submit` |
//! | [`SignupController`] | `/signup` | `validate`, `register`, `redirect_to_dashboard` |
//! | [`DashboardController`] | `/user` | `enter`, `load_tasks`, `load_users`, user/task mutations, `logout` |
//!
//! Failures never escape a controller: they are turned into an outcome value,
//! an inline message, or an alert.

mod dashboard;
mod login;
mod signup;

#[cfg(test)]
pub(crate) mod testing;

pub use dashboard::{DashboardController, NewTaskForm, NewUserForm};
pub use login::{LoginController, LoginOutcome, LOGIN_FAILED};
pub use signup::{SignupController, SignupOutcome, CREATING_ACCOUNT, REGISTERED};

/// Routes the controllers navigate between.
pub mod paths {
    pub const LOGIN: &str = "/";
    pub const SIGNUP: &str = "/signup";
    pub const DASHBOARD: &str = "/user";
}

/// Result of a dashboard action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<T> {
    /// Nothing was sent: the user cancelled, declined, or left a field empty.
    Skipped,
    /// The server or network rejected the request; the list is unchanged.
    Failed,
    /// The server accepted it. Holds the re-fetched list, or `None` if the
    /// refresh itself failed.
    Applied(Option<T>),
}

impl<T> ActionOutcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The refreshed list, when there is one to render.
    pub fn refreshed(self) -> Option<T> {
        match self {
            Self::Applied(list) => list,
            _ => None,
        }
    }
}
