//! # API crate: client side of the task-management HTTP API
//!
//! The web front end owns no business logic: authentication, password
//! storage, authorization and task persistence all live in a remote service.
//! This crate is the single place that knows how to talk to it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Request/response bodies (`Credentials`, `TaskRecord`, `UserSummary`, ...) |
//! | [`error`] | [`ApiError`] and the [`ErrorBody`] parsed from failed responses |
//! | [`client`] | [`HttpClient`], the reqwest-backed implementation of [`TaskApi`] |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Trait method |
//! |--------|------|------|--------------|
//! | POST | `/users/login` (form) | none | [`TaskApi::login`] |
//! | POST | `/users/register` | optional bearer | [`TaskApi::register`] |
//! | GET | `/users/all` | bearer | [`TaskApi::list_users`] |
//! | PUT | `/users/{username}/role?is_admin=` | bearer | [`TaskApi::change_role`] |
//! | DELETE | `/users/{username}` | bearer | [`TaskApi::delete_user`] |
//! | PUT | `/users/{username}/password` | bearer | [`TaskApi::reset_password`] |
//! | GET | `/tasks` | bearer | [`TaskApi::list_tasks`] |
//! | POST | `/tasks/` | bearer | [`TaskApi::create_task`] |
//!
//! Controllers in the `ui` crate are generic over [`TaskApi`], so tests can
//! swap in a scripted implementation without a network.

pub mod client;
pub mod error;
pub mod models;

pub use client::HttpClient;
pub use error::{ApiError, ErrorBody};
pub use models::{
    Credentials, LoginResponse, MessageResponse, NewTask, RegisterRequest, RegisterResponse,
    TaskRecord, UserSummary,
};

use std::future::Future;

/// Async interface to the task API.
///
/// Futures are not required to be `Send`: in the browser they wrap `fetch`
/// promises and run on the single-threaded event loop.
pub trait TaskApi {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;

    /// `token` is the caller's session when an admin creates an account.
    fn register(
        &self,
        request: &RegisterRequest,
        token: Option<&str>,
    ) -> impl Future<Output = Result<RegisterResponse, ApiError>>;

    fn list_users(&self, token: &str) -> impl Future<Output = Result<Vec<UserSummary>, ApiError>>;

    fn change_role(
        &self,
        token: &str,
        username: &str,
        is_admin: bool,
    ) -> impl Future<Output = Result<MessageResponse, ApiError>>;

    fn delete_user(
        &self,
        token: &str,
        username: &str,
    ) -> impl Future<Output = Result<MessageResponse, ApiError>>;

    fn reset_password(
        &self,
        token: &str,
        username: &str,
        new_password: &str,
    ) -> impl Future<Output = Result<MessageResponse, ApiError>>;

    fn list_tasks(&self, token: &str) -> impl Future<Output = Result<Vec<TaskRecord>, ApiError>>;

    fn create_task(
        &self,
        token: &str,
        task: &NewTask,
    ) -> impl Future<Output = Result<MessageResponse, ApiError>>;
}
