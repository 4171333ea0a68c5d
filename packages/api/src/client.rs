//! # HTTP client for the task API
//!
//! [`HttpClient`] is the production [`TaskApi`]. It wraps a [`reqwest::Client`],
//! which compiles to `fetch` on wasm and to hyper on native targets, and a base
//! [`Url`] every endpoint is resolved against.
//!
//! Path parameters (usernames) are appended as percent-encoded segments, so a
//! username can never escape its segment. Error bodies are read as text and
//! handed to [`ErrorBody::parse`]; success bodies are decoded as JSON.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ApiError, ErrorBody};
use crate::models::*;
use crate::TaskApi;

#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// The URL must be absolute; a path prefix such as `/api` is kept.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "api response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::status(status.as_u16(), ErrorBody::parse(&text)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl TaskApi for HttpClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let request = self
            .http
            .post(self.endpoint(&["users", "login"]))
            .form(credentials);
        self.send(request).await
    }

    async fn register(
        &self,
        request: &RegisterRequest,
        token: Option<&str>,
    ) -> Result<RegisterResponse, ApiError> {
        let mut builder = self
            .http
            .post(self.endpoint(&["users", "register"]))
            .json(request);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        self.send(builder).await
    }

    async fn list_users(&self, token: &str) -> Result<Vec<UserSummary>, ApiError> {
        let request = self
            .http
            .get(self.endpoint(&["users", "all"]))
            .bearer_auth(token);
        self.send(request).await
    }

    async fn change_role(
        &self,
        token: &str,
        username: &str,
        is_admin: bool,
    ) -> Result<MessageResponse, ApiError> {
        let request = self
            .http
            .put(self.endpoint(&["users", username, "role"]))
            .query(&[("is_admin", is_admin)])
            .bearer_auth(token);
        self.send(request).await
    }

    async fn delete_user(&self, token: &str, username: &str) -> Result<MessageResponse, ApiError> {
        let request = self
            .http
            .delete(self.endpoint(&["users", username]))
            .bearer_auth(token);
        self.send(request).await
    }

    async fn reset_password(
        &self,
        token: &str,
        username: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let request = self
            .http
            .put(self.endpoint(&["users", username, "password"]))
            .json(&PasswordUpdate {
                new_password: new_password.to_string(),
            })
            .bearer_auth(token);
        self.send(request).await
    }

    async fn list_tasks(&self, token: &str) -> Result<Vec<TaskRecord>, ApiError> {
        let request = self.http.get(self.endpoint(&["tasks"])).bearer_auth(token);
        self.send(request).await
    }

    async fn create_task(&self, token: &str, task: &NewTask) -> Result<MessageResponse, ApiError> {
        // The collection route is registered with a trailing slash.
        let request = self
            .http
            .post(self.endpoint(&["tasks", ""]))
            .json(task)
            .bearer_auth(token);
        self.send(request).await
    }
}
