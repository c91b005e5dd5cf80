//! REST API client for the grading backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable`, since
//! widgets only fetch from effects and event handlers in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` carrying the body's
//! `message` field when present, so widgets can show the server's wording.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use grading::{ApiError, GradingApi, ProgressReport, StatusFilter, Submission};

use super::types::User;
use crate::config::ClientConfig;

#[cfg(any(test, feature = "hydrate"))]
fn current_user_endpoint(base: &str) -> String {
    format!("{base}/auth/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn submissions_endpoint(base: &str, filter: StatusFilter) -> String {
    match filter.as_query() {
        "" => format!("{base}/submissions"),
        status => format!("{base}/submissions?status={status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn progress_endpoint(base: &str, user_id: &str) -> String {
    format!("{base}/students/{user_id}/progress")
}

#[cfg(any(test, feature = "hydrate"))]
fn override_endpoint(base: &str, document_id: i64) -> String {
    format!("{base}/documents/{document_id}/score")
}

#[cfg(any(test, feature = "hydrate"))]
fn override_payload(score: u8, notes: &str) -> serde_json::Value {
    serde_json::json!({ "score": score, "notes": notes })
}

/// HTTP implementation of [`GradingApi`], provided to widgets via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpGradingApi {
    base: String,
}

impl HttpGradingApi {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base: config.api_base.clone(),
        }
    }

    /// Fetch the currently authenticated user.
    /// Returns `None` if not authenticated or on the server.
    pub async fn fetch_current_user(&self) -> Option<User> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&current_user_endpoint(&self.base))
                .send()
                .await
                .ok()?;
            if !resp.ok() {
                return None;
            }
            resp.json::<User>().await.ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.unavailable("current user");
            None
        }
    }

    #[cfg(not(feature = "hydrate"))]
    fn unavailable(&self, what: &str) -> ApiError {
        log::debug!("{what} request to {} skipped outside the browser", self.base);
        ApiError::Unavailable
    }
}

impl GradingApi for HttpGradingApi {
    async fn get_all_submissions(&self, filter: StatusFilter) -> Result<Vec<Submission>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&submissions_endpoint(&self.base, filter))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = filter;
            Err(self.unavailable("submissions"))
        }
    }

    async fn get_student_progress(&self, user_id: &str) -> Result<ProgressReport, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&progress_endpoint(&self.base, user_id))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(self.unavailable("progress"))
        }
    }

    async fn override_score(&self, document_id: i64, score: u8, notes: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&override_endpoint(&self.base, document_id))
                .json(&override_payload(score, notes))
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (document_id, score, notes);
            Err(self.unavailable("score override"))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::from_status(status, &body)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
