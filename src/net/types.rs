//! Client-side wire DTOs not shared with `grading`.
//!
//! DESIGN
//! ======
//! Submission and progress payloads live in `grading::model`; they are
//! re-exported here so pages and components import one `types` module.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub use grading::model::{ComplianceScore, PendingTask, ProgressReport, RecentDocument, StatusFilter, Submission, Uploader};

/// Dashboard role of the authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[serde(alias = "professor")]
    Professor,
    #[serde(alias = "student")]
    Student,
    #[serde(other)]
    Unknown,
}

/// The authenticated user as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

impl User {
    /// Name shown in the dashboard header.
    #[must_use]
    pub fn display_name(&self) -> String {
        Uploader {
            id: None,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
        .display_name()
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
