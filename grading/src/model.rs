//! Wire-level DTOs for submissions and student progress reports.
//!
//! DESIGN
//! ======
//! These types mirror the server's camelCase JSON so serde round-trips stay
//! lossless. Every fetched value is immutable; refetches replace it wholesale.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-side status filter applied to the submissions listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Evaluated,
    Pending,
}

impl StatusFilter {
    /// Query-string value sent to the server; empty means no filter.
    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Evaluated => "EVALUATED",
            Self::Pending => "PENDING",
        }
    }

    /// Parse a `<select>` value back into a filter. Unknown values map to `All`.
    #[must_use]
    pub fn from_query(raw: &str) -> Self {
        match raw {
            "EVALUATED" => Self::Evaluated,
            "PENDING" => Self::Pending,
            _ => Self::All,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All submissions",
            Self::Evaluated => "Evaluated",
            Self::Pending => "Pending",
        }
    }

    pub const ALL: [Self; 3] = [Self::All, Self::Evaluated, Self::Pending];
}

/// Automatically computed (or professor-overridden) compliance score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceScore {
    /// Overall score in `[0, 100]`.
    pub overall_score: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// The student who uploaded a document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Uploader {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Uploader {
    /// "First Last" built from whichever name parts are present.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Name shown in tables: full name, then username, then email.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = self.full_name();
        if !full.is_empty() {
            return full;
        }
        [self.username.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or("Unknown")
            .to_owned()
    }
}

/// A single uploaded document as listed in the submission tracker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub file_name: String,
    #[serde(default, alias = "user")]
    pub uploader: Uploader,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub evaluated: bool,
    #[serde(default)]
    pub compliance_score: Option<ComplianceScore>,
}

impl Submission {
    #[must_use]
    pub fn overall_score(&self) -> Option<f64> {
        self.compliance_score.as_ref().map(|s| s.overall_score)
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        self.compliance_score
            .as_ref()
            .and_then(|s| s.notes.as_deref())
            .unwrap_or_default()
    }
}

/// Recently uploaded document shown in a progress report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentDocument {
    pub file_name: String,
    #[serde(default)]
    pub evaluated: bool,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Outstanding task assigned to the student.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTask {
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Per-student progress summary returned by the progress endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_documents: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub evaluated_documents: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_tasks: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub completed_tasks: u32,
    #[serde(default)]
    pub average_score: Option<f64>,
    #[serde(default)]
    pub recent_documents: Vec<RecentDocument>,
    #[serde(default)]
    pub pending_tasks: Vec<PendingTask>,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => integer_from_number(&number).ok_or_else(|| D::Error::custom("expected integer-compatible number")),
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Counts tolerate `null` and float encodings such as `3.0`.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            let int = integer_from_number(&number).ok_or_else(|| D::Error::custom("expected integer-compatible number"))?;
            u32::try_from(int).map_err(|_| D::Error::custom(format!("count {int} out of range")))
        }
        _ => Err(D::Error::custom("expected count")),
    }
}

/// Ids may arrive as JSON numbers or strings.
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn integer_from_number(number: &serde_json::Number) -> Option<i64> {
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Some(float as i64);
    }
    None
}
