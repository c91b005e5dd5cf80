//! Contract of the remote grading API consumed by the widgets.
//!
//! The browser client implements this over HTTP; tests implement it with
//! in-memory fakes.

use crate::error::ApiError;
use crate::model::{ProgressReport, StatusFilter, Submission};

pub const SUBMISSIONS_FALLBACK: &str = "Failed to load submissions";
pub const PROGRESS_FALLBACK: &str = "Failed to load student progress";
pub const OVERRIDE_FALLBACK: &str = "Failed to override score";

/// Remote operations used by the dashboard widgets.
///
/// Futures are not required to be `Send`; widgets run on a single-threaded
/// browser executor.
#[allow(async_fn_in_trait)]
pub trait GradingApi {
    /// List submissions, filtered server-side by evaluation status.
    async fn get_all_submissions(&self, filter: StatusFilter) -> Result<Vec<Submission>, ApiError>;

    /// Fetch the progress report for one student.
    async fn get_student_progress(&self, user_id: &str) -> Result<ProgressReport, ApiError>;

    /// Replace a document's compliance score. `score` is already validated.
    async fn override_score(&self, document_id: i64, score: u8, notes: &str) -> Result<(), ApiError>;
}
