//! Student progress view-model and report-derived display values.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::api::PROGRESS_FALLBACK;
use crate::error::ApiError;
use crate::lifecycle::{AsyncView, RequestToken};
use crate::model::ProgressReport;

impl ProgressReport {
    /// `false` when the student has neither documents nor tasks.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        self.total_documents > 0 || self.total_tasks > 0
    }

    /// Average score to one decimal place, e.g. `"72.5%"`.
    #[must_use]
    pub fn average_label(&self) -> String {
        format!("{:.1}%", self.average_score.unwrap_or(0.0))
    }

    /// Completed/total tasks, e.g. `"3/5"`.
    #[must_use]
    pub fn tasks_label(&self) -> String {
        format!("{}/{}", self.completed_tasks, self.total_tasks)
    }

    /// `round(completed / total * 100)`, or `None` when there are no tasks.
    #[must_use]
    pub fn task_completion_percent(&self) -> Option<u32> {
        if self.total_tasks == 0 {
            return None;
        }
        let pct = f64::from(self.completed_tasks) / f64::from(self.total_tasks) * 100.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = pct.round() as u32;
        Some(rounded)
    }
}

/// State owned by one student progress widget instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentProgress {
    pub view: AsyncView<ProgressReport>,
    user_id: Option<String>,
    fallback_name: Option<String>,
}

impl StudentProgress {
    #[must_use]
    pub fn new(user_id: Option<String>, fallback_name: Option<String>) -> Self {
        Self {
            view: AsyncView::new(),
            user_id: user_id.filter(|id| !id.trim().is_empty()),
            fallback_name,
        }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Switch to another student. Returns `true` when a fetch is due.
    ///
    /// Clearing the id drops back to idle and invalidates in-flight requests.
    pub fn set_user_id(&mut self, user_id: Option<String>) -> bool {
        let user_id = user_id.filter(|id| !id.trim().is_empty());
        if user_id == self.user_id {
            return false;
        }
        self.user_id = user_id;
        if self.user_id.is_none() {
            self.view.reset();
            return false;
        }
        true
    }

    pub fn set_fallback_name(&mut self, name: Option<String>) {
        self.fallback_name = name;
    }

    /// Start a fetch, or `None` (staying idle) when no student is selected.
    pub fn begin_fetch(&mut self) -> Option<(RequestToken, String)> {
        let user_id = self.user_id.clone()?;
        Some((self.view.begin(), user_id))
    }

    pub fn settle(&mut self, token: RequestToken, result: Result<ProgressReport, ApiError>) -> bool {
        let result = result.map_err(|e| {
            log::warn!("progress fetch failed: {e}");
            e.message_or(PROGRESS_FALLBACK)
        });
        self.view.settle(token, result)
    }

    /// Header name: the server's name wins over the caller's fallback.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.view
            .data()
            .and_then(|r| r.student_name.as_deref())
            .filter(|n| !n.trim().is_empty())
            .or(self.fallback_name.as_deref())
            .unwrap_or("Student")
            .to_owned()
    }
}
