//! Submission tracker view-model: status filter, search, and statistics.
//!
//! DESIGN
//! ======
//! The status filter is applied server-side and drives refetches. The search
//! query is applied locally and never does. Statistics are recomputed from
//! the loaded list on demand rather than stored next to it.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use crate::api::SUBMISSIONS_FALLBACK;
use crate::error::ApiError;
use crate::lifecycle::{AsyncView, RequestToken};
use crate::model::{StatusFilter, Submission};

/// Aggregate counts shown above the submissions table.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SubmissionStats {
    pub total: usize,
    pub evaluated: usize,
    pub pending: usize,
    /// Mean `overall_score` over evaluated submissions; 0 when none.
    pub average_score: f64,
}

impl SubmissionStats {
    #[must_use]
    pub fn compute(submissions: &[Submission]) -> Self {
        let total = submissions.len();
        let scores = submissions
            .iter()
            .filter(|s| s.evaluated)
            .map(|s| s.overall_score().unwrap_or(0.0))
            .collect::<Vec<_>>();
        let evaluated = scores.len();
        #[allow(clippy::cast_precision_loss)]
        let average_score = if evaluated == 0 {
            0.0
        } else {
            scores.iter().sum::<f64>() / evaluated as f64
        };
        Self {
            total,
            evaluated,
            pending: total - evaluated,
            average_score,
        }
    }

    /// Average formatted to one decimal place, e.g. `"85.5%"`.
    #[must_use]
    pub fn average_label(&self) -> String {
        format!("{:.1}%", self.average_score)
    }
}

/// Case-insensitive substring match over file name, uploader full name, and
/// uploader email. An empty (or whitespace-only) query matches everything.
#[must_use]
pub fn matches_query(submission: &Submission, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let full_name = submission.uploader.full_name();
    let email = submission.uploader.email.as_deref().unwrap_or_default();
    [submission.file_name.as_str(), full_name.as_str(), email]
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}

/// State owned by one submission tracker instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionTracker {
    pub view: AsyncView<Vec<Submission>>,
    status_filter: StatusFilter,
    search_query: String,
}

impl SubmissionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Returns `true` when the filter changed and a refetch is due.
    pub fn set_status_filter(&mut self, filter: StatusFilter) -> bool {
        if self.status_filter == filter {
            return false;
        }
        self.status_filter = filter;
        true
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Start a fetch for the current filter.
    pub fn begin_fetch(&mut self) -> (RequestToken, StatusFilter) {
        (self.view.begin(), self.status_filter)
    }

    pub fn settle(&mut self, token: RequestToken, result: Result<Vec<Submission>, ApiError>) -> bool {
        let result = result.map_err(|e| {
            log::warn!("submissions fetch failed: {e}");
            e.message_or(SUBMISSIONS_FALLBACK)
        });
        self.view.settle(token, result)
    }

    /// Loaded submissions that match the search query, in server order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Submission> {
        self.view
            .data()
            .map(|list| list.iter().filter(|s| matches_query(s, &self.search_query)).collect())
            .unwrap_or_default()
    }

    /// Statistics over the loaded list, ignoring the search query.
    #[must_use]
    pub fn stats(&self) -> SubmissionStats {
        self.view
            .data()
            .map(|list| SubmissionStats::compute(list))
            .unwrap_or_default()
    }
}
