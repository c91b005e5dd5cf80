//! Professor dashboard composition state.
//!
//! DESIGN
//! ======
//! The tracker forwards row actions up as whole submissions; this state
//! records which report or override dialog is open and a refresh counter the
//! tracker watches to refetch after a successful override.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::Submission;

/// Student whose progress report is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportTarget {
    pub user_id: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub report_target: Option<ReportTarget>,
    pub override_target: Option<Submission>,
    /// Bumped to force the submission tracker to refetch.
    pub refresh_seq: u64,
}

impl DashboardState {
    pub fn open_report(&mut self, submission: &Submission) {
        self.report_target = Some(ReportTarget {
            user_id: submission.uploader.id.clone(),
            name: submission.uploader.display_name(),
        });
    }

    pub fn close_report(&mut self) {
        self.report_target = None;
    }

    pub fn open_override(&mut self, submission: Submission) {
        self.override_target = Some(submission);
    }

    pub fn close_override(&mut self) {
        self.override_target = None;
    }

    /// Called after an override is saved.
    pub fn request_refresh(&mut self) {
        self.refresh_seq = self.refresh_seq.wrapping_add(1);
    }
}
