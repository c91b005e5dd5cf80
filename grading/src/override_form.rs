//! Score override form: draft editing, validation, and submit lifecycle.
//!
//! DESIGN
//! ======
//! Validation runs before any request is built, so an out-of-range score can
//! never reach the network. On failure the draft is left untouched for
//! another attempt; on success the caller is told to notify success first
//! and close second.

#[cfg(test)]
#[path = "override_form_test.rs"]
mod override_form_test;

use crate::api::OVERRIDE_FALLBACK;
use crate::error::ApiError;
use crate::model::Submission;
use crate::score::{ScoreBand, round_score, validate_score};

/// Validated arguments for [`crate::GradingApi::override_score`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverrideRequest {
    pub document_id: i64,
    pub score: u8,
    pub notes: String,
}

/// Result of a settled override submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverrideOutcome {
    Saved,
    Failed,
}

impl OverrideOutcome {
    /// Fire container callbacks in order: success, then close. A failed
    /// submission fires neither.
    pub fn dispatch(self, on_success: impl FnOnce(), on_close: impl FnOnce()) {
        if self == Self::Saved {
            on_success();
            on_close();
        }
    }
}

/// Widget-local state of the override dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreOverride {
    document_id: i64,
    file_name: String,
    /// Raw text of the score input.
    pub score_input: String,
    pub notes: String,
    submitting: bool,
    error: Option<String>,
}

impl ScoreOverride {
    /// Start a draft from the document's current score (default 0) and notes.
    #[must_use]
    pub fn from_submission(document: &Submission) -> Self {
        let current = document.overall_score().map_or(0, round_score);
        Self {
            document_id: document.id,
            file_name: document.file_name.clone(),
            score_input: current.to_string(),
            notes: document.notes().to_owned(),
            submitting: false,
            error: None,
        }
    }

    #[must_use]
    pub fn document_id(&self) -> i64 {
        self.document_id
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Dismissal is blocked while a save is in flight.
    #[must_use]
    pub fn can_close(&self) -> bool {
        !self.submitting
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Color band of the score currently typed, if it is a valid score.
    #[must_use]
    pub fn band(&self) -> Option<ScoreBand> {
        match validate_score(&self.score_input) {
            Ok(score) => Some(ScoreBand::of(f64::from(score))),
            Err(_) => None,
        }
    }

    /// Validate the draft and enter the submitting phase.
    ///
    /// Returns `None` when validation fails (an inline error is set) or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<OverrideRequest> {
        if self.submitting {
            return None;
        }
        match validate_score(&self.score_input) {
            Ok(score) => {
                self.error = None;
                self.submitting = true;
                Some(OverrideRequest {
                    document_id: self.document_id,
                    score,
                    notes: self.notes.clone(),
                })
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn settle(&mut self, result: Result<(), ApiError>) -> OverrideOutcome {
        self.submitting = false;
        match result {
            Ok(()) => OverrideOutcome::Saved,
            Err(e) => {
                log::warn!("score override failed for document {}: {e}", self.document_id);
                self.error = Some(e.message_or(OVERRIDE_FALLBACK));
                OverrideOutcome::Failed
            }
        }
    }
}
