//! Score validation, color bands, and submission status badges.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

use std::num::IntErrorKind;

use crate::error::ValidationError;
use crate::model::Submission;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

/// Lower bound (inclusive) of the "good" / compliant band.
pub const GOOD_THRESHOLD: f64 = 80.0;
/// Lower bound (inclusive) of the "warning" / needs-work band.
pub const WARNING_THRESHOLD: f64 = 50.0;

/// Parse and range-check a score typed into the override form.
///
/// # Errors
///
/// Returns [`ValidationError::NotANumber`] for non-integer input and
/// [`ValidationError::OutOfRange`] outside `[0, 100]`, including integers
/// too large to parse.
pub fn validate_score(raw: &str) -> Result<u8, ValidationError> {
    let value = match raw.trim().parse::<i64>() {
        Ok(v) => v,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => ValidationError::OutOfRange(i64::MAX),
                IntErrorKind::NegOverflow => ValidationError::OutOfRange(i64::MIN),
                _ => ValidationError::NotANumber,
            });
        }
    };
    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(ValidationError::OutOfRange(value));
    }
    u8::try_from(value).map_err(|_| ValidationError::OutOfRange(value))
}

/// Round a wire score to the integer shown in badges and inputs.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_score(score: f64) -> i64 {
    score.round() as i64
}

/// Color band used purely for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Warning,
    Critical,
}

impl ScoreBand {
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    /// CSS modifier suffix, e.g. `score--good`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Good => "score--good",
            Self::Warning => "score--warning",
            Self::Critical => "score--critical",
        }
    }
}

/// Status shown for one row of the submission tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBadge {
    Pending,
    Compliant(i64),
    NeedsWork(i64),
    NonCompliant(i64),
}

impl StatusBadge {
    /// Pure classification of `(evaluated, overall_score)`.
    ///
    /// An evaluated submission without a score object is treated as 0.
    #[must_use]
    pub fn classify(evaluated: bool, overall_score: Option<f64>) -> Self {
        if !evaluated {
            return Self::Pending;
        }
        let score = overall_score.unwrap_or(0.0);
        let rounded = round_score(score);
        match ScoreBand::of(score) {
            ScoreBand::Good => Self::Compliant(rounded),
            ScoreBand::Warning => Self::NeedsWork(rounded),
            ScoreBand::Critical => Self::NonCompliant(rounded),
        }
    }

    #[must_use]
    pub fn for_submission(submission: &Submission) -> Self {
        Self::classify(submission.evaluated, submission.overall_score())
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Pending => "Pending".to_owned(),
            Self::Compliant(s) => format!("Compliant ({s}%)"),
            Self::NeedsWork(s) => format!("Needs Work ({s}%)"),
            Self::NonCompliant(s) => format!("Non-Compliant ({s}%)"),
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge--pending",
            Self::Compliant(_) => "badge badge--compliant",
            Self::NeedsWork(_) => "badge badge--needs-work",
            Self::NonCompliant(_) => "badge badge--non-compliant",
        }
    }
}
