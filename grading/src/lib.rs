//! Data model and view logic for the docgrade compliance dashboard.
//!
//! This crate is UI-framework agnostic so the Leptos client can render its
//! view-models directly while tests drive them without a browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `model` mirrors the server's JSON payloads, `lifecycle` owns the
//! loading/error/ready state machine shared by every widget, and the
//! `tracker`, `progress`, and `override_form` modules hold one view-model
//! per dashboard widget.

pub mod api;
pub mod dates;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod override_form;
pub mod progress;
pub mod score;
pub mod tracker;

pub use api::GradingApi;
pub use error::{ApiError, ValidationError};
pub use lifecycle::{AsyncView, RequestToken, ViewState};
pub use model::{ComplianceScore, PendingTask, ProgressReport, RecentDocument, StatusFilter, Submission, Uploader};
pub use override_form::{OverrideOutcome, OverrideRequest, ScoreOverride};
pub use progress::StudentProgress;
pub use score::{ScoreBand, StatusBadge};
pub use tracker::{SubmissionStats, SubmissionTracker};
