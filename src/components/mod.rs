//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each dashboard widget owns its fetch/submit lifecycle through a `grading`
//! view-model held in an `RwSignal`, and reports completion to its container
//! through `Callback` props.

pub mod score_override_modal;
pub mod stat_tile;
pub mod student_progress;
pub mod submission_tracker;
