//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only cross-widget state lives here (`auth`, `dashboard`). Each widget's
//! fetch lifecycle is owned by the widget itself through `grading`
//! view-models.

pub mod auth;
pub mod dashboard;
