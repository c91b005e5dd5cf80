//! Networking modules for the grading REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements `grading::GradingApi` over HTTP and `types` defines the
//! client-only wire schema (the authenticated user).

pub mod api;
pub mod types;
