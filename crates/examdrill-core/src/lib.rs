//! examdrill-core — Exam data model, validation, and grading.
//!
//! This crate defines the immutable exam/question model, the load-time
//! invariant checks, and the pure grading functions that the examdrill
//! CLI builds on.

pub mod error;
pub mod grader;
pub mod model;
pub mod parser;
