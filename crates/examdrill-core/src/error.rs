//! Validation error types.
//!
//! A `ValidationError` is raised exactly once, when a raw question
//! record is turned into a `Question`. After construction the model is
//! guaranteed consistent and grading never produces an error.

use thiserror::Error;

/// Structural defects detected while constructing an exam or question.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The exam name is empty.
    #[error("exam name must not be empty")]
    EmptyExamName,

    /// The `kind` field did not name a known question kind.
    #[error("unknown question kind: {0}")]
    UnknownKind(String),

    /// The question prompt is empty.
    #[error("question prompt must not be empty")]
    EmptyPrompt,

    /// A choice-based question has no choices to select from.
    #[error("question has no choices")]
    NoChoices,

    /// The same choice text appears more than once.
    #[error("duplicate choice: {0:?}")]
    DuplicateChoice(String),

    /// The answer set is empty.
    #[error("question has no accepted answers")]
    EmptyAnswer,

    /// A single-choice question listed more than one answer.
    #[error("single-choice question must have exactly one answer, got {0}")]
    AnswerCardinality(usize),

    /// An answer string does not appear among the choices.
    #[error("answer is not one of the choices: {0:?}")]
    AnswerNotAChoice(String),
}
