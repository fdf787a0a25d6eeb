//! The grading engine.
//!
//! Pure functions over a validated [`Question`] and a candidate
//! response. Grading never fails: arbitrary typed input is expected
//! and normal, so every response yields a [`Verdict`]. Hint disclosure
//! state lives with the caller; [`next_hint`] is a pure function of
//! the "hints shown so far" counter.

use std::collections::HashSet;

use crate::model::{Question, QuestionBody};

/// A candidate response, shaped per question kind.
///
/// Letter-to-text resolution happens in the session driver; the grader
/// only ever sees full choice text.
#[derive(Debug, Clone)]
pub enum Response {
    /// One selected choice (single-choice).
    Choice(String),
    /// A set of selected choices, duplicates collapsed (multi-choice).
    Selection(HashSet<String>),
    /// A raw typed line (free-entry).
    Text(String),
}

/// The result of grading one response.
///
/// Borrows the question's explanation and refs so the driver can show
/// them without cloning.
#[derive(Debug)]
pub struct Verdict<'a> {
    pub correct: bool,
    pub explanation: Option<&'a str>,
    pub refs: &'a [String],
}

/// Decide whether `response` satisfies `question`'s answer
/// specification.
///
/// Matching is byte-for-byte and case-sensitive for every kind. A
/// response whose shape does not match the question's kind grades
/// incorrect rather than erroring.
pub fn grade<'a>(question: &'a Question, response: &Response) -> Verdict<'a> {
    let correct = match (question.body(), response) {
        (QuestionBody::SingleChoice { answer, .. }, Response::Choice(picked)) => picked == answer,
        (QuestionBody::MultiChoice { answer, .. }, Response::Selection(picked)) => {
            // HashSet equality: same size, same members. Order never
            // matters; an empty selection is always incorrect.
            !picked.is_empty() && picked == answer
        }
        (QuestionBody::FreeEntry { accepted, .. }, Response::Text(text)) => {
            let trimmed = text.trim();
            // Whitespace-only input never matches, not even an
            // accepted empty-string answer.
            !trimmed.is_empty() && accepted.contains(trimmed)
        }
        _ => false,
    };

    Verdict {
        correct,
        explanation: question.explanation(),
        refs: question.refs(),
    }
}

/// The next hint for a free-entry question, or `Exhausted` when none
/// remain. Running out of hints is a normal end condition, not an
/// error.
#[derive(Debug, PartialEq, Eq)]
pub enum HintDisclosure<'a> {
    Hint { text: &'a str, remaining: usize },
    Exhausted,
}

/// Disclose the hint at position `hints_shown`, in stored order.
///
/// The caller owns the counter; replaying the same value yields the
/// same hint. Questions without hints (including choice-based kinds)
/// are exhausted immediately.
pub fn next_hint(question: &Question, hints_shown: usize) -> HintDisclosure<'_> {
    let hints = question.hints();
    match hints.get(hints_shown) {
        Some(text) => HintDisclosure::Hint {
            text,
            remaining: hints.len() - hints_shown - 1,
        },
        None => HintDisclosure::Exhausted,
    }
}
