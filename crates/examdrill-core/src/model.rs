//! Core exam data model.
//!
//! An `Exam` is a named, ordered collection of `Question`s. All
//! structural invariants are enforced here, at construction time; the
//! grader in [`crate::grader`] assumes a constructed model is valid.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ValidationError;

/// The three supported question kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    SingleChoice,
    MultiChoice,
    FreeEntry,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::SingleChoice => write!(f, "single-choice"),
            QuestionKind::MultiChoice => write!(f, "multi-choice"),
            QuestionKind::FreeEntry => write!(f, "free-entry"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single-choice" | "single_choice" | "single" => Ok(QuestionKind::SingleChoice),
            "multi-choice" | "multi_choice" | "multi" => Ok(QuestionKind::MultiChoice),
            "free-entry" | "free_entry" | "free" => Ok(QuestionKind::FreeEntry),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// Raw question record as it appears in an exam file.
///
/// `answer` is always a list, even for single-answer questions. The
/// `choices` field doubles as the hint list for free-entry questions.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    pub kind: String,
    pub prompt: String,
    #[serde(default)]
    pub choices: Vec<String>,
    pub answer: Vec<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub refs: Vec<String>,
}

/// Raw exam record as it appears in an exam file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawExam {
    pub name: String,
    #[serde(default)]
    pub questions: Vec<RawQuestion>,
}

/// Kind-specific payload of a question.
///
/// The source format stores hints in the `choices` field; the model
/// keeps them logically distinct so grading code never has to ask
/// which meaning applies.
#[derive(Debug, Clone)]
pub(crate) enum QuestionBody {
    SingleChoice {
        choices: Vec<String>,
        answer: String,
    },
    MultiChoice {
        choices: Vec<String>,
        answer: HashSet<String>,
    },
    FreeEntry {
        hints: Vec<String>,
        accepted: HashSet<String>,
    },
}

/// One gradable item, validated and immutable.
#[derive(Debug, Clone)]
pub struct Question {
    prompt: String,
    body: QuestionBody,
    explanation: Option<String>,
    refs: Vec<String>,
}

impl Question {
    /// Validate a raw record into a `Question`.
    ///
    /// This is the only place structural invariants are checked; every
    /// later operation may assume they hold.
    pub fn new(raw: RawQuestion) -> Result<Self, ValidationError> {
        let kind: QuestionKind = raw
            .kind
            .parse()
            .map_err(|_| ValidationError::UnknownKind(raw.kind.clone()))?;

        if raw.prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }
        if raw.answer.is_empty() {
            return Err(ValidationError::EmptyAnswer);
        }

        let body = match kind {
            QuestionKind::SingleChoice | QuestionKind::MultiChoice => {
                if raw.choices.is_empty() {
                    return Err(ValidationError::NoChoices);
                }
                let mut seen = HashSet::new();
                for choice in &raw.choices {
                    if !seen.insert(choice.as_str()) {
                        return Err(ValidationError::DuplicateChoice(choice.clone()));
                    }
                }
                for answer in &raw.answer {
                    if !seen.contains(answer.as_str()) {
                        return Err(ValidationError::AnswerNotAChoice(answer.clone()));
                    }
                }
                if kind == QuestionKind::SingleChoice {
                    if raw.answer.len() != 1 {
                        return Err(ValidationError::AnswerCardinality(raw.answer.len()));
                    }
                    QuestionBody::SingleChoice {
                        choices: raw.choices,
                        answer: raw.answer.into_iter().next().unwrap_or_default(),
                    }
                } else {
                    QuestionBody::MultiChoice {
                        choices: raw.choices,
                        answer: raw.answer.into_iter().collect(),
                    }
                }
            }
            QuestionKind::FreeEntry => {
                // A lone empty string means "no hints", same as an
                // empty list.
                let hints = if raw.choices.len() == 1 && raw.choices[0].is_empty() {
                    Vec::new()
                } else {
                    raw.choices
                };
                QuestionBody::FreeEntry {
                    hints,
                    accepted: raw.answer.into_iter().collect(),
                }
            }
        };

        let explanation = if raw.explanation.is_empty() {
            None
        } else {
            Some(raw.explanation)
        };

        Ok(Question {
            prompt: raw.prompt,
            body,
            explanation,
            refs: raw.refs,
        })
    }

    pub fn kind(&self) -> QuestionKind {
        match self.body {
            QuestionBody::SingleChoice { .. } => QuestionKind::SingleChoice,
            QuestionBody::MultiChoice { .. } => QuestionKind::MultiChoice,
            QuestionBody::FreeEntry { .. } => QuestionKind::FreeEntry,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Selectable options, in file order. Empty for free-entry
    /// questions.
    pub fn choices(&self) -> &[String] {
        match &self.body {
            QuestionBody::SingleChoice { choices, .. }
            | QuestionBody::MultiChoice { choices, .. } => choices,
            QuestionBody::FreeEntry { .. } => &[],
        }
    }

    /// Hint strings, in disclosure order. Empty for choice-based
    /// questions.
    pub fn hints(&self) -> &[String] {
        match &self.body {
            QuestionBody::FreeEntry { hints, .. } => hints,
            _ => &[],
        }
    }

    pub fn hint_count(&self) -> usize {
        self.hints().len()
    }

    /// Accepted answer strings for free-entry questions, in no
    /// particular order. Empty for choice-based kinds.
    pub fn accepted_answers(&self) -> impl Iterator<Item = &str> {
        match &self.body {
            QuestionBody::FreeEntry { accepted, .. } => Some(accepted.iter().map(String::as_str)),
            _ => None,
        }
        .into_iter()
        .flatten()
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub fn refs(&self) -> &[String] {
        &self.refs
    }

    pub(crate) fn body(&self) -> &QuestionBody {
        &self.body
    }
}

/// A named, ordered collection of questions.
///
/// Immutable after construction; an exam with zero questions is valid
/// but useless, and is surfaced as a lint warning rather than an error.
#[derive(Debug, Clone)]
pub struct Exam {
    name: String,
    questions: Vec<Question>,
}

impl Exam {
    /// Validate raw records into an `Exam`.
    pub fn new(name: String, raws: Vec<RawQuestion>) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyExamName);
        }
        let questions = raws
            .into_iter()
            .map(Question::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Exam { name, questions })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
