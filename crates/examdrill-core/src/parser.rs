//! JSON exam file parser.
//!
//! Loads exams from JSON files and directories, and lints them for
//! non-fatal issues. Structural invariants are enforced by the model;
//! this module only adds file context to failures.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Exam, QuestionKind, RawExam};

/// Parse a single JSON file into an `Exam`.
pub fn parse_exam(path: &Path) -> Result<Exam> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read exam file: {}", path.display()))?;

    parse_exam_str(&content, path)
}

/// Parse a JSON string into an `Exam` (useful for testing).
pub fn parse_exam_str(content: &str, source_path: &Path) -> Result<Exam> {
    let raw: RawExam = serde_json::from_str(content)
        .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?;

    Exam::new(raw.name, raw.questions)
        .with_context(|| format!("invalid exam: {}", source_path.display()))
}

/// Recursively load all `.json` exam files from a directory.
///
/// Malformed files are skipped with a warning so one bad exam does not
/// block a study session over the rest.
pub fn load_exam_directory(dir: &Path) -> Result<Vec<Exam>> {
    let mut exams = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            exams.extend(load_exam_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            match parse_exam(&path) {
                Ok(exam) => exams.push(exam),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(exams)
}

/// A non-fatal finding from exam linting.
#[derive(Debug, Clone)]
pub struct LintWarning {
    /// Zero-based question index (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Lint an exam for issues that are legal but probably unintended.
pub fn lint_exam(exam: &Exam) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    if exam.questions().is_empty() {
        warnings.push(LintWarning {
            question: None,
            message: "exam has no questions".into(),
        });
    }

    for (idx, q) in exam.questions().iter().enumerate() {
        if q.explanation().is_none() && q.refs().is_empty() {
            warnings.push(LintWarning {
                question: Some(idx),
                message: "no explanation or refs to show after an incorrect answer".into(),
            });
        }

        // Responses are trimmed before matching, so an accepted answer
        // with surrounding whitespace can never be matched.
        if q.kind() == QuestionKind::FreeEntry {
            for a in q.accepted_answers() {
                if a != a.trim() {
                    warnings.push(LintWarning {
                        question: Some(idx),
                        message: format!("accepted answer {a:?} has surrounding whitespace and is unmatchable"),
                    });
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_JSON: &str = r#"{
  "name": "Unix Basics",
  "questions": [
    {
      "kind": "single-choice",
      "prompt": "Which command lists directory contents?",
      "choices": ["ls", "cd", "pwd", "rm"],
      "answer": ["ls"],
      "explanation": "ls lists the contents of a directory.",
      "refs": ["man ls"]
    },
    {
      "kind": "free-entry",
      "prompt": "Case-insensitively search user_info.txt for 'john'.",
      "choices": ["The flag for case-insensitive matching is -i."],
      "answer": [
        "grep -i john user_info.txt",
        "grep john user_info.txt -i",
        "grep john -i user_info.txt"
      ],
      "refs": ["man grep"]
    }
  ]
}"#;

    #[test]
    fn parse_valid_json() {
        let exam = parse_exam_str(VALID_JSON, &PathBuf::from("test.json")).unwrap();
        assert_eq!(exam.name(), "Unix Basics");
        assert_eq!(exam.questions().len(), 2);
        assert_eq!(exam.questions()[0].choices(), ["ls", "cd", "pwd", "rm"]);
        assert_eq!(exam.questions()[1].hint_count(), 1);
    }

    #[test]
    fn parse_missing_optional_fields() {
        let json = r#"{
  "name": "Minimal",
  "questions": [
    {
      "kind": "free-entry",
      "prompt": "Print the working directory.",
      "answer": ["pwd"]
    }
  ]
}"#;
        let exam = parse_exam_str(json, &PathBuf::from("test.json")).unwrap();
        let q = &exam.questions()[0];
        assert!(q.explanation().is_none());
        assert!(q.refs().is_empty());
        assert_eq!(q.hint_count(), 0);
    }

    #[test]
    fn parse_malformed_json() {
        let result = parse_exam_str("this is not { json", &PathBuf::from("bad.json"));
        assert!(result.is_err());
    }

    #[test]
    fn parse_invalid_exam_names_file() {
        let json = r#"{
  "name": "Broken",
  "questions": [
    {
      "kind": "single-choice",
      "prompt": "Pick one.",
      "choices": ["Rome", "Paris"],
      "answer": ["Rome", "Paris"]
    }
  ]
}"#;
        let err = parse_exam_str(json, &PathBuf::from("broken.json")).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("broken.json"), "context missing: {msg}");
        assert!(msg.contains("exactly one answer"), "cause missing: {msg}");
    }

    #[test]
    fn lint_empty_exam() {
        let exam = parse_exam_str(
            r#"{"name": "Empty", "questions": []}"#,
            &PathBuf::from("empty.json"),
        )
        .unwrap();
        let warnings = lint_exam(&exam);
        assert!(warnings.iter().any(|w| w.message.contains("no questions")));
    }

    #[test]
    fn lint_unmatchable_accepted_answer() {
        let json = r#"{
  "name": "Whitespace",
  "questions": [
    {
      "kind": "free-entry",
      "prompt": "Print the working directory.",
      "answer": ["pwd "],
      "explanation": "pwd prints the working directory."
    }
  ]
}"#;
        let exam = parse_exam_str(json, &PathBuf::from("ws.json")).unwrap();
        let warnings = lint_exam(&exam);
        assert!(warnings.iter().any(|w| w.message.contains("unmatchable")));
        assert_eq!(warnings[0].question, Some(0));
    }

    #[test]
    fn lint_missing_review_material() {
        let json = r#"{
  "name": "Bare",
  "questions": [
    {
      "kind": "single-choice",
      "prompt": "Pick one.",
      "choices": ["a", "b"],
      "answer": ["a"]
    }
  ]
}"#;
        let exam = parse_exam_str(json, &PathBuf::from("bare.json")).unwrap();
        let warnings = lint_exam(&exam);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("no explanation or refs")));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("unix.json"), VALID_JSON).unwrap();
        // A malformed file is skipped, not fatal.
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();
        // Non-JSON files are ignored.
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let exams = load_exam_directory(dir.path()).unwrap();
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].name(), "Unix Basics");
    }

    #[test]
    fn load_directory_recurses() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("archive");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("unix.json"), VALID_JSON).unwrap();

        let exams = load_exam_directory(dir.path()).unwrap();
        assert_eq!(exams.len(), 1);
    }

    #[test]
    fn load_not_a_directory() {
        let result = load_exam_directory(&PathBuf::from("no_such_dir_here"));
        assert!(result.is_err());
    }
}
