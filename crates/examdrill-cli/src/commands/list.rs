//! The `examdrill list` command.

use std::path::PathBuf;

use anyhow::Result;

use examdrill_core::model::QuestionKind;
use examdrill_core::parser;

pub fn execute(exams_path: PathBuf) -> Result<()> {
    let exams = if exams_path.is_dir() {
        parser::load_exam_directory(&exams_path)?
    } else {
        vec![parser::parse_exam(&exams_path)?]
    };

    if exams.is_empty() {
        println!("No exams found. Run `examdrill init` to create a starter exam.");
        return Ok(());
    }

    for exam in &exams {
        let count = |kind: QuestionKind| {
            exam.questions()
                .iter()
                .filter(|q| q.kind() == kind)
                .count()
        };
        println!(
            "{} — {} questions ({} single-choice, {} multi-choice, {} free-entry)",
            exam.name(),
            exam.questions().len(),
            count(QuestionKind::SingleChoice),
            count(QuestionKind::MultiChoice),
            count(QuestionKind::FreeEntry),
        );
    }

    Ok(())
}
