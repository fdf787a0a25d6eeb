//! The `examdrill validate` command.

use std::path::PathBuf;

use anyhow::Result;

use examdrill_core::parser;

pub fn execute(exams_path: PathBuf) -> Result<()> {
    let exams = if exams_path.is_dir() {
        parser::load_exam_directory(&exams_path)?
    } else {
        vec![parser::parse_exam(&exams_path)?]
    };

    let mut total_warnings = 0;

    for exam in &exams {
        println!("Exam: {} ({} questions)", exam.name(), exam.questions().len());

        let warnings = parser::lint_exam(exam);
        for w in &warnings {
            let prefix = w
                .question
                .map(|idx| format!("  [question {}]", idx + 1))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All exams valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
