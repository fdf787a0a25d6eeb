//! The `examdrill study` command — the interactive session driver.
//!
//! Owns everything the grading engine deliberately does not: rendering
//! prompts, lettering choices, resolving letters back to choice text,
//! the per-question hint counter, and the final score tally.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use examdrill_core::grader::{grade, next_hint, HintDisclosure, Response, Verdict};
use examdrill_core::model::{Exam, Question, QuestionKind};
use examdrill_core::parser;

/// Reserved input that requests the next hint instead of answering.
const HINT_KEYWORD: &str = "?";

pub fn execute(exams_path: PathBuf) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let exam = select_exam(exams_path, &mut input, &mut output)?;
    let Some(exam) = exam else {
        return Ok(());
    };

    run_session(&exam, &mut input, &mut output)
}

/// Load the exam to study. A file is loaded directly; a directory
/// offers a numbered menu when it holds more than one exam.
fn select_exam<R: BufRead, W: Write>(
    path: PathBuf,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Exam>> {
    if !path.is_dir() {
        let exam = parser::parse_exam(&path)?;
        tracing::debug!("loaded exam {:?} from {}", exam.name(), path.display());
        return Ok(Some(exam));
    }

    let mut exams = parser::load_exam_directory(&path)?;
    match exams.len() {
        0 => anyhow::bail!(
            "no exams found in {}. Run `examdrill init` to create a starter exam.",
            path.display()
        ),
        1 => Ok(Some(exams.remove(0))),
        n => {
            writeln!(output, "Available exams:")?;
            for (idx, exam) in exams.iter().enumerate() {
                writeln!(
                    output,
                    "  {}. {} ({} questions)",
                    idx + 1,
                    exam.name(),
                    exam.questions().len()
                )?;
            }
            loop {
                let Some(line) = read_entry(input, output, &format!("Choose an exam [1-{n}]: "))?
                else {
                    return Ok(None);
                };
                match line.parse::<usize>() {
                    Ok(pick) if (1..=n).contains(&pick) => {
                        return Ok(Some(exams.swap_remove(pick - 1)));
                    }
                    _ => writeln!(output, "Enter a number between 1 and {n}.")?,
                }
            }
        }
    }
}

/// Running score for one session.
struct ScoreCard {
    correct: usize,
    total: usize,
}

impl ScoreCard {
    fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}

fn run_session<R: BufRead, W: Write>(exam: &Exam, input: &mut R, output: &mut W) -> Result<()> {
    writeln!(output, "Studying: {}\n", exam.name())?;

    let mut score = ScoreCard {
        correct: 0,
        total: 0,
    };

    for (idx, question) in exam.questions().iter().enumerate() {
        writeln!(output, "Question {} of {}", idx + 1, exam.questions().len())?;
        writeln!(output, "{}", question.prompt())?;

        let Some(verdict) = ask(question, input, output)? else {
            // Input ended mid-session; summarize what was answered.
            break;
        };

        if verdict.correct {
            writeln!(output, "Correct.")?;
        } else {
            writeln!(output, "Incorrect.")?;
            if let Some(explanation) = verdict.explanation {
                writeln!(output, "  {explanation}")?;
            }
            for r in verdict.refs {
                writeln!(output, "  see: {r}")?;
            }
        }
        writeln!(output)?;
        score.record(verdict.correct);
    }

    print_summary(exam, &score, output)
}

/// Present one question and collect a gradable response.
///
/// Returns `None` when input is exhausted before an answer arrives.
fn ask<'a, R: BufRead, W: Write>(
    question: &'a Question,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Verdict<'a>>> {
    match question.kind() {
        QuestionKind::SingleChoice => {
            print_choices(question, output)?;
            loop {
                let Some(line) = read_entry(input, output, "Answer (letter): ")? else {
                    return Ok(None);
                };
                match resolve_letter(&line, question.choices()) {
                    Some(text) => return Ok(Some(grade(question, &Response::Choice(text)))),
                    None => writeln!(
                        output,
                        "Enter a letter between a and {}.",
                        letter(question.choices().len() - 1)
                    )?,
                }
            }
        }
        QuestionKind::MultiChoice => {
            print_choices(question, output)?;
            loop {
                let Some(line) = read_entry(input, output, "Answers (letters, comma-separated): ")?
                else {
                    return Ok(None);
                };
                match resolve_selection(&line, question.choices()) {
                    Some(selected) => {
                        return Ok(Some(grade(question, &Response::Selection(selected))))
                    }
                    None => writeln!(
                        output,
                        "Enter letters between a and {}, separated by commas.",
                        letter(question.choices().len() - 1)
                    )?,
                }
            }
        }
        QuestionKind::FreeEntry => {
            if question.hint_count() > 0 {
                writeln!(output, "(type {HINT_KEYWORD} for a hint)")?;
            }
            let mut hints_shown = 0usize;
            loop {
                let Some(line) = read_entry(input, output, "Answer: ")? else {
                    return Ok(None);
                };
                if line == HINT_KEYWORD {
                    match next_hint(question, hints_shown) {
                        HintDisclosure::Hint { text, remaining } => {
                            hints_shown += 1;
                            writeln!(output, "Hint: {text} ({remaining} remaining)")?;
                        }
                        HintDisclosure::Exhausted => {
                            writeln!(output, "No more hints.")?;
                        }
                    }
                    continue;
                }
                return Ok(Some(grade(question, &Response::Text(line))));
            }
        }
    }
}

fn print_choices<W: Write>(question: &Question, output: &mut W) -> Result<()> {
    for (idx, choice) in question.choices().iter().enumerate() {
        writeln!(output, "  {}) {}", letter(idx), choice)?;
    }
    Ok(())
}

/// Prompt until a non-empty line arrives. Returns `None` on EOF.
fn read_entry<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    let mut buf = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        buf.clear();
        let read = input.read_line(&mut buf).context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
        writeln!(output, "Entry must not be empty.")?;
    }
}

fn letter(idx: usize) -> char {
    (b'a' + idx as u8) as char
}

/// Resolve a single letter to the full choice text.
fn resolve_letter(entry: &str, choices: &[String]) -> Option<String> {
    let mut chars = entry.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let idx = (c.to_ascii_lowercase() as usize).checked_sub('a' as usize)?;
    choices.get(idx).cloned()
}

/// Resolve a comma-separated letter list, collapsing duplicates.
fn resolve_selection(entry: &str, choices: &[String]) -> Option<HashSet<String>> {
    let mut selected = HashSet::new();
    for part in entry.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        selected.insert(resolve_letter(part, choices)?);
    }
    if selected.is_empty() {
        return None;
    }
    Some(selected)
}

fn print_summary<W: Write>(exam: &Exam, score: &ScoreCard, output: &mut W) -> Result<()> {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Exam", "Answered", "Correct", "Score"]);
    table.add_row(vec![
        Cell::new(exam.name()),
        Cell::new(score.total),
        Cell::new(score.correct),
        Cell::new(format!("{:.0}%", score.percent())),
    ]);

    writeln!(output, "{table}")?;
    writeln!(output, "Final score: {}/{}", score.correct, score.total)?;
    Ok(())
}
