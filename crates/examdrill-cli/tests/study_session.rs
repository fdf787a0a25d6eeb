//! End-to-end study sessions driven through stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn examdrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("examdrill").unwrap()
}

const EXAM: &str = r#"{
  "name": "Mixed Drill",
  "questions": [
    {
      "kind": "single-choice",
      "prompt": "What is the capital of France?",
      "choices": ["Berlin", "Paris", "London", "Rome"],
      "answer": ["Paris"],
      "explanation": "Paris has been the capital since 987.",
      "refs": []
    },
    {
      "kind": "multi-choice",
      "prompt": "Which of these are US states?",
      "choices": ["Wyoming", "Alaska", "Puerto Rico", "Miami", "Hawaii"],
      "answer": ["Wyoming", "Alaska", "Hawaii"],
      "explanation": "Puerto Rico is a territory; Miami is a city.",
      "refs": []
    },
    {
      "kind": "free-entry",
      "prompt": "Case-insensitively search user_info.txt for 'john'.",
      "choices": ["The flag is -i."],
      "answer": ["grep -i john user_info.txt", "grep john user_info.txt -i"],
      "explanation": "grep -i matches case-insensitively.",
      "refs": ["man grep"]
    }
  ]
}"#;

fn exam_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("mixed.json");
    std::fs::write(&path, EXAM).unwrap();
    path
}

#[test]
fn perfect_session() {
    let dir = TempDir::new().unwrap();

    examdrill()
        .arg("study")
        .arg("--exams")
        .arg(exam_file(&dir))
        .write_stdin("b\na, b, e\ngrep -i john user_info.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Studying: Mixed Drill"))
        .stdout(predicate::str::contains("Question 3 of 3"))
        .stdout(predicate::str::contains("Final score: 3/3"));
}

#[test]
fn partial_credit_is_not_a_thing() {
    let dir = TempDir::new().unwrap();

    // Two of the three required states; missing Alaska.
    examdrill()
        .arg("study")
        .arg("--exams")
        .arg(exam_file(&dir))
        .write_stdin("b\na, e\ngrep john user_info.txt -i\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Puerto Rico is a territory"))
        .stdout(predicate::str::contains("Final score: 2/3"));
}

#[test]
fn case_matters_for_free_entry() {
    let dir = TempDir::new().unwrap();

    examdrill()
        .arg("study")
        .arg("--exams")
        .arg(exam_file(&dir))
        .write_stdin("b\na,b,e\nGREP -i john user_info.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("see: man grep"))
        .stdout(predicate::str::contains("Final score: 2/3"));
}

#[test]
fn hints_on_request() {
    let dir = TempDir::new().unwrap();

    examdrill()
        .arg("study")
        .arg("--exams")
        .arg(exam_file(&dir))
        .write_stdin("b\na,b,e\n?\n?\ngrep -i john user_info.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hint: The flag is -i. (0 remaining)"))
        .stdout(predicate::str::contains("No more hints."))
        .stdout(predicate::str::contains("Final score: 3/3"));
}

#[test]
fn directory_with_single_exam_loads_without_menu() {
    let dir = TempDir::new().unwrap();
    exam_file(&dir);

    examdrill()
        .arg("study")
        .arg("--exams")
        .arg(dir.path())
        .write_stdin("b\na,b,e\ngrep -i john user_info.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final score: 3/3"));
}

#[test]
fn empty_directory_is_an_error() {
    let dir = TempDir::new().unwrap();

    examdrill()
        .arg("study")
        .arg("--exams")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no exams found"));
}
