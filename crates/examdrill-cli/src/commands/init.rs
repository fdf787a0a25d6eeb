//! The `examdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("exams")?;
    let example_path = std::path::Path::new("exams/example.json");
    if example_path.exists() {
        println!("exams/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_EXAM)?;
        println!("Created exams/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your own exam files under exams/");
    println!("  2. Run: examdrill validate --exams exams/example.json");
    println!("  3. Run: examdrill study --exams exams/example.json");

    Ok(())
}

pub(crate) const EXAMPLE_EXAM: &str = r#"{
  "name": "Example Exam",
  "questions": [
    {
      "kind": "single-choice",
      "prompt": "What is the capital of France?",
      "choices": ["Berlin", "Paris", "London", "Rome"],
      "answer": ["Paris"],
      "explanation": "Paris has been the capital of France since 987.",
      "refs": ["https://en.wikipedia.org/wiki/Paris"]
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
      "prompt": "Write a command that case-insensitively searches user_info.txt for 'john'.",
      "choices": ["grep takes its flags in any position.", "The flag for case-insensitive matching is -i."],
      "answer": [
        "grep -i john user_info.txt",
        "grep john user_info.txt -i",
        "grep john -i user_info.txt"
      ],
      "explanation": "grep -i performs a case-insensitive match.",
      "refs": ["man grep"]
    }
  ]
}
"#;
