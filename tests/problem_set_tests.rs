use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use prize_path::data::{
    generate_problem_set, load_problem_set, parse_problem_set, save_problem_set,
    validate_problem_set, GenerateOptions,
};
use prize_path::harness::{render_text, run_problem_set, ProblemOutcome, RunOptions};

fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/problem_set.in")
}

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("prize_path-{name}-{stamp}.in"))
}

#[test]
fn bundled_problem_set_is_valid_and_fully_solved() {
    let set = load_problem_set(sample_path()).expect("bundled set should load");
    assert_eq!(set.problems, set.data.len());
    assert!(!validate_problem_set(&set).has_errors());

    let report = run_problem_set(&set, &RunOptions::default()).unwrap();
    assert!(report.all_correct(), "{}", render_text(&report));
}

#[test]
fn malformed_entries_do_not_abort_the_batch() {
    let set = parse_problem_set(
        "\
problems: 4
data:
  - problem: 1
    correct_answer: 8
    prizes: [1, 2, 3, 4]
  - problem: 2
    correct_answer: 0
    prizes: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
  - problem: 3
    correct_answer: 0
    prizes: [1, \"two\", 3, 4]
  - problem: 4
    correct_answer: 3
    prizes: [0, -1, 2, 1]
",
    )
    .unwrap();

    let report = run_problem_set(&set, &RunOptions::default()).unwrap();
    assert_eq!(report.solved_correctly, 1);
    assert_eq!(report.errors, 3);

    let messages: Vec<&str> = report
        .results
        .iter()
        .filter_map(|r| match &r.outcome {
            ProblemOutcome::Error { message } => Some(message.as_str()),
            _ => None,
        })
        .collect();
    assert!(messages[0].contains("Prize count 10 is not a perfect square"));
    assert!(messages[1].contains("prize #1"));
    assert!(messages[2].contains("negative prize -1 at (0, 1)"));
}

#[test]
fn generated_set_survives_save_and_load() {
    let path = unique_temp_path("generated");
    let set = generate_problem_set(&GenerateOptions {
        count: 6,
        max_side: 5,
        seed: 99,
        ..GenerateOptions::default()
    });
    save_problem_set(&path, &set).expect("set should be written");

    let loaded = load_problem_set(&path).expect("set should load back");
    assert_eq!(loaded.problems, 6);
    let report = run_problem_set(&loaded, &RunOptions::default()).unwrap();
    assert!(report.all_correct());

    let _ = fs::remove_file(path);
}
