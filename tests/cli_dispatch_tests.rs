use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_prize_path")
}

fn sample_path() -> String {
    format!("{}/data/problem_set.in", env!("CARGO_MANIFEST_DIR"))
}

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("prize_path-{name}-{stamp}.in"))
}

#[test]
fn unknown_command_prints_usage() {
    let output = Command::new(bin())
        .arg("serve")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: prize_path"));
}

#[test]
fn solve_command_prints_optimum() {
    let output = Command::new(bin())
        .args(["solve", "1,2,3,4"])
        .output()
        .expect("solve should run");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "8");
}

#[test]
fn solve_command_honours_strategy() {
    let output = Command::new(bin())
        .args(["solve", "1,1,1,1,1,1,1,1,1", "--strategy", "top-down"])
        .output()
        .expect("solve should run");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "5");
}

#[test]
fn solve_command_accepts_strategy_before_list() {
    let output = Command::new(bin())
        .args(["solve", "--strategy", "top-down", "1,2,3,4"])
        .output()
        .expect("solve should run");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "8");
}

#[test]
fn solve_command_rejects_extra_argument_as_usage_error() {
    let output = Command::new(bin())
        .args(["solve", "1,2,3,4", "9,9,9,9"])
        .output()
        .expect("solve should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: prize_path solve"));
}

#[test]
fn solve_command_rejects_non_square_input() {
    let output = Command::new(bin())
        .args(["solve", "1,2,3,4,5,6,7,8,9,10"])
        .output()
        .expect("solve should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a perfect square"));
}

#[test]
fn run_command_reports_bundled_set() {
    let output = Command::new(bin())
        .args(["run", sample_path().as_str()])
        .output()
        .expect("run should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Test Results"));
    assert!(stdout.contains("Total problems:   10"));
    assert!(stdout.contains("Solved correctly: 10"));
}

#[test]
fn run_command_emits_json_and_fails_on_mistakes() {
    let path = unique_temp_path("mistake");
    fs::write(
        &path,
        "problems: 1\ndata:\n  - problem: 7\n    correct_answer: 1\n    prizes: [1, 2, 3, 4]\n",
    )
    .expect("fixture should be written");

    let output = Command::new(bin())
        .args(["run", path.to_string_lossy().as_ref(), "--json", "--sequential"])
        .output()
        .expect("run should run");

    assert_eq!(output.status.code(), Some(1));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("run should emit json");
    assert_eq!(payload["wrong_answers"], 1);
    assert_eq!(payload["results"][0]["got"], 8);

    let _ = fs::remove_file(path);
}

#[test]
fn run_command_uses_data_env_when_no_path_given() {
    let output = Command::new(bin())
        .arg("run")
        .env("PRIZE_PATH_DATA", sample_path())
        .output()
        .expect("run should run");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn validate_command_returns_non_zero_on_invalid_data() {
    let path = unique_temp_path("invalid");
    fs::write(
        &path,
        "problems: 1\ndata:\n  - problem: 1\n    correct_answer: 0\n    prizes: [1, 2, 3]\n",
    )
    .expect("fixture should be written");

    let output = Command::new(bin())
        .args(["validate", path.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed"));

    let _ = fs::remove_file(path);
}

#[test]
fn generate_command_writes_loadable_file() {
    let path = unique_temp_path("generate");
    let output = Command::new(bin())
        .args(["generate", "4", "3", "5", path.to_string_lossy().as_ref()])
        .output()
        .expect("generate should run");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("wrote 4 problem(s)"));

    let validate = Command::new(bin())
        .args(["validate", path.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");
    assert_eq!(validate.status.code(), Some(0));

    let _ = fs::remove_file(path);
}
