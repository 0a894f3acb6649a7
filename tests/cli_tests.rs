use std::process::{Command, Output};
use tempfile::tempdir;

fn run_globcopy(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_globcopy"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run globcopy")
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let dir = tempdir().unwrap();
    let output = run_globcopy(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_no_matching_files_fails() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "a").unwrap();

    let output = run_globcopy(dir.path(), &["--stdout", "*.rs"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No files found"));
}

#[test]
fn test_stdout_output_and_partial_match_succeeds() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("task.component.ts"), "export class Task {}").unwrap();

    let output = run_globcopy(
        dir.path(),
        &["--stdout", "--no-stats", "task.component.ts", "*.py"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<file path=\"task.component.ts\">\nexport class Task {}\n</file>\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Processed: task.component.ts"));
    assert!(stderr.contains("*.py"));
}

#[test]
fn test_runs_are_byte_identical() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src/app")).unwrap();
    std::fs::write(dir.path().join("src/app/x.ts"), "x").unwrap();
    std::fs::write(dir.path().join("src/y.ts"), "y").unwrap();
    std::fs::write(dir.path().join("z.ts"), "z").unwrap();

    let first = run_globcopy(dir.path(), &["--stdout", "--no-stats", "*.ts"]);
    let second = run_globcopy(dir.path(), &["--stdout", "--no-stats", "*.ts"]);

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
}
