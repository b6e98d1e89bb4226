use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Temporary database and session paths for one test.
struct TestEnv {
    _temp_dir: TempDir,
    db_path: PathBuf,
    session_path: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let db_path = temp_dir.path().join("cli_test.db");
        let session_path = temp_dir.path().join("session.json");
        Self {
            _temp_dir: temp_dir,
            db_path,
            session_path,
        }
    }

    /// A `msk` command with plain output bound to this environment.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("msk").expect("Failed to find msk binary");
        cmd.arg("--no-color")
            .arg("--database-file")
            .arg(&self.db_path)
            .arg("--session-file")
            .arg(&self.session_path);
        cmd
    }

    fn login(&self, email: &str) {
        self.cmd().args(["login", email]).assert().success();
    }

    fn seeded_as(email: &str) -> Self {
        let env = Self::new();
        env.cmd().arg("seed").assert().success();
        env.login(email);
        env
    }

    /// ID of the first suggestion listed with `status`.
    fn first_suggestion_id(&self, status: &str) -> String {
        let output = self
            .cmd()
            .args(["suggestion", "list", "--status", status, "--limit", "1"])
            .output()
            .unwrap();
        let stdout = String::from_utf8(output.stdout).unwrap();
        stdout
            .lines()
            .nth(2)
            .and_then(|row| row.split('|').nth(1))
            .expect("list should contain a row")
            .trim()
            .to_string()
    }

    /// ID of the first employee in `employee list` output.
    fn first_employee_id(&self) -> String {
        let output = self.cmd().args(["employee", "list"]).output().unwrap();
        let stdout = String::from_utf8(output.stdout).unwrap();
        stdout
            .lines()
            .find_map(|line| line.split_once("(ID: "))
            .and_then(|(_, rest)| rest.strip_suffix(')'))
            .expect("employee list should contain an ID heading")
            .to_string()
    }
}

#[test]
fn test_cli_login_and_whoami() {
    let env = TestEnv::new();

    env.cmd()
        .args(["login", "hsmanager@company.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Alex Thompson"));

    env.cmd()
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("hsmanager@company.com"))
        .stdout(predicate::str::contains("create_suggestions"));

    env.cmd()
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));

    env.cmd()
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));
}

#[test]
fn test_cli_login_unknown_email_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["login", "stranger@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No admin account"));
}

#[test]
fn test_cli_commands_require_sign_in() {
    let env = TestEnv::new();

    env.cmd()
        .args(["suggestion", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("view_all"));
}

#[test]
fn test_cli_seed_reports_counts() {
    let env = TestEnv::new();

    env.cmd()
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seed Complete"))
        .stdout(predicate::str::contains("6 added, 0 already present"));

    env.cmd()
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 added, 6 already present"));
}

#[test]
fn test_cli_list_empty_suggestions() {
    let env = TestEnv::new();
    env.login("viewer@company.com");

    env.cmd()
        .args(["suggestion", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions found."));
}

#[test]
fn test_cli_list_with_filters() {
    let env = TestEnv::seeded_as("viewer@company.com");

    env.cmd()
        .args(["suggestion", "list", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ergonomic split keyboard"))
        .stdout(predicate::str::contains("Lightweight wireless headset").not());

    env.cmd()
        .args(["suggestion", "list", "--search", "emma williams", "--priority", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lightweight wireless headset"))
        .stdout(predicate::str::contains("Lumbar support").not());

    env.cmd()
        .args(["suggestion", "list", "--status", "archived"])
        .assert()
        .failure();
}

#[test]
fn test_cli_overview_and_stats() {
    let env = TestEnv::seeded_as("admin@company.com");

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("MSK Dashboard"))
        .stdout(predicate::str::contains("Recent Suggestions"))
        .stdout(predicate::str::contains("**Total**: 12"));

    env.cmd()
        .args(["--overdue-days", "36500", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attention").not());
}

#[test]
fn test_cli_employee_show() {
    let env = TestEnv::seeded_as("viewer@company.com");
    let id = env.first_employee_id();

    env.cmd()
        .args(["employee", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Suggestions"));

    env.cmd()
        .args(["employee", "show", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_viewer_cannot_create() {
    let env = TestEnv::seeded_as("viewer@company.com");
    let id = env.first_employee_id();

    env.cmd()
        .args(["suggestion", "create", &id, "exercise", "Stretch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("create_suggestions"));
}

#[test]
fn test_cli_create_and_update_status() {
    let env = TestEnv::seeded_as("hsmanager@company.com");
    let employee_id = env.first_employee_id();

    let output = env
        .cmd()
        .args([
            "suggestion",
            "create",
            &employee_id,
            "equipment",
            "Document holder",
            "--priority",
            "high",
            "--cost",
            "25",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Document holder"));
    assert!(stdout.contains("£25.00"));
    let id = stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created suggestion with ID: "))
        .expect("create output should include the new ID")
        .trim()
        .to_string();

    env.cmd()
        .args([
            "suggestion",
            "status",
            &id,
            "completed",
            "--notes",
            "Delivered",
            "--cost",
            "£27.50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: pending → completed"))
        .stdout(predicate::str::contains("Delivered"))
        .stdout(predicate::str::contains("£27.50"));

    env.cmd()
        .args(["suggestion", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed:"));
}

#[test]
fn test_cli_create_requires_description() {
    let env = TestEnv::seeded_as("admin@company.com");
    let employee_id = env.first_employee_id();

    env.cmd()
        .args(["suggestion", "create", &employee_id, "exercise", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Employee and Description are required"));
}

#[test]
fn test_cli_status_unknown_suggestion() {
    let env = TestEnv::seeded_as("admin@company.com");

    env.cmd()
        .args(["suggestion", "status", "missing", "completed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_status_rejects_bad_cost() {
    let env = TestEnv::seeded_as("admin@company.com");
    let id = env.first_suggestion_id("pending");

    env.cmd()
        .args(["suggestion", "status", &id, "completed", "--cost", "£85.123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid cost"));
}

#[test]
fn test_cli_show_respects_overdue_days() {
    let env = TestEnv::seeded_as("viewer@company.com");
    let id = env.first_suggestion_id("pending");

    env.cmd()
        .args(["--overdue-days", "5", "suggestion", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overdue"));

    env.cmd()
        .args(["--overdue-days", "36500", "suggestion", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overdue").not());
}
