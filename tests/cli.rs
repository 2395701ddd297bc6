use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "accounts": [
        {"id": "6f1d2a2e-7c43-4a57-9b1e-3a2e3f7b1c01", "name": "Current", "type": "checking", "balance": 10000},
        {"id": "6f1d2a2e-7c43-4a57-9b1e-3a2e3f7b1c02", "name": "Savings", "type": "savings", "balance": 20000},
        {"id": "6f1d2a2e-7c43-4a57-9b1e-3a2e3f7b1c03", "name": "Closed", "type": "checking", "closed": true, "balance": -5000}
    ],
    "scheduled_transactions": [
        {"id": "8b0e5a8c-2f4e-4d8f-8a57-1b2c3d4e5f01", "date_next": "2025-03-11", "frequency": "never",
         "amount": -15000, "account_id": "6f1d2a2e-7c43-4a57-9b1e-3a2e3f7b1c01"}
    ]
}"#;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("snapshot.json"), SNAPSHOT).unwrap();
        Self { dir }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("runway").unwrap();
        cmd.current_dir(self.dir.path())
            .env("RUNWAY_CONFIG_DIR", self.dir.path().join("config"))
            .env_remove("YNAB_TOKEN")
            .env_remove("YNAB_BUDGET_ID")
            .env_remove("RUNWAY_WINDOWS")
            .env_remove("RUST_LOG");
        cmd
    }

    fn snapshot(&self) -> std::path::PathBuf {
        self.dir.path().join("snapshot.json")
    }
}

#[test]
fn check_from_snapshot() {
    let env = Env::new();
    let snapshot = env.snapshot();
    env.cmd()
        .args(["check", "--snapshot", snapshot.to_str().unwrap(), "--today", "2025-03-10", "--windows", "3,7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accounts at risk within 3 days"))
        .stdout(predicate::str::contains(
            "Current: drop 2025-03-11, projected -£5.00 (current £10.00)",
        ))
        .stdout(predicate::str::contains(
            "Move £5.00 from Savings to Current, covers drop on 2025-03-11",
        ))
        .stdout(predicate::str::contains("Closed").not());
}

#[test]
fn default_command_is_check() {
    let env = Env::new();
    let snapshot = env.snapshot();
    env.cmd()
        .args(["--snapshot", snapshot.to_str().unwrap(), "--today", "2025-03-10", "--windows", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accounts at risk within 7 days"))
        .stdout(predicate::str::contains("Suggested cover transfers"));
}

#[test]
fn all_clear_window() {
    let env = Env::new();
    let snapshot = env.snapshot();
    env.cmd()
        .args(["risk", "--snapshot", snapshot.to_str().unwrap(), "--today", "2025-03-12", "--windows", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All accounts stay non-negative in the selected windows.",
        ));
}

#[test]
fn missing_token_fails() {
    let env = Env::new();
    env.cmd()
        .args(["check", "--windows", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YNAB token is required"));
}

#[test]
fn invalid_windows_fail() {
    let env = Env::new();
    let snapshot = env.snapshot();
    env.cmd()
        .args(["risk", "--snapshot", snapshot.to_str().unwrap(), "--windows", "3,soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --windows value: 3,soon"));
}

#[test]
fn json_output_to_file() {
    let env = Env::new();
    let snapshot = env.snapshot();
    let out = env.dir.path().join("forecast.json");
    env.cmd()
        .args([
            "transfers",
            "--snapshot",
            snapshot.to_str().unwrap(),
            "--today",
            "2025-03-10",
            "--windows",
            "7",
            "--format",
            "json",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["moves"][0]["amount"], 5000);
    assert_eq!(value["moves"][0]["from_name"], "Savings");
}

#[test]
fn init_then_config() {
    let env = Env::new();
    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created settings at"));

    assert!(env.dir.path().join("config").join("config.json").exists());

    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Windows:         3,7,30"));
}
