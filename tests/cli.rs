use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense").expect("bin");
    cmd.env_remove("EXPENSE_TRACKER_DATA_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn signed_in() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    expense(dir.path())
        .args(["login", "Ada", "ada@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Ada"));
    dir
}

#[test]
fn store_commands_require_login() {
    let dir = TempDir::new().expect("tempdir");
    expense(dir.path())
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn logout_signs_out() {
    let dir = signed_in();
    expense(dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("ada@example.com"));

    expense(dir.path()).arg("logout").assert().success();
    expense(dir.path())
        .args(["transaction", "list"])
        .assert()
        .failure();
}

#[test]
fn dashboard_shows_seed_data() {
    let dir = signed_in();
    expense(dir.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $1520.00"))
        .stdout(predicate::str::contains("Expenses: $580.00"))
        .stdout(predicate::str::contains("Freelance work"));
}

#[test]
fn added_transaction_is_persisted() {
    let dir = signed_in();
    expense(dir.path())
        .args([
            "transaction",
            "add",
            "Movie night",
            "25.50",
            "--category",
            "entertainment",
            "--date",
            "2023-09-22",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense: Movie night"));

    let stored = fs::read_to_string(dir.path().join("data").join("expense-store.json"))
        .expect("store file");
    assert!(stored.contains("Movie night"));

    expense(dir.path())
        .args(["transaction", "list", "--search", "movie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Movie night"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn invalid_transaction_is_rejected() {
    let dir = signed_in();
    expense(dir.path())
        .args(["transaction", "add", "Nothing", "0", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than zero"));
}

#[test]
fn income_category_cannot_be_deleted() {
    let dir = signed_in();
    expense(dir.path())
        .args(["category", "delete", "Income"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot delete the Income category"));

    expense(dir.path())
        .args(["category", "delete", "Education"])
        .assert()
        .success();
    expense(dir.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Education").not())
        .stdout(predicate::str::contains("Income"));
}

#[test]
fn budget_spent_is_set_by_hand() {
    let dir = signed_in();
    expense(dir.path())
        .args(["budget", "set-spent", "1", "350"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overbudget by $50.00"));
}

#[test]
fn export_then_import_restores_state() {
    let dir = signed_in();
    let backup = dir.path().join("backup.json");

    expense(dir.path())
        .args(["export", "--output"])
        .arg(&backup)
        .assert()
        .success();

    expense(dir.path())
        .args(["transaction", "delete", "1"])
        .assert()
        .success();
    expense(dir.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: -$480.00"));

    expense(dir.path())
        .arg("import")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 5"));
    expense(dir.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $1520.00"));
}

#[test]
fn malformed_import_leaves_state_alone() {
    let dir = signed_in();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").expect("write");

    expense(dir.path())
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to import data"));

    expense(dir.path())
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn csv_export_goes_to_backups_by_default() {
    let dir = signed_in();
    expense(dir.path())
        .args(["export", "--format", "csv"])
        .assert()
        .success();

    let exported: Vec<_> = fs::read_dir(dir.path().join("backups"))
        .expect("backups dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(exported.len(), 1);
    assert!(exported[0].starts_with("expense-tracker-backup-"));
    assert!(exported[0].ends_with(".csv"));
}

#[test]
fn unknown_ids_are_a_no_op() {
    let dir = signed_in();
    expense(dir.path())
        .args(["transaction", "delete", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));
    expense(dir.path())
        .args(["budget", "set-spent", "missing", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing changed"));

    expense(dir.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $1520.00"));
}

#[test]
fn income_category_cannot_be_renamed() {
    let dir = signed_in();
    expense(dir.path())
        .args(["category", "edit", "Income", "--name", "Earnings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot rename the Income category"));
}

#[test]
fn non_ascii_amount_is_rejected() {
    let dir = signed_in();
    expense(dir.path())
        .args(["transaction", "add", "Snack", "1.5\u{e9}", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn bad_date_format_in_settings_is_reported() {
    let dir = signed_in();
    fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).expect("write");
    expense(dir.path())
        .args(["transaction", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"));
}
