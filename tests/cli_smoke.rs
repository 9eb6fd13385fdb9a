//! Binary smoke tests using assert_cmd.
//!
//! Each test runs the compiled `product-report` binary inside a temporary
//! working directory, since the default input path is relative.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("product-report").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_args_reads_test_products_csv() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("test_products.csv"),
        "barcode,product_name,complexity_level\n0001,Widget A,easy\n0002,Widget B,hard\n",
    )
    .unwrap();

    cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 test products:"))
        .stdout(predicate::str::contains("0     0001      Widget A              easy"))
        .stdout(predicate::str::contains("Ready to proceed with manual research."));
}

#[test]
fn missing_file_fails_with_empty_stdout() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Product file not found"));
}

#[test]
fn missing_column_fails_before_count_line() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("test_products.csv"),
        "barcode,product_name\n0001,Widget A\n",
    )
    .unwrap();

    cmd(&dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Loaded").not())
        .stderr(predicate::str::contains("complexity_level"));
}

#[test]
fn input_flag_overrides_default_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("other.csv"),
        "barcode,product_name,complexity_level\n7,Tea,medium\n",
    )
    .unwrap();

    cmd(&dir)
        .args(["--input", "other.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 1 test products:"));
}

#[test]
fn help_flag() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"));
}
