use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn validate_fixture() {
    let env = TestEnv::with_fixture();
    env.cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(contains("dataset valid (8 rows)"));
}

#[test]
fn extract_prints_counts() {
    let env = TestEnv::with_fixture();
    env.cmd()
        .arg("extract")
        .assert()
        .success()
        .stdout(contains("threat keywords: 4"))
        .stdout(contains("harassment keywords: 3"))
        .stdout(contains("fraud keywords: 4"))
        .stdout(contains("saved to: extracted_keywords.json"));
}

#[test]
fn rules_lists_builtin_table() {
    let env = TestEnv::new();
    env.cmd()
        .arg("rules")
        .assert()
        .success()
        .stdout(contains("threats\tcrime_type: Criminal Threat | Blackmail"))
        .stdout(contains("fraud\tcrime_type: Financial Fraud | Account Hacking | Scam"));
}

#[test]
fn missing_input_reports_path() {
    let env = TestEnv::new();
    env.cmd()
        .args(["extract", "--input", "nope.csv"])
        .assert()
        .failure()
        .stderr(contains("nope.csv"));
}
