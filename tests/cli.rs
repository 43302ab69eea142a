use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ciop").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn analyze_prints_constant_score() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["analyze", "AI-assisted research paper", "--context", "academic"])
        .assert()
        .success()
        .stdout(contains("sustainability score: 90.00%"));
}

#[test]
fn policy_academic_prints_title() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["policy", "academic", "university collaboration"])
        .assert()
        .success()
        .stdout(contains("Academic Intellectual Stewardship Policy"));
}

#[test]
fn contexts_lists_academic_template() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("contexts")
        .assert()
        .success()
        .stdout(contains("Knowledge sharing and collaborative research"));
}

#[test]
fn demo_reports_recorded_analyses() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("recorded 2 analyses"));
}
