use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn open_with_unknown_editor_reports_launch_failure() {
    let ctx = TestContext::new();
    ctx.write_file("main.go", "package main\n");

    ctx.cli()
        .args(["open", "-f", "main.go", "-e", "fops-missing-editor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch 'fops-missing-editor'"));
}
