use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn read_missing_path_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["read", "-p", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'nowhere' does not exist"));
}

#[test]
fn read_file_path_is_not_a_directory() {
    let ctx = TestContext::new();
    ctx.write_file("main.go", "");

    ctx.cli()
        .args(["r", "-p", "main.go"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}
