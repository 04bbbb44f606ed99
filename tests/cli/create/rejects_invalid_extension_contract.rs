use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_rejects_extension_outside_allow_list() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["create", "-f", "foo.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file extension '.txt'"))
        .stderr(predicate::str::contains(".go, .js, .py, .php"));

    ctx.assert_missing("foo.txt");
}

#[test]
fn create_rejects_name_without_extension() {
    let ctx = TestContext::new();

    ctx.cli().args(["create", "-f", "Makefile"]).assert().failure();

    ctx.assert_missing("Makefile");
}
