use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_rejects_existing_file_without_modifying_it() {
    let ctx = TestContext::new();
    ctx.write_file("app.js", "module.exports = {};\n");

    ctx.cli()
        .args(["create", "-f", "app.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(ctx.read_file("app.js"), "module.exports = {};\n");
}
