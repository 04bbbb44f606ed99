use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn open_prints_numbered_lines_by_default() {
    let ctx = TestContext::new();
    ctx.write_file("main.go", "package main\n\nfunc main() {}\n");

    ctx.cli()
        .args(["open", "-f", "main.go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File : "))
        .stdout(predicate::str::contains("   1 | package main"))
        .stdout(predicate::str::contains("   3 | func main() {}"));
}
