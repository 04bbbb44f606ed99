use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn open_plain_prints_lines_verbatim() {
    let ctx = TestContext::new();
    ctx.write_file("notes.md", "# Title\nbody\n");

    ctx.cli()
        .args(["o", "-f", "notes.md", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Title\nbody\n"))
        .stdout(predicate::str::contains(" | ").not());
}
