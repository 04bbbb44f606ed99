use crate::harness::TestContext;

#[test]
fn create_makes_missing_parent_directories() {
    let ctx = TestContext::new();

    ctx.cli().args(["create", "-f", "scripts/tools/run.py"]).assert().success();

    assert_eq!(ctx.read_file("scripts/tools/run.py"), "print (\"Hello world\")");
}
