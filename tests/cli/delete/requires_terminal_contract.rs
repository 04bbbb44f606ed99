use crate::harness::TestContext;

#[test]
fn delete_without_terminal_removes_nothing() {
    let ctx = TestContext::new();
    ctx.write_file("keep/data.txt", "payload");

    ctx.cli().args(["delete", "-p", "keep"]).write_stdin("y\nsecret\n").assert().failure();

    ctx.assert_exists("keep/data.txt");
    assert_eq!(ctx.read_file("keep/data.txt"), "payload");
}
