use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_writes_exact_go_template() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["create", "--file", "foo.go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created Go file"));

    assert_eq!(
        ctx.read_file("foo.go"),
        "package main\n\nimport \"fmt\"\n\nfunc main(){\n\tfmt.Println(\"Hello world\")\n}\n"
    );
}

#[test]
fn create_alias_writes_php_template() {
    let ctx = TestContext::new();

    ctx.cli().args(["c", "-f", "index.php"]).assert().success();

    assert_eq!(ctx.read_file("index.php"), "<?php\necho \"Hello world\"; \n?> \n");
}

#[test]
fn create_accepts_bare_dot_file_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["create", "-f", ".py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created Python file"));

    assert_eq!(ctx.read_file(".py"), "print (\"Hello world\")");
}
