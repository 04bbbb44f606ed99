use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn read_lists_directories_before_files_recursively() {
    let ctx = TestContext::new();
    ctx.write_file("project/b.txt", "");
    ctx.write_file("project/a.txt", "");
    ctx.write_file("project/lib/util.go", "");
    ctx.write_file("project/cmd/main.go", "");

    let expected = "\
├── cmd/
│   └── main.go
├── lib/
│   └── util.go
├── a.txt
└── b.txt
";

    ctx.cli()
        .args(["read", "-p", "project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("absolute path "))
        .stdout(predicate::str::contains(expected));
}
