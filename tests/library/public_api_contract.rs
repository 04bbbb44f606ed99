use fops::{
    AppError, CreateOptions, Language, OpenFileOptions, OpenOutcome, ReadDirOptions, Viewer,
    create_file, open_file, read_dir,
};
use tempfile::TempDir;

fn path_str(temp: &TempDir, relative: &str) -> String {
    temp.path().join(relative).to_string_lossy().into_owned()
}

#[test]
fn public_api_create_open_read_happy_path_contract() {
    let temp = TempDir::new().unwrap();
    let file = path_str(&temp, "pkg/hello.py");

    let created = create_file(&CreateOptions { file: file.clone() }).expect("create failed");
    assert_eq!(created.language, Language::Python);
    assert!(created.path.is_absolute());

    let opened = open_file(&OpenFileOptions { file, viewer: Viewer::default() })
        .expect("open failed");
    match opened {
        OpenOutcome::Displayed { lines, .. } => {
            assert_eq!(lines, ["   1 | print (\"Hello world\")"]);
        }
        other => panic!("expected displayed output, got {:?}", other),
    }

    let listing = read_dir(&ReadDirOptions { path: path_str(&temp, ""), show_hidden: false })
        .expect("read failed");
    assert_eq!(listing.tree.lines, ["└── pkg/", "    └── hello.py"]);
    assert_eq!((listing.tree.directories, listing.tree.files), (1, 1));
}

#[test]
fn public_api_rejects_duplicate_create_contract() {
    let temp = TempDir::new().unwrap();
    let file = path_str(&temp, "main.go");

    create_file(&CreateOptions { file: file.clone() }).expect("first create failed");
    let err = create_file(&CreateOptions { file }).unwrap_err();

    assert!(matches!(err, AppError::AlreadyExists(_)));
}

#[test]
fn public_api_open_displays_non_utf8_file_contract() {
    let temp = TempDir::new().unwrap();
    let file = path_str(&temp, "legacy.txt");
    std::fs::write(&file, b"caf\xe9\nsecond line\n").unwrap();

    let opened = open_file(&OpenFileOptions { file, viewer: Viewer::default() })
        .expect("open failed");

    match opened {
        OpenOutcome::Displayed { lines, .. } => {
            assert_eq!(lines, ["   1 | caf\u{FFFD}", "   2 | second line"]);
        }
        other => panic!("expected displayed output, got {:?}", other),
    }
}
