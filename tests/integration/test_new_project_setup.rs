use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use std::fs;

/// End-to-end: scaffold with the real tree printer, then run the copy that
/// landed in the new project's scripts directory.
#[test]
fn test_scaffolded_tree_printer_prints_project() {
    let repo = TempDir::new().unwrap();
    let docs = repo.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    for doc in ["project_structure.md", "steps.md", "visual_sketch.md"] {
        fs::write(docs.join(doc), "").unwrap();
    }

    let tree_printer = assert_cmd::cargo::cargo_bin("directory-tree");

    Command::cargo_bin("create-project")
        .unwrap()
        .arg("--root")
        .arg(repo.path())
        .arg("--tree-printer")
        .arg(&tree_printer)
        .write_stdin("sample\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project sample created successfully!"));

    let copied = repo
        .path()
        .join("sample/scripts")
        .join(tree_printer.file_name().unwrap());
    assert!(copied.is_file());

    // No argument: prints the parent of its own directory
    let output = Command::new(&copied).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("|-- sample"));
    assert!(stdout.contains("    |-- scripts\n"));
    assert!(stdout.contains("            |-- helper.py\n"));
    assert!(stdout.contains("    |-- README.md\n"));
    // .github is part of the skeleton but always excluded
    assert!(!stdout.contains(".github"));
}

#[test]
fn test_two_projects_side_by_side() {
    let repo = TempDir::new().unwrap();
    let docs = repo.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    for doc in ["project_structure.md", "steps.md", "visual_sketch.md"] {
        fs::write(docs.join(doc), doc).unwrap();
    }
    fs::write(repo.path().join("printer"), "").unwrap();

    for name in ["alpha", "beta"] {
        Command::cargo_bin("create-project")
            .unwrap()
            .args(["--name", name])
            .arg("--root")
            .arg(repo.path())
            .arg("--tree-printer")
            .arg(repo.path().join("printer"))
            .assert()
            .success();
    }

    Command::cargo_bin("directory-tree")
        .unwrap()
        .arg(repo.path())
        .args(["--exclude", "docs", "--exclude", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    |-- alpha\n"))
        .stdout(predicate::str::contains("    |-- beta\n"))
        .stdout(predicate::str::contains("        |-- notebooks\n"))
        .stdout(predicate::str::contains("steps.md").not());
}
