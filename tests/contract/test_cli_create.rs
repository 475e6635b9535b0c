// Contract test for `create-project`

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

const DOCS: [&str; 3] = ["project_structure.md", "steps.md", "visual_sketch.md"];

/// Repository root with a docs directory and a stand-in tree printer
fn setup_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let docs = temp_dir.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    for doc in DOCS {
        fs::write(docs.join(doc), format!("# {}\n", doc)).unwrap();
    }
    fs::write(temp_dir.path().join("directory-tree"), "printer").unwrap();
    temp_dir
}

fn create_project(repo: &Path) -> Command {
    let mut cmd = Command::cargo_bin("create-project").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--root")
        .arg(repo)
        .arg("--tree-printer")
        .arg(repo.join("directory-tree"));
    cmd
}

#[test]
fn test_create_project_prompts_for_name() {
    let repo = setup_repo();

    create_project(repo.path())
        .write_stdin("my-project\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter the project name: "))
        .stdout(predicate::str::contains("Project my-project created successfully!"));

    assert!(repo.path().join("my-project").is_dir());
}

#[test]
fn test_create_project_skeleton_and_files() {
    let repo = setup_repo();

    create_project(repo.path())
        .args(["--name", "demo"])
        .assert()
        .success();

    let project = repo.path().join("demo");
    for directory in [
        "src/utils", "src/models", "src/services", "tests", "docs", "data",
        "scripts", "notebooks", ".github", "config", "examples",
    ] {
        assert!(project.join(directory).is_dir(), "{} missing", directory);
    }

    let expected_files = [
        ("README.md", ""),
        ("LICENSE", ""),
        (".gitignore", ""),
        ("requirements.txt", ""),
        ("setup.py", ""),
        ("src/utils/helper.py", "# Helper functions"),
        ("src/models/user.py", "# User model"),
        ("src/services/database.py", "# Database services"),
        ("src/services/authentication.py", "# Authentication services"),
    ];
    for (path, content) in expected_files {
        assert_eq!(fs::read_to_string(project.join(path)).unwrap(), content, "{}", path);
    }

    for doc in DOCS {
        assert_eq!(
            fs::read_to_string(project.join("docs").join(doc)).unwrap(),
            format!("# {}\n", doc)
        );
    }
    assert_eq!(fs::read_to_string(project.join("scripts/directory-tree")).unwrap(), "printer");
}

#[test]
fn test_create_project_rerun_keeps_unrelated_files() {
    let repo = setup_repo();
    create_project(repo.path()).args(["--name", "demo"]).assert().success();

    let project = repo.path().join("demo");
    fs::write(project.join("data/input.csv"), "a,b\n").unwrap();
    fs::write(project.join("src/models/user.py"), "class User: pass\n").unwrap();

    create_project(repo.path()).args(["--name", "demo"]).assert().success();

    assert_eq!(fs::read_to_string(project.join("data/input.csv")).unwrap(), "a,b\n");
    assert_eq!(fs::read_to_string(project.join("src/models/user.py")).unwrap(), "# User model");
}

#[test]
fn test_create_project_missing_doc_fails() {
    let repo = setup_repo();
    fs::remove_file(repo.path().join("docs/steps.md")).unwrap();

    create_project(repo.path())
        .args(["--name", "demo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to create project 'demo'"))
        .stderr(predicate::str::contains("steps.md"));

    let project = repo.path().join("demo");
    assert!(project.join("README.md").exists());
    assert!(!project.join("scripts/directory-tree").exists());
}

#[test]
fn test_create_project_eof_on_stdin_fails() {
    let repo = setup_repo();

    create_project(repo.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("End of input"));
}

#[test]
fn test_create_project_root_from_env() {
    let repo = setup_repo();

    let mut cmd = Command::cargo_bin("create-project").unwrap();
    cmd.env("CREATE_PROJECT_ROOT", repo.path())
        .env("CREATE_PROJECT_TREE_PRINTER", repo.path().join("directory-tree"))
        .args(["--name", "from-env"])
        .assert()
        .success();

    assert!(repo.path().join("from-env/scripts/directory-tree").exists());
}

#[test]
fn test_create_project_json_output() {
    let repo = setup_repo();

    let output = create_project(repo.path())
        .arg("--json")
        .write_stdin("demo\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["project_name"], "demo");
    assert!(json["project_root"].as_str().unwrap().ends_with("demo"));
    assert_eq!(json["files"].as_array().unwrap().len(), 9);
    assert!(json["tree_printer"].as_str().unwrap().ends_with("directory-tree"));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Enter the project name: "));
}
