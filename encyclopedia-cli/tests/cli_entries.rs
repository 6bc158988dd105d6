use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_config(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(
        dir.join("encyclopedia.yml"),
        r#"
site:
  title: "Test Encyclopedia"
paths:
  entries: "entries"
"#,
    )?;
    Ok(())
}

fn seed(dir: &Path, entries: &[(&str, &str)]) -> Result<(), Box<dyn std::error::Error>> {
    let entries_dir = dir.join("entries");
    fs::create_dir_all(&entries_dir)?;
    for (title, content) in entries {
        fs::write(entries_dir.join(format!("{title}.md")), content)?;
    }
    Ok(())
}

#[allow(deprecated)]
fn encyclopedia(dir: &Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("encyclopedia")?;
    cmd.current_dir(dir).env_remove("ENCYCLOPEDIA_CONFIG");
    Ok(cmd)
}

#[test]
fn list_prints_sorted_titles() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_config(dir.path())?;
    seed(dir.path(), &[("python", "p"), ("CSS", "c"), ("HTML", "h")])?;

    encyclopedia(dir.path())?
        .arg("list")
        .assert()
        .success()
        .stdout("CSS\nHTML\npython\n");

    let assert = encyclopedia(dir.path())?
        .args(["list", "--json"])
        .assert()
        .success();
    let value: Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value, serde_json::json!(["CSS", "HTML", "python"]));

    Ok(())
}

#[test]
fn search_reports_exact_match_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_config(dir.path())?;
    seed(dir.path(), &[("python", "p"), ("CSS", "c"), ("HTML", "h")])?;

    let assert = encyclopedia(dir.path())?
        .args(["search", "Python", "--json"])
        .assert()
        .success();
    let value: Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value["kind"], "exact_match");
    assert_eq!(value["titles"], "python");

    Ok(())
}

#[test]
fn search_candidates_and_no_match() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_config(dir.path())?;
    seed(dir.path(), &[("CPython", "a"), ("Jython", "b"), ("Rust", "c")])?;

    encyclopedia(dir.path())?
        .args(["search", "YTH"])
        .assert()
        .success()
        .stdout("CPython\nJython\n");

    encyclopedia(dir.path())?
        .args(["search", "haskell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for 'haskell'"));

    Ok(())
}

#[test]
fn new_refuses_to_overwrite() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_config(dir.path())?;

    encyclopedia(dir.path())?
        .args(["new", "Git"])
        .write_stdin("# Git\n")
        .assert()
        .success();

    encyclopedia(dir.path())?
        .args(["new", "Git"])
        .write_stdin("# Other\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(dir.path().join("entries").join("Git.md"))?,
        "# Git\n"
    );

    Ok(())
}

#[test]
fn edit_replaces_and_show_renders() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_config(dir.path())?;
    seed(dir.path(), &[("Git", "# Git\n")])?;

    let source = dir.path().join("git.txt");
    fs::write(&source, "# Git\n\n* fast\n* distributed\nDone\n")?;

    encyclopedia(dir.path())?
        .args(["edit", "Git", "--file"])
        .arg(&source)
        .assert()
        .success();

    encyclopedia(dir.path())?
        .args(["show", "Git"])
        .assert()
        .success()
        .stdout("<h1>Git</h1><ul><li>fast</li><li>distributed</li></ul><p>Done</p>\n");

    encyclopedia(dir.path())?
        .args(["show", "Git", "--format", "raw"])
        .assert()
        .success()
        .stdout("# Git\n\n* fast\n* distributed\nDone\n");

    Ok(())
}

#[test]
fn show_missing_entry_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_config(dir.path())?;

    encyclopedia(dir.path())?
        .args(["show", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry 'Nope' not found"));

    Ok(())
}

#[test]
fn invalid_title_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_config(dir.path())?;

    encyclopedia(dir.path())?
        .args(["new", "../escape"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid title"));

    assert!(!dir.path().join("escape.md").exists());

    Ok(())
}

#[test]
fn random_needs_entries() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_config(dir.path())?;

    encyclopedia(dir.path())?.arg("random").assert().failure();

    seed(dir.path(), &[("Only", "x")])?;
    encyclopedia(dir.path())?
        .arg("random")
        .assert()
        .success()
        .stdout("Only\n");

    Ok(())
}

#[test]
fn init_scaffolds_a_usable_encyclopedia() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path().join("wiki");

    encyclopedia(dir.path())?
        .arg("init")
        .arg(&root)
        .assert()
        .success();

    assert!(root.join("encyclopedia.yml").is_file());
    assert!(root.join("entries").join("CSS.md").is_file());

    encyclopedia(&root)?
        .arg("list")
        .assert()
        .success()
        .stdout("CSS\nGit\nHTML\nPython\n");

    Ok(())
}
