mod support;

use std::fs;

use predicates::str::contains;

use support::{stdout_json, TestDir};

#[test]
fn corrupt_store_degrades_to_empty_list() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_file("tasks.json", "{ this is not valid json")?;

    dir.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("No tasks\n")
        .stderr(contains("warning:"))
        .stderr(contains("backed up to"));

    let backups = dir.backups();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(&backups[0])?, "{ this is not valid json");

    let doc = dir.read_json("tasks.json")?;
    assert_eq!(doc, serde_json::json!({"schema_version": 1, "tasks": []}));

    Ok(())
}

#[test]
fn corrupt_store_reports_warning_in_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_file("tasks.json", "not json at all")?;

    let output = dir.cmd().args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let json = stdout_json(&output)?;
    assert_eq!(json["tasks"], serde_json::json!([]));
    let warnings = json["warnings"].as_array().ok_or("warnings array")?;
    assert_eq!(warnings.len(), 1);

    Ok(())
}

#[test]
fn create_after_corruption_starts_at_one() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_file("tasks.json", r#"{"tasks": [{"id": 9}]}"#)?;

    dir.cmd()
        .args(["create", "--title", "Fresh"])
        .assert()
        .success()
        .stdout("Created [1] Fresh (todo)\n");

    assert_eq!(dir.backups().len(), 1);
    dir.cmd().arg("list").assert().success().stdout("[1] Fresh (todo)\n");

    Ok(())
}

#[test]
fn repeated_corruption_keeps_every_backup() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();

    for round in 0..3 {
        dir.write_file("tasks.json", &format!("broken {round}"))?;
        dir.cmd().arg("list").assert().success();
    }

    assert_eq!(dir.backups().len(), 3);
    Ok(())
}

#[test]
fn invalid_records_are_hidden_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_file(
        "tasks.json",
        r#"{"schema_version": 1, "tasks": [
            {"id": 1, "title": "Keep me", "description": null, "status": "todo"},
            {"id": 2, "title": "  ", "description": null, "status": "todo"}
        ]}"#,
    )?;

    dir.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("[1] Keep me (todo)\n")
        .stderr("");

    // The hidden record still takes part in the document.
    dir.cmd()
        .args(["create", "--title", "Next"])
        .assert()
        .success()
        .stdout("Created [2] Next (todo)\n");
    let doc = dir.read_json("tasks.json")?;
    assert_eq!(doc["tasks"].as_array().map(Vec::len), Some(3));
    assert!(dir.backups().is_empty());

    Ok(())
}
