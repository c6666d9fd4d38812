mod support;

use predicates::str::contains;

use support::TestDir;

#[test]
fn file_flag_overrides_default_location() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();

    dir.cmd()
        .args(["--file", "elsewhere/mine.json", "create", "--title", "Moved"])
        .assert()
        .success();

    assert!(!dir.tasks_file().exists());
    let doc = dir.read_json("elsewhere/mine.json")?;
    assert_eq!(doc["tasks"][0]["title"], "Moved");

    Ok(())
}

#[test]
fn tasks_file_env_is_honored() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    let path = dir.path().join("env.json");

    dir.cmd()
        .env("TASKS_FILE", &path)
        .args(["create", "--title", "From env"])
        .assert()
        .success();

    assert!(path.exists());
    assert!(!dir.tasks_file().exists());
    Ok(())
}

#[test]
fn config_file_sets_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_file(
        ".tasks.toml",
        "[storage]\npath = \"store/tasks.json\"\npretty = true\n\n[tasks]\ndefault_status = \"in-progress\"\n",
    )?;

    dir.cmd()
        .args(["create", "--title", "Configured"])
        .assert()
        .success()
        .stdout("Created [1] Configured (in-progress)\n");

    let raw = std::fs::read_to_string(dir.path().join("store/tasks.json"))?;
    assert!(raw.contains('\n'));
    Ok(())
}

#[test]
fn invalid_config_is_a_user_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_file(".tasks.toml", "[tasks]\ndefault_status = \"someday\"\n")?;

    dir.cmd()
        .arg("list")
        .assert()
        .code(1)
        .stderr(contains("Invalid configuration"))
        .stderr(contains("hint: fix .tasks.toml"));

    Ok(())
}

#[test]
fn explicit_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    let config = dir.write_file("conf/custom.toml", "[tasks]\ndefault_status = \"done\"\n")?;

    dir.cmd()
        .arg("--config")
        .arg(&config)
        .args(["create", "--title", "Already"])
        .assert()
        .success()
        .stdout("Created [1] Already (done)\n");

    Ok(())
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = TestDir::new();

    dir.cmd()
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stdout("No tasks\n")
        .stderr(contains("creating empty task file"));
}
