use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn default_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tatoolkit").unwrap();
    cmd.env("TATOOLKIT_DATA_DIR", data_dir.path());
    cmd.env_remove("TATOOLKIT_LOG");
    cmd
}

#[test]
fn test_parse_edit() {
    let dir = TempDir::new().unwrap();
    default_cmd(&dir)
        .args(["parse", "edit", "2", "p/98765432", "e/x@y.com"])
        .assert()
        .success()
        .stdout(contains("Edit person 2: phone=98765432, email=x@y.com"));
}

#[test]
fn test_parse_mark_json() {
    let dir = TempDir::new().unwrap();
    default_cmd(&dir)
        .args(["parse", "--json", "mark", "w/1", "pr/1,2", "ab/3"])
        .assert()
        .success()
        .stdout(contains(
            r#"{"command":"mark","week":1,"present":[1,2],"absent":[3]}"#,
        ));
}

#[test]
fn test_parse_failure_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    default_cmd(&dir)
        .args(["parse", "mark", "w/1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("Invalid command format!"))
        .stderr(contains("Example: mark w/1 pr/1,2 ab/3"));

    default_cmd(&dir)
        .args(["parse", "edit", "1", "p/91234567", "p/98765432"])
        .assert()
        .failure()
        .stderr(contains("single-valued field(s): p/"));

    default_cmd(&dir)
        .args(["parse", "view", "0"])
        .assert()
        .failure()
        .stderr(contains("not a valid person index"));
}

#[test]
fn test_repl_reads_until_exit() {
    let dir = TempDir::new().unwrap();
    default_cmd(&dir)
        .arg("repl")
        .write_stdin("view 3\ndeletenote 1 i/2,4\nfrobnicate\nexit\nview 9\n")
        .assert()
        .success()
        .stdout(contains("View person 3"))
        .stdout(contains("Delete notes 2, 4 of person 1"))
        .stdout(contains("unknown command 'frobnicate'"))
        .stdout(contains("View person 9").not());
}

#[test]
fn test_logs_are_written_under_data_dir() {
    let dir = TempDir::new().unwrap();
    default_cmd(&dir)
        .args(["--log-level", "debug", "parse", "view", "1"])
        .assert()
        .success();

    let log_dir = dir.path().join("logs");
    let contents: String = std::fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect();
    assert!(contents.contains("event=app_start"), "log files: {contents:?}");
    assert!(
        contents.contains("event=parse_command module=parser status=ok command=view"),
        "log files: {contents:?}"
    );
}

#[test]
fn test_parse_continues_when_log_dir_is_unusable() {
    let dir = TempDir::new().unwrap();
    let not_a_dir = dir.path().join("data");
    std::fs::write(&not_a_dir, "").unwrap();

    Command::cargo_bin("tatoolkit")
        .unwrap()
        .env("TATOOLKIT_DATA_DIR", &not_a_dir)
        .env_remove("TATOOLKIT_LOG")
        .args(["parse", "view", "1"])
        .assert()
        .success()
        .stdout(contains("View person 1"))
        .stderr(contains("warning: logging disabled"));
}
