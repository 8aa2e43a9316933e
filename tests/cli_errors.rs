mod common;
use assert_fs::prelude::*;
use common::codingame_fs;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn missing_base_dir_fails_with_path() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("codingame-bundle")
        .current_dir(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("src/main/java").and(contains("board")));

    dir.child("target").assert(predicate::path::missing());
}

#[test]
fn malformed_source_names_the_file() {
    let td = codingame_fs();
    td.child("src/main/java/board/Empty.java")
        .write_str("package board;\n\nimport java.util.*;\n")
        .unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("codingame-bundle")
        .current_dir(&td)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Empty.java"))
        .stderr(contains("no declaration found"));

    td.child("target").assert(predicate::path::missing());
}

#[test]
fn unparsable_config_fails() {
    let td = codingame_fs();
    td.child("bad.toml").write_str("folders = board\n").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("codingame-bundle")
        .current_dir(&td)
        .args(["--config", "bad.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("bad.toml"));
}

#[test]
fn stdout_conflicts_with_list() {
    let td = codingame_fs();

    assert_cmd::cargo::cargo_bin_cmd!("codingame-bundle")
        .current_dir(&td)
        .args(["--stdout", "--list"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn output_parent_blocked_by_file_fails() {
    let td = codingame_fs();
    td.child("target").write_str("not a directory").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("codingame-bundle")
        .current_dir(&td)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to create directory"))
        .stderr(contains("codingame"));
}

#[test]
fn output_path_that_is_a_directory_fails() {
    let td = codingame_fs();
    td.child("target/codingame/Player.java")
        .create_dir_all()
        .unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("codingame-bundle")
        .current_dir(&td)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to write"))
        .stderr(contains("Player.java"));
}
