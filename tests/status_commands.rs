use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

mod common;

use common::command::{dit_commit, init_repository_dir, run_dit_command};
use common::file::{FileSpec, write_file};

#[rstest]
fn status_is_clean_right_after_a_commit(init_repository_dir: TempDir) {
    run_dit_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("On branch master"))
        .stdout(predicate::str::contains(
            "nothing to commit, working tree clean",
        ));
}

#[rstest]
fn staged_files_are_listed_as_staged(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("4.txt"), "four".to_string()));
    run_dit_command(dir.path(), &["add", "4.txt"])
        .assert()
        .success();

    run_dit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A  4.txt"));
}

#[rstest]
fn an_edited_committed_file_is_modified_not_untracked(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(
        dir.path().join("1.txt"),
        "one, edited".to_string(),
    ));

    run_dit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" M 1.txt"))
        .stdout(predicate::str::contains("?? 1.txt").not());
}

#[rstest]
fn a_new_unstaged_file_is_untracked(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("notes.txt"), "new".to_string()));

    run_dit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("?? notes.txt"));
}

#[rstest]
fn binary_files_are_tracked_like_any_other_content(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    std::fs::write(
        dir.path().join("logo.png"),
        [0x89, 0x50, 0x4e, 0x47, 0x00, 0xff],
    )
    .unwrap();

    run_dit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("?? logo.png"));

    run_dit_command(dir.path(), &["add", "."])
        .assert()
        .success();
    dit_commit(dir.path(), "Add logo").assert().success();

    run_dit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "nothing to commit, working tree clean",
        ));
}

#[rstest]
fn ignored_files_never_show_up_in_status(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(
        dir.path().join(".ditignore"),
        "*.log\n".to_string(),
    ));
    write_file(FileSpec::new(dir.path().join("debug.log"), "noise".to_string()));

    run_dit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("debug.log").not());
}
