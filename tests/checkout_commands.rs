use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

use common::command::{dit_commit, init_repository_dir, run_dit_command};
use common::file::{FileSpec, write_file};

#[rstest]
fn checkout_restores_the_branch_tip_to_the_working_tree(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_dit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_dit_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'feature'"));

    // rewrite a tracked file on feature and commit it there
    write_file(FileSpec::new(
        dir.path().join("1.txt"),
        "feature version".to_string(),
    ));
    run_dit_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    dit_commit(dir.path(), "Rework 1.txt").assert().success();

    run_dit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    let content = std::fs::read_to_string(dir.path().join("1.txt")).unwrap();
    assert_eq!(content, "one");
    assert_eq!(
        common::read_repo_file(dir.path(), "HEAD"),
        "ref: refs/heads/master"
    );
}

#[rstest]
fn checkout_of_a_missing_branch_fails(init_repository_dir: TempDir) {
    run_dit_command(init_repository_dir.path(), &["checkout", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found: branch ghost"));

    // HEAD is untouched on failure
    assert_eq!(
        common::read_repo_file(init_repository_dir.path(), "HEAD"),
        "ref: refs/heads/master"
    );
}

#[rstest]
fn checkout_of_an_empty_branch_only_moves_head(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // manufacture an empty-history branch by clearing its ref file
    std::fs::write(dir.path().join(".dit/refs/heads/scratch"), b"").unwrap();

    run_dit_command(dir.path(), &["checkout", "scratch"])
        .assert()
        .success();
    assert_eq!(
        common::read_repo_file(dir.path(), "HEAD"),
        "ref: refs/heads/scratch"
    );

    let content = std::fs::read_to_string(dir.path().join("1.txt")).unwrap();
    assert_eq!(content, "one");
}
