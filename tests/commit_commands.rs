use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

use common::command::{dit_commit, init_repository_dir, repository_dir, run_dit_command};
use common::file::{FileSpec, write_file};

#[rstest]
fn first_commit_carries_the_root_marker(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_dit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    run_dit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    dit_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[master \(root-commit\) [0-9a-f]{7}\] Initial commit\n$",
        )?);

    let tip = common::read_repo_file(repository_dir.path(), "refs/heads/master");
    assert_eq!(tip.len(), 40);
    assert!(tip.chars().all(|c| c.is_ascii_hexdigit()));

    Ok(())
}

#[rstest]
fn second_commit_omits_the_root_marker_and_moves_the_branch(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let first_tip = common::read_repo_file(dir.path(), "refs/heads/master");

    write_file(FileSpec::new(dir.path().join("4.txt"), "four".to_string()));
    run_dit_command(dir.path(), &["add", "4.txt"])
        .assert()
        .success();

    dit_commit(dir.path(), "Second commit")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[master [0-9a-f]{7}\] Second commit\n$",
        )?);

    let second_tip = common::read_repo_file(dir.path(), "refs/heads/master");
    assert_ne!(first_tip, second_tip);

    Ok(())
}

#[rstest]
fn commit_clears_the_staging_index(init_repository_dir: TempDir) {
    assert_eq!(common::read_repo_file(init_repository_dir.path(), "index"), "");
}

#[rstest]
fn committing_an_empty_index_fails(init_repository_dir: TempDir) {
    dit_commit(init_repository_dir.path(), "Nothing here")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to commit"));
}

#[rstest]
fn show_resolves_a_unique_digest_prefix(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let tip = common::read_repo_file(dir.path(), "refs/heads/master");

    run_dit_command(dir.path(), &["show", &tip])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("commit {}", tip)))
        .stdout(predicate::str::contains("new file: 1.txt"))
        .stdout(predicate::str::contains("+one"));

    run_dit_command(dir.path(), &["show", &tip[..7]])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("commit {}", tip)));
}

#[rstest]
fn show_reports_an_unknown_prefix(init_repository_dir: TempDir) {
    run_dit_command(init_repository_dir.path(), &["show", "0000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found: object 0000000"));
}

#[rstest]
fn show_diffs_a_modified_file_against_the_parent(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("1.txt"), "one\ntwo".to_string()));
    run_dit_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    dit_commit(dir.path(), "Extend 1.txt").assert().success();

    let tip = common::read_repo_file(dir.path(), "refs/heads/master");
    run_dit_command(dir.path(), &["show", &tip])
        .assert()
        .success()
        .stdout(predicate::str::contains("modified: 1.txt"))
        .stdout(predicate::str::contains("+two"));
}
