use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

use common::command::{dit_commit, init_repository_dir, repository_dir, run_dit_command};
use common::file::{FileSpec, write_file};

#[rstest]
fn log_walks_the_parent_chain_newest_first(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("4.txt"), "four".to_string()));
    run_dit_command(dir.path(), &["add", "4.txt"])
        .assert()
        .success();
    dit_commit(dir.path(), "Second commit").assert().success();

    let output = run_dit_command(dir.path(), &["log"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let second = stdout.find("Second commit").unwrap();
    let first = stdout.find("Initial commit").unwrap();
    assert!(second < first);

    // the tip carries the HEAD decoration
    let tip = common::read_repo_file(dir.path(), "refs/heads/master");
    assert!(stdout.contains(&format!("commit {} (HEAD -> master)", tip)));
}

#[rstest]
fn log_decorates_other_branch_tips(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_dit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    run_dit_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HEAD -> master"))
        .stdout(predicate::str::contains("feature"));
}

#[rstest]
fn log_on_a_branch_without_commits_prints_nothing(repository_dir: TempDir) {
    run_dit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_dit_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn graph_prints_one_line_per_commit(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("4.txt"), "four".to_string()));
    run_dit_command(dir.path(), &["add", "4.txt"])
        .assert()
        .success();
    dit_commit(dir.path(), "Second commit").assert().success();

    run_dit_command(dir.path(), &["graph"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"(?s)\* [0-9a-f]{7} \(HEAD -> master\) Second commit\n\|\n\* [0-9a-f]{7} Initial commit\n",
        )?);

    Ok(())
}
