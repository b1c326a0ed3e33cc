use crate::common::{TestRepo, repo, stderr, stdout};
use rstest::rstest;

#[rstest]
fn test_passthrough_prints_git_stdout(repo: TestRepo) {
    let output = repo.gbranch_cmd().arg("--show-current").output().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "main\n");
}

#[rstest]
fn test_passthrough_bypasses_formatting(repo: TestRepo) {
    repo.git(&["branch", "alpha"]);

    let output = repo.gbranch_cmd().arg("--list").output().unwrap();
    // git's own output, without the listing's blank line or marker substitution
    assert_eq!(stdout(&output), "  alpha\n* main\n");
}

#[rstest]
fn test_passthrough_creates_branch(repo: TestRepo) {
    let output = repo.gbranch_cmd().arg("topic").output().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let listing = repo.git(&["branch", "--list", "topic"]);
    assert_eq!(stdout(&listing), "  topic\n");
}

#[rstest]
fn test_passthrough_failure_forwards_stderr(repo: TestRepo) {
    let output = repo
        .gbranch_cmd()
        .args(["-d", "no-such-branch"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("no-such-branch"), "{err}");
    assert!(err.contains("git branch -d no-such-branch exited with status 1"), "{err}");
}

#[rstest]
fn test_passthrough_preserves_exit_code(repo: TestRepo) {
    let output = repo
        .gbranch_cmd()
        .arg("--no-such-option")
        .output()
        .unwrap();
    // git reports usage errors with 129
    assert_eq!(output.status.code(), Some(129));
}

#[rstest]
fn test_short_help_goes_to_git(repo: TestRepo) {
    let output = repo.gbranch_cmd().arg("-h").output().unwrap();
    // `git branch -h` prints its usage and exits 129; older git writes the
    // usage to stderr, newer git to stdout
    assert_eq!(output.status.code(), Some(129));
    let combined = format!("{}{}", stdout(&output), stderr(&output));
    assert!(combined.contains("usage: git branch"), "{combined}");
    assert!(combined.contains("git branch -h exited with status 129"), "{combined}");
}

#[rstest]
fn test_long_help(repo: TestRepo) {
    let output = repo.gbranch_cmd().arg("--help").output().unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Usage: gbranch"), "{out}");
    assert!(out.contains("GBRANCH_SYMBOL"), "{out}");
}

#[rstest]
fn test_long_version(repo: TestRepo) {
    let output = repo.gbranch_cmd().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("gbranch {}\n", env!("CARGO_PKG_VERSION"))
    );
}
