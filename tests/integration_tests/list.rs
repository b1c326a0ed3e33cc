use crate::common::{TestRepo, repo, stderr, stdout};
use rstest::rstest;

#[rstest]
fn test_list_single_branch(repo: TestRepo) {
    let output = repo.gbranch_cmd().output().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "\n⭕️ main  Initial commit - \n");
}

#[rstest]
fn test_list_aligns_columns(repo: TestRepo) {
    repo.git(&["branch", "alpha"]);
    repo.commit("Second commit");

    let output = repo.gbranch_cmd().output().unwrap();
    assert_eq!(
        stdout(&output),
        "\n   alpha  Initial commit - \n⭕️ main   Second commit  - \n"
    );
}

#[rstest]
fn test_list_shows_upstream(repo: TestRepo) {
    repo.setup_remote("main");

    let output = repo.gbranch_cmd().output().unwrap();
    assert_eq!(
        stdout(&output),
        "\n⭕️ main  Initial commit - origin/main\n"
    );
}

#[rstest]
fn test_list_truncates_to_terminal_width(repo: TestRepo) {
    repo.setup_remote("main");

    let output = repo.gbranch_cmd().env("COLUMNS", "20").output().unwrap();
    // Upstream dropped first, then the subject cut to fit 19 columns
    assert_eq!(stdout(&output), "\n⭕️ main  Initial - \n");
}

#[rstest]
fn test_list_without_width_does_not_truncate(repo: TestRepo) {
    repo.setup_remote("main");

    let output = repo.gbranch_cmd().env_remove("COLUMNS").output().unwrap();
    assert_eq!(
        stdout(&output),
        "\n⭕️ main  Initial commit - origin/main\n"
    );
}

#[rstest]
fn test_list_marks_worktree_branches(mut repo: TestRepo) {
    repo.add_worktree("feature-wt", "feature");

    let output = repo.gbranch_cmd().output().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    // The worktree's directory name follows the branch name
    assert_eq!(
        stdout(&output),
        "\n+  feature (feature-wt)  Initial commit - \n⭕️ main                  Initial commit - \n"
    );
}

#[rstest]
fn test_list_env_symbol_and_color(repo: TestRepo) {
    let output = repo
        .gbranch_cmd()
        .env("GBRANCH_SYMBOL", "*")
        .env("GBRANCH_FG", "blue")
        .env("CLICOLOR_FORCE", "1")
        .output()
        .unwrap();
    assert_eq!(
        stdout(&output),
        "\n\u{1b}[34m* main  Initial commit - \u{1b}[0m\n"
    );
}

#[rstest]
fn test_list_empty_symbol_uses_default(repo: TestRepo) {
    let output = repo
        .gbranch_cmd()
        .env("GBRANCH_SYMBOL", "")
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "\n⭕️ main  Initial commit - \n");
}

#[rstest]
fn test_list_unknown_color_falls_back_to_red(repo: TestRepo) {
    let output = repo
        .gbranch_cmd()
        .env("GBRANCH_FG", "chartreuse")
        .env("CLICOLOR_FORCE", "1")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\n\u{1b}[31m⭕️ main  Initial commit - \u{1b}[0m\n"
    );
}

#[rstest]
fn test_list_config_file(repo: TestRepo) {
    let config_path = repo.temp_path().join("config.toml");
    std::fs::write(&config_path, "symbol = \"→\"\nfg = \"hiyellow\"\n").unwrap();

    let output = repo
        .gbranch_cmd()
        .env("GBRANCH_CONFIG_PATH", &config_path)
        .env("CLICOLOR_FORCE", "1")
        .output()
        .unwrap();
    assert_eq!(
        stdout(&output),
        "\n\u{1b}[93m→ main  Initial commit - \u{1b}[0m\n"
    );
}

#[rstest]
fn test_list_env_overrides_config_file(repo: TestRepo) {
    let config_path = repo.temp_path().join("config.toml");
    std::fs::write(&config_path, "symbol = \"→\"\n").unwrap();

    let output = repo
        .gbranch_cmd()
        .env("GBRANCH_CONFIG_PATH", &config_path)
        .env("GBRANCH_SYMBOL", "@")
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "\n@ main  Initial commit - \n");
}

#[rstest]
fn test_list_malformed_config_file(repo: TestRepo) {
    let config_path = repo.temp_path().join("config.toml");
    std::fs::write(&config_path, "symbol = [unterminated\n").unwrap();

    let output = repo
        .gbranch_cmd()
        .env("GBRANCH_CONFIG_PATH", &config_path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Failed to load config"));
}

#[test]
fn test_list_empty_repository() {
    let repo = TestRepo::new();
    let output = repo.gbranch_cmd().output().unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "\n");
}

#[rstest]
fn test_list_outside_repository(repo: TestRepo) {
    let outside = repo.temp_path().join("outside");
    std::fs::create_dir(&outside).unwrap();

    let output = repo
        .gbranch_cmd()
        .current_dir(&outside)
        .env("GIT_CEILING_DIRECTORIES", repo.temp_path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("Failed to list branches"), "{err}");
    assert!(err.contains("not a git repository"), "{err}");
}

#[rstest]
fn test_list_debug_logging(repo: TestRepo) {
    let output = repo
        .gbranch_cmd()
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\n⭕️ main  Initial commit - \n");
    let err = stderr(&output);
    assert!(err.contains("git branch -vv"), "{err}");
    assert!(err.contains("[gbranch-trace]"), "{err}");
}
