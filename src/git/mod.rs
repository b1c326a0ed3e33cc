//! Git invocation and `git branch -vv` parsing

use std::process::Command;

mod branch;
mod error;

pub use branch::{BranchRecord, parse_branch_listing};
pub use error::{GbranchError, GitError, exit_code};

use crate::shell_exec;

/// Run `git branch -vv` in the current directory and return its stdout.
pub fn list_branches() -> Result<String, GitError> {
    let mut cmd = Command::new("git");
    cmd.args(["branch", "-vv"]);

    let output = shell_exec::run(&mut cmd).map_err(|e| GitError::CommandFailed {
        command: shell_exec::command_string(&cmd),
        error: e.to_string(),
    })?;

    if !output.status.success() {
        return Err(GitError::ListingFailed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
