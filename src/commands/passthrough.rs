//! `gbranch <args>`: hand everything to `git branch` untouched

use std::process::Command;

use gbranch::git::{GbranchError, GitError};
use gbranch::shell_exec;
use gbranch::styling::{eprint, print};

/// Run `git branch <args>` and forward its output.
///
/// Stdout is always printed; some git versions write `-h` usage there and
/// exit non-zero. On failure git's stderr follows and a
/// [`GbranchError::ChildProcessExited`] carries git's exit code back to main.
pub fn handle_passthrough(args: &[String]) -> anyhow::Result<()> {
    let mut cmd = Command::new("git");
    cmd.arg("branch").args(args);

    let output = shell_exec::run(&mut cmd).map_err(|e| GitError::CommandFailed {
        command: shell_exec::command_string(&cmd),
        error: e.to_string(),
    })?;

    print!("{}", String::from_utf8_lossy(&output.stdout));
    if output.status.success() {
        return Ok(());
    }

    eprint!("{}", String::from_utf8_lossy(&output.stderr));
    // Killed by a signal: no code to forward
    let code = output.status.code().unwrap_or(1);
    Err(GbranchError::ChildProcessExited {
        code,
        message: format!(
            "{} exited with status {code}",
            shell_exec::command_string(&cmd)
        ),
    }
    .into())
}
