//! gbranch error types and formatting
//!
//! - **`GitError`** - typed errors from invoking git. Use `.into()` to convert
//!   to `anyhow::Error` while keeping the type for `downcast_ref`. Display
//!   produces styled output for users.
//!
//! - **`GbranchError`** - errors that need special handling in `main`
//!   (exit codes).

use color_print::{cformat, cwrite};

use crate::styling::{ERROR_EMOJI, HINT_EMOJI};

/// Failures from running git.
///
/// Unparseable listing lines are never errors; only the invocation itself can
/// fail.
#[derive(Debug, Clone)]
pub enum GitError {
    /// git could not be started or its output could not be read
    CommandFailed { command: String, error: String },
    /// `git branch -vv` ran but exited non-zero (e.g. outside a repository)
    ListingFailed { stderr: String },
}

impl std::error::Error for GitError {}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitError::CommandFailed { command, error } => {
                let header = cformat!("{ERROR_EMOJI} <red>Failed to run <bold>{command}</></>");
                write!(f, "{}", format_error_block(header, error))?;
                cwrite!(
                    f,
                    "\n\n{HINT_EMOJI} <dim>Check that git is installed and on PATH</>"
                )
            }
            GitError::ListingFailed { stderr } => {
                let header = cformat!("{ERROR_EMOJI} <red>Failed to list branches</>");
                write!(f, "{}", format_error_block(header, stderr))
            }
        }
    }
}

/// Semantic errors that require special handling in main.rs
#[derive(Debug)]
pub enum GbranchError {
    /// Child process exited with non-zero code; its output was already shown
    ChildProcessExited { code: i32, message: String },
}

impl std::fmt::Display for GbranchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GbranchError::ChildProcessExited { message, .. } => {
                cwrite!(f, "{ERROR_EMOJI} <red>{message}</>")
            }
        }
    }
}

impl std::error::Error for GbranchError {}

/// Extract exit code from GbranchError, if applicable
pub fn exit_code(err: &anyhow::Error) -> Option<i32> {
    err.downcast_ref::<GbranchError>().map(|e| match e {
        GbranchError::ChildProcessExited { code, .. } => *code,
    })
}

fn format_error_block(header: String, error: &str) -> String {
    let trimmed = error.trim();
    if trimmed.is_empty() {
        header
    } else {
        let body: Vec<String> = trimmed.lines().map(|line| format!("  {line}")).collect();
        format!("{header}\n{}", body.join("\n"))
    }
}
