//! Aligned, width-aware rendering of `git branch -vv`.
//!
//! The library holds the pieces that don't depend on the CLI: the branch-line
//! parser, the display-width model, the highlight palette and the config layer.
//! The `gbranch` binary composes them into the column layout.

pub mod config;
pub mod git;
pub mod shell_exec;
pub mod styling;
