//! Terminal output: width model, styled lines and highlight colors.
//!
//! This module uses the anstyle ecosystem:
//! - anstream for auto-detecting color support
//! - anstyle for composable styling
//!
//! ## stdout vs stderr principle
//!
//! - **stdout**: the formatted listing, or `git branch` output in passthrough mode
//! - **stderr**: errors and debug logging
//!
//! Use `println!` for the listing, `eprintln!` for everything else.

mod constants;
mod line;
mod palette;
mod width;

// Re-exports from anstream (auto-detecting output)
pub use anstream::{eprint, eprintln, print, println};

pub use constants::*;
pub use line::{StyledLine, StyledString};
pub use palette::HighlightColor;
pub use width::{chop_to_width, display_width, fit_to_width, pad_right};

/// Get the terminal width, or `None` when it can't be determined.
///
/// Prefers direct terminal size detection on stdout (where the listing goes),
/// then the `COLUMNS` environment variable. `None` means no width constraint:
/// callers skip truncation and let the consumer handle long lines.
pub fn terminal_width() -> Option<usize> {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size_of(std::io::stdout())
        && w > 0
    {
        return Some(usize::from(w));
    }

    parse_columns(std::env::var("COLUMNS").ok().as_deref())
}

fn parse_columns(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|&width| width > 0)
}
