//! Message symbols for status output
//!
//! Built with `cstr!` so the escapes are part of the `&'static str`;
//! anstream strips them when stderr isn't a terminal.

use color_print::cstr;

/// Error symbol (red ✗)
pub const ERROR_EMOJI: &str = cstr!("<red>✗</>");

/// Hint symbol (dim ↳)
pub const HINT_EMOJI: &str = cstr!("<dim>↳</>");
