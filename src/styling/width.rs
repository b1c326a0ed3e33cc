//! Display-width model for branch listings
//!
//! Widths follow a two-class approximation rather than a full East Asian
//! Width table:
//! - combining marks (`Mn`) and format characters (`Cf`, e.g. variation
//!   selectors, ZWJ) are zero columns
//! - printable ASCII is one column
//! - every other character is two columns
//!
//! ASCII control characters count as zero. Ambiguous-width symbols such as
//! `↑` or `●` are counted as two, so a column that contains them is wider
//! than strictly necessary, never narrower.

use std::sync::LazyLock;

use regex::Regex;

static ZERO_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Mn}\p{Cf}]$").unwrap());

fn is_zero_width(ch: char) -> bool {
    let mut buf = [0u8; 4];
    ZERO_WIDTH.is_match(ch.encode_utf8(&mut buf))
}

/// Column width of a single character.
pub fn char_width(ch: char) -> usize {
    if ch.is_ascii() {
        // No ASCII character is Mn or Cf
        return usize::from(matches!(ch, ' '..='~'));
    }
    if is_zero_width(ch) { 0 } else { 2 }
}

/// Column width of a string under the two-class model.
///
/// Escape sequences are not recognized; callers measure plain text and apply
/// styling afterwards.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Append spaces until `s` reaches `target_width` columns.
///
/// Strings already at or beyond the target are returned unchanged.
pub fn pad_right(s: &str, target_width: usize) -> String {
    let width = display_width(s);
    let mut out = String::with_capacity(s.len() + target_width.saturating_sub(width));
    out.push_str(s);
    if width < target_width {
        out.extend(std::iter::repeat_n(' ', target_width - width));
    }
    out
}

/// Longest prefix of `s` whose width does not exceed `max_width`.
///
/// Cuts only on character boundaries. Zero-width characters that precede the
/// cut point stay attached to the prefix.
pub fn chop_to_width(s: &str, max_width: usize) -> &str {
    if max_width == 0 {
        return "";
    }
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        width += char_width(ch);
        if width > max_width {
            return &s[..idx];
        }
    }
    s
}

/// Chop then pad, so the result occupies exactly `width` columns.
///
/// Chopping before a two-column character can leave the prefix one column
/// short; the padding fills that gap.
pub fn fit_to_width(s: &str, width: usize) -> String {
    pad_right(chop_to_width(s, width), width)
}
