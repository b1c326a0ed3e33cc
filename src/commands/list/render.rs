//! Presentation of laid-out rows

use gbranch::config::DisplayConfig;
use gbranch::styling::{HighlightColor, StyledLine};

use super::layout::BranchRow;

/// Color the whole line of the checked-out branch; other lines pass through.
pub fn highlight(line: StyledLine, is_current: bool, color: HighlightColor) -> StyledLine {
    if is_current {
        line.restyled(color.style())
    } else {
        line
    }
}

pub fn render_rows(rows: &[BranchRow], display: &DisplayConfig) -> Vec<String> {
    rows.iter()
        .map(|row| highlight(row.to_line(), row.is_current, display.highlight).render())
        .collect()
}
