//! Column layout for the branch listing
//!
//! Widths need the whole batch (every column is as wide as its widest entry),
//! while truncation is per row, after the other columns are fixed.

use gbranch::git::BranchRecord;
use gbranch::styling::{StyledLine, chop_to_width, display_width, fit_to_width, pad_right};

/// Subjects longer than this are chopped before measuring.
pub const MAX_SUBJECT_WIDTH: usize = 70;

/// Column budget for the current-branch marker, whatever glyph is configured.
///
/// Emoji markers measure inconsistently across terminals, so the column is
/// sized for a two-column glyph rather than the glyph's measured width.
const CURRENT_MARKER_WIDTH: usize = 2;

const MARKER_GAP: &str = " ";
const NAME_GAP: &str = "  ";
const UPSTREAM_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub marker: usize,
    pub name: usize,
    pub subject: usize,
}

fn marker_width(record: &BranchRecord) -> usize {
    match (record.is_current, record.marker.is_empty()) {
        (_, true) => 0,
        (true, false) => CURRENT_MARKER_WIDTH,
        (false, false) => display_width(&record.marker),
    }
}

pub fn calculate_column_widths(records: &[BranchRecord]) -> ColumnWidths {
    records
        .iter()
        .fold(ColumnWidths::default(), |widths, record| ColumnWidths {
            marker: widths.marker.max(marker_width(record)),
            name: widths.name.max(display_width(&record.display_name())),
            subject: widths
                .subject
                .max(display_width(chop_to_width(&record.subject, MAX_SUBJECT_WIDTH))),
        })
}

/// One branch with every field padded to its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRow {
    pub is_current: bool,
    pub marker: String,
    pub name: String,
    pub subject: String,
    pub upstream: String,
}

impl BranchRow {
    fn new(record: &BranchRecord, widths: &ColumnWidths) -> Self {
        let padding = widths.marker.saturating_sub(marker_width(record));
        let mut marker = record.marker.clone();
        marker.extend(std::iter::repeat_n(' ', padding));

        Self {
            is_current: record.is_current,
            marker,
            name: pad_right(&record.display_name(), widths.name),
            subject: fit_to_width(&record.subject, widths.subject),
            upstream: record.upstream.clone(),
        }
    }

    pub fn width(&self) -> usize {
        self.to_line().width()
    }

    /// Shrink to `max_width`: the upstream goes first, then the subject.
    ///
    /// Marker and name are never shortened, so a row can stay wider than
    /// `max_width` when those alone don't fit.
    fn truncate_to(&mut self, max_width: usize) {
        let excess = self.width().saturating_sub(max_width);
        if excess == 0 {
            return;
        }
        let upstream_width = display_width(&self.upstream);
        if upstream_width > 0 {
            self.upstream =
                chop_to_width(&self.upstream, upstream_width.saturating_sub(excess)).to_string();
        }

        let excess = self.width().saturating_sub(max_width);
        if excess > 0 {
            let subject_width = display_width(&self.subject);
            self.subject =
                chop_to_width(&self.subject, subject_width.saturating_sub(excess)).to_string();
        }
    }

    pub fn to_line(&self) -> StyledLine {
        let mut line = StyledLine::new();
        line.push_raw(self.marker.as_str());
        line.push_raw(MARKER_GAP);
        line.push_raw(self.name.as_str());
        line.push_raw(NAME_GAP);
        line.push_raw(self.subject.as_str());
        line.push_raw(UPSTREAM_SEPARATOR);
        line.push_raw(self.upstream.as_str());
        line
    }
}

/// Lay out all records, in input order.
///
/// With a known terminal width, rows are kept one column short of it so the
/// cursor never wraps. `None` or `Some(0)` disables truncation.
pub fn layout_rows(records: &[BranchRecord], terminal_width: Option<usize>) -> Vec<BranchRow> {
    let widths = calculate_column_widths(records);
    let max_width = terminal_width
        .filter(|&width| width > 0)
        .map(|width| width - 1);

    records
        .iter()
        .map(|record| {
            let mut row = BranchRow::new(record, &widths);
            if let Some(max_width) = max_width {
                row.truncate_to(max_width);
            }
            row
        })
        .collect()
}
