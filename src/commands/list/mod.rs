mod layout;
mod render;

use gbranch::config::DisplayConfig;
use gbranch::git::{GitError, list_branches, parse_branch_listing};
use gbranch::styling::{println, terminal_width};

use layout::layout_rows;
use render::render_rows;

/// Print the formatted branch listing for the current repository.
///
/// A blank line precedes the listing, including an empty one.
pub fn handle_list(display: &DisplayConfig) -> Result<(), GitError> {
    let output = list_branches()?;
    let records = parse_branch_listing(&output, &display.current_marker);
    log::debug!("Parsed {} branches", records.len());

    let rows = layout_rows(&records, terminal_width());

    println!();
    for line in render_rows(&rows, display) {
        println!("{line}");
    }
    Ok(())
}
