//! Rendering of the numbered search listing and the selection instructions.

use yapt_core::config::ColorScheme;
use yapt_core::listing::{ParsedLine, SearchListing};

use crate::colors::paint;

/// Arrow printed in front of each instruction line
pub const ARROW: &str = "==>";

const INSTRUCTIONS: [&str; 2] = [
    "Enter # of packages to install (ex: 1 2 3 or 1-3)",
    "-------------------------------------------------",
];

/// Renders a single result line.
///
/// Package lines get their number and name prepended and colored, and an
/// installed marker recolored. Every other line is returned unchanged.
pub fn render_line(line: &ParsedLine, scheme: Option<&ColorScheme>) -> String {
    let Some(segments) = line.segments() else {
        return line.text().to_string();
    };

    let number = segments.number.to_string();
    let mut rendered = format!(
        "{} {}{}",
        paint(&number, scheme.map(|s| &s.number)),
        paint(segments.name, scheme.map(|s| &s.package)),
        segments.between,
    );

    if let Some(marker) = segments.installed {
        rendered.push_str(&paint(marker, scheme.map(|s| &s.installed)).to_string());
    }

    rendered.push_str(segments.tail);
    rendered
}

/// Renders the whole listing, one output line per search line.
pub fn render_listing(listing: &SearchListing, scheme: Option<&ColorScheme>) -> String {
    listing
        .lines()
        .iter()
        .map(|line| render_line(line, scheme))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the two instruction lines shown before reading the selection.
pub fn render_instructions(scheme: Option<&ColorScheme>) -> String {
    INSTRUCTIONS
        .iter()
        .map(|text| format!("{} {}", paint(ARROW, scheme.map(|s| &s.arrow)), text))
        .collect::<Vec<_>>()
        .join("\n")
}
