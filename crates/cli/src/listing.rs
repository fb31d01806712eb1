//! Terminal table for `anchor ls`.

use crossterm::style::{Color, Stylize};
use itertools::Itertools;

use anchor_core::anchor::Anchor;

const KEY_HEADER: &str = "KEY";
const VALUE_HEADER: &str = "VALUE";
const COLUMN_GAP: usize = 2;

/// Colour of the header and every other row
const DIM_COLOR: Color = Color::AnsiValue(245);

/// Formats the header plus one line per anchor, with the key column padded
/// to the widest key.
#[must_use]
pub fn format_rows(anchors: &[Anchor]) -> Vec<String> {
    let key_width = anchors
        .iter()
        .map(|anchor| anchor.key.chars().count())
        .chain(std::iter::once(KEY_HEADER.len()))
        .max()
        .unwrap_or_default()
        + COLUMN_GAP;

    std::iter::once((KEY_HEADER, VALUE_HEADER))
        .chain(
            anchors
                .iter()
                .map(|anchor| (anchor.key.as_str(), anchor.value.as_str())),
        )
        .map(|(key, value)| {
            if value.is_empty() {
                key.to_string()
            } else {
                format!("{key:<key_width$}{value}")
            }
        })
        .collect_vec()
}

/// Prints the anchor count, then the table when there is anything to show.
pub fn print_table(anchors: &[Anchor]) {
    println!("Found {} anchors...", anchors.len());

    if anchors.is_empty() {
        return;
    }

    for (index, row) in format_rows(anchors).into_iter().enumerate() {
        if index % 2 == 0 {
            println!("{}", row.with(DIM_COLOR));
        } else {
            println!("{row}");
        }
    }
}
