//! The widget set: collapsing app-bar layout and the two preference rows.

pub mod collapsing_header;
pub mod preference_row;
pub mod switch_row;

use eframe::egui::Sense;

/// Disabled widgets keep hover sensing (tooltips still work) but can never
/// report a click.
pub(crate) fn activation_sense(enabled: bool) -> Sense {
    if enabled { Sense::click() } else { Sense::hover() }
}
