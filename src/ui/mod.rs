//! UI layer: theme configuration and the widget set.

pub mod theme;
pub mod widgets;
