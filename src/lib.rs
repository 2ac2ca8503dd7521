//! Settings-screen widgets for [egui]: a collapsing app-bar layout plus two
//! preference-row widgets, themed through an explicit [`Theme`] value.
//!
//! The components are independent and stateless apart from local UI state:
//! the caller owns all inputs per frame and reads interaction results from
//! the returned responses.
//!
//! * [`CollapsingHeader`] — a header that shrinks and fades into a compact
//!   toolbar as its content list scrolls, driven by an explicit scroll-
//!   routing chain ([`scroll`]) rather than framework dispatch.
//! * [`PreferenceRow`] — title, optional ellipsised summary, optional
//!   decorative slots, animated enabled/disabled treatment.
//! * [`PrimarySwitchRow`] — a pill-shaped title-plus-switch row whose fill
//!   colour encodes the switch value.
//!
//! [egui]: https://github.com/emilk/egui

pub mod error;
pub mod scroll;
pub mod ui;

pub use error::{Error, Result};
pub use ui::theme::{Labels, Theme};
pub use ui::widgets::collapsing_header::{
    CollapsingHeader, CollapsingHeaderState, HeaderResponse, HeaderStyle,
};
pub use ui::widgets::preference_row::PreferenceRow;
pub use ui::widgets::switch_row::PrimarySwitchRow;
