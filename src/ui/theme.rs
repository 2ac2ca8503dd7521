//! Explicit theme and label configuration shared by every widget.
//!
//! Nothing here is ambient: widgets take a [`Theme`] reference at `show`
//! time, and the back-button accessibility label travels inside
//! [`Labels`] instead of being looked up from a localisation context.
//! Presets can be overridden wholesale from a JSON file.

use eframe::egui::{Color32, Rgba};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ── Palette ────────────────────────────────────────────────────────────────────

/// Two-tone surface palette plus accent/muted pairs and text tones.
///
/// `surface` and `surface_variant` are the endpoints of the collapsing
/// header's background interpolation. `accent`/`muted` are the two-colour
/// lookup for the switch row's pill and switch control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub surface: Color32,
    pub surface_variant: Color32,
    pub accent: Color32,
    pub on_accent: Color32,
    pub muted: Color32,
    pub on_muted: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub labels: Labels,
}

/// User-facing strings that would otherwise come from a localisation lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    /// Accessibility label for the header's back button.
    pub back_button: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            back_button: "Navigate back".to_owned(),
        }
    }
}

static DARK: Lazy<Theme> = Lazy::new(|| Theme {
    surface: Color32::from_rgb(0x12, 0x14, 0x18),
    surface_variant: Color32::from_rgb(0x1E, 0x22, 0x28),
    accent: Color32::from_rgb(49, 130, 189),
    on_accent: Color32::WHITE,
    muted: Color32::from_rgb(0x3A, 0x40, 0x48),
    on_muted: Color32::from_rgb(0xC9, 0xCE, 0xD6),
    text_primary: Color32::from_rgb(0xF5, 0xF5, 0xF7),
    text_secondary: Color32::from_rgb(0x86, 0x86, 0x8B),
    labels: Labels::default(),
});

static LIGHT: Lazy<Theme> = Lazy::new(|| Theme {
    surface: Color32::from_rgb(0xFB, 0xFB, 0xFD),
    surface_variant: Color32::from_rgb(0xE8, 0xEC, 0xF2),
    accent: Color32::from_rgb(33, 113, 181),
    on_accent: Color32::WHITE,
    muted: Color32::from_rgb(0xD3, 0xD9, 0xE0),
    on_muted: Color32::from_rgb(0x2A, 0x30, 0x38),
    text_primary: Color32::from_rgb(0x1B, 0x1D, 0x22),
    text_secondary: Color32::from_rgb(0x5C, 0x61, 0x6B),
    labels: Labels::default(),
});

impl Theme {
    /// Built-in dark preset.
    pub fn dark() -> Theme {
        DARK.clone()
    }

    /// Built-in light preset.
    pub fn light() -> Theme {
        LIGHT.clone()
    }

    /// Load a theme override from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::error::Result<Theme> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let theme: Theme = serde_json::from_str(&text)?;
        log::debug!("loaded theme from {}", path.display());
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

// ── Colour helpers ─────────────────────────────────────────────────────────────

/// Linear interpolation between two colours in Rgba space, `t` clamped to
/// `[0, 1]`. Endpoints are returned exactly (no round-trip drift).
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    Color32::from(eframe::egui::lerp(Rgba::from(a)..=Rgba::from(b), t))
}

/// Multiply a colour's opacity by `alpha` (clamped to `[0, 1]`).
pub fn faded(color: Color32, alpha: f32) -> Color32 {
    color.gamma_multiply(alpha.clamp(0.0, 1.0))
}

// ── Shared layout constants ────────────────────────────────────────────────────

/// Widget geometry in logical points.
pub mod layout {
    /// Minimum preference-row content height with no summary line.
    pub const ROW_MIN_HEIGHT: f32 = 56.0;
    /// Horizontal content padding inside rows.
    pub const ROW_HORIZONTAL_PADDING: f32 = 16.0;
    /// Vertical padding added to a row exactly when a summary is present;
    /// subtracted from the min-height budget so the text drives the growth.
    pub const ROW_VERTICAL_PADDING: f32 = 8.0;
    /// Square box reserved for a leading slot.
    pub const SLOT_SIZE: f32 = 48.0;
    /// Gap between the leading slot and the text block.
    pub const SLOT_GAP: f32 = 16.0;
    /// Gap between the text block and a trailing slot.
    pub const TRAILING_GAP: f32 = 8.0;

    /// Corner radius of the switch row's pill.
    pub const PILL_CORNER_RADIUS: u8 = 28;
    /// Minimum content height of the switch row's pill.
    pub const PILL_MIN_HEIGHT: f32 = 64.0;

    /// Height of the persistent compact toolbar.
    pub const TOOLBAR_HEIGHT: f32 = 64.0;
    /// Fully-expanded header height of [`HeaderStyle::large`](crate::ui::widgets::collapsing_header::HeaderStyle::large).
    pub const HEADER_EXPANDED_HEIGHT: f32 = 152.0;
    /// Fully-expanded header height of [`HeaderStyle::medium`](crate::ui::widgets::collapsing_header::HeaderStyle::medium).
    pub const HEADER_MEDIUM_HEIGHT: f32 = 112.0;

    pub const TITLE_FONT_SIZE: f32 = 20.0;
    pub const LARGE_TITLE_FONT_SIZE: f32 = 28.0;
    pub const SUMMARY_FONT_SIZE: f32 = 14.0;

    /// Duration of the enabled/disabled opacity fade.
    pub const ENABLE_FADE_SECS: f32 = 0.25;
    /// Row opacity when disabled.
    pub const DISABLED_ALPHA: f32 = 0.5;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn mix_returns_exact_endpoints() {
        let a = Color32::from_rgb(0x12, 0x14, 0x18);
        let b = Color32::from_rgb(0x1E, 0x22, 0x28);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        // Out-of-range factors clamp instead of extrapolating.
        assert_eq!(mix(a, b, -3.0), a);
        assert_eq!(mix(a, b, 7.5), b);
    }

    #[test]
    fn mix_midpoint_lands_between_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        let m = mix(a, b, 0.5);
        assert!(m.r() > 0 && m.r() < 200);
        assert!(m.g() > 0 && m.g() < 100);
        assert!(m.b() > 0 && m.b() < 50);
    }

    #[test]
    fn faded_scales_opacity() {
        let c = Color32::from_rgb(10, 20, 30);
        assert_eq!(faded(c, 1.0), c);
        assert_eq!(faded(c, 0.0).a(), 0);
        assert!(faded(c, 0.5).a() < c.a());
    }

    #[test]
    fn theme_json_round_trip() {
        let theme = Theme::dark();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn theme_loads_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::light();
        theme.labels.back_button = "Zurück".to_owned();
        write!(file, "{}", serde_json::to_string(&theme).unwrap()).unwrap();

        let loaded = Theme::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, theme);
    }

    #[test]
    fn missing_theme_file_reports_io_error() {
        let err = Theme::from_json_file("/nonexistent/theme.json").unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
