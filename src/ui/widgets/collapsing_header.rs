//! Collapsing app-bar layout: a large header that shrinks into a compact
//! toolbar as the content list below it scrolls.
//!
//! The widget owns no state across frames; the caller keeps a
//! [`CollapsingHeaderState`] alive for as long as the screen exists and the
//! scroll chain in [`crate::scroll`] drives it. The content `ScrollArea` has
//! its own input handling disabled and gets its offset imposed every frame,
//! so the routing chain is the single source of truth for both the band and
//! the list — they cannot drift apart within one event.

use eframe::egui::{
    self, Align, Button, FontId, Label, Layout, Pos2, Rect, RichText, Sense, UiBuilder, Vec2,
    text::{LayoutJob, TextFormat, TextWrapping},
};

use crate::scroll::{self, CollapseState, ListState};
use crate::ui::theme::{self, Theme, layout};

// ── Configuration ──────────────────────────────────────────────────────────────

/// Header geometry: the one configuration knob for the band's appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    /// Height of the persistent compact toolbar.
    pub toolbar_height: f32,
    /// Height of the fully-expanded header.
    pub expanded_height: f32,
}

impl HeaderStyle {
    /// Tall expanded header with a prominent large title.
    pub fn large() -> Self {
        Self {
            toolbar_height: layout::TOOLBAR_HEIGHT,
            expanded_height: layout::HEADER_EXPANDED_HEIGHT,
        }
    }

    /// Shorter expanded header for secondary screens.
    pub fn medium() -> Self {
        Self {
            toolbar_height: layout::TOOLBAR_HEIGHT,
            expanded_height: layout::HEADER_MEDIUM_HEIGHT,
        }
    }

    /// Scroll distance over which the header transitions, in points.
    pub fn collapse_distance(&self) -> f32 {
        (self.expanded_height - self.toolbar_height).max(0.0)
    }
}

impl Default for HeaderStyle {
    fn default() -> Self {
        HeaderStyle::large()
    }
}

// ── Caller-owned state ─────────────────────────────────────────────────────────

/// Per-screen scroll state. Create one per header instance and keep it for
/// the lifetime of the screen; a fresh state starts fully expanded.
#[derive(Debug, Clone, Copy)]
pub struct CollapsingHeaderState {
    collapse: CollapseState,
    list: ListState,
}

impl CollapsingHeaderState {
    pub fn new(style: HeaderStyle) -> Self {
        Self {
            collapse: CollapseState::new(style.collapse_distance()),
            list: ListState::default(),
        }
    }

    /// Normalised collapse progress: 0 = expanded, 1 = collapsed.
    pub fn fraction(&self) -> f32 {
        self.collapse.fraction()
    }

    /// The content list's own scroll position in points.
    pub fn list_offset(&self) -> f32 {
        self.list.offset()
    }
}

impl Default for CollapsingHeaderState {
    fn default() -> Self {
        CollapsingHeaderState::new(HeaderStyle::default())
    }
}

// ── Widget ─────────────────────────────────────────────────────────────────────

/// What happened during this frame's [`CollapsingHeader::show`] call.
#[derive(Debug, Clone, Copy)]
pub struct HeaderResponse {
    /// The back button was activated this frame (once per discrete click).
    pub back_clicked: bool,
    /// Collapse progress after routing this frame's scroll input.
    pub collapse_fraction: f32,
}

/// The collapsing app-bar layout.
///
/// ```no_run
/// # use prefkit::{CollapsingHeader, CollapsingHeaderState, PreferenceRow, Theme};
/// # fn demo(ui: &mut egui::Ui, state: &mut CollapsingHeaderState, theme: &Theme) {
/// let response = CollapsingHeader::new("Settings").show(ui, theme, state, |ui| {
///     PreferenceRow::new("About").show(ui, theme);
/// });
/// if response.back_clicked {
///     // leave the screen
/// }
/// # }
/// ```
pub struct CollapsingHeader<'a> {
    title: &'a str,
    style: HeaderStyle,
}

impl<'a> CollapsingHeader<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            style: HeaderStyle::default(),
        }
    }

    pub fn style(mut self, style: HeaderStyle) -> Self {
        self.style = style;
        self
    }

    /// Render the header band and the content list, routing this frame's
    /// scroll input through the collapse chain first.
    pub fn show(
        self,
        ui: &mut egui::Ui,
        theme: &Theme,
        state: &mut CollapsingHeaderState,
        content: impl FnOnce(&mut egui::Ui),
    ) -> HeaderResponse {
        let outer = ui.available_rect_before_wrap();

        // Consume wheel input only while the pointer is over this component,
        // and route it before any drawing so band and list move in lockstep.
        let delta = if ui.rect_contains_pointer(outer) {
            ui.input(|i| i.raw_scroll_delta.y)
        } else {
            0.0
        };
        scroll::route_scroll(&mut state.collapse, &mut state.list, delta);

        let fraction = state.collapse.fraction();
        let band_height = egui::lerp(
            self.style.expanded_height..=self.style.toolbar_height,
            fraction,
        );

        // ── Header band ────────────────────────────────────────────────────
        let (band_rect, _) =
            ui.allocate_exact_size(Vec2::new(outer.width(), band_height), Sense::hover());
        ui.painter().rect_filled(
            band_rect,
            egui::CornerRadius::ZERO,
            theme::mix(theme.surface, theme.surface_variant, fraction),
        );

        let (large_alpha, compact_alpha) = title_alphas(fraction);

        // Toolbar row: back button plus the compact title fading in.
        let toolbar_rect = Rect::from_min_size(
            band_rect.min,
            Vec2::new(band_rect.width(), self.style.toolbar_height),
        );
        let mut bar = ui.new_child(
            UiBuilder::new()
                .max_rect(toolbar_rect.shrink2(Vec2::new(layout::ROW_HORIZONTAL_PADDING, 0.0)))
                .layout(Layout::left_to_right(Align::Center)),
        );
        let back = bar
            .add(
                Button::new(
                    RichText::new("←")
                        .size(layout::TITLE_FONT_SIZE)
                        .color(theme.text_primary),
                )
                .frame(false),
            )
            .on_hover_text(theme.labels.back_button.as_str());
        if compact_alpha > 0.0 {
            bar.add_space(8.0);
            bar.add(
                Label::new(
                    RichText::new(self.title)
                        .size(layout::TITLE_FONT_SIZE)
                        .color(theme::faded(theme.text_primary, compact_alpha)),
                )
                .truncate()
                .selectable(false),
            );
        }

        // Large title anchored to the bottom of the band, fading out.
        if large_alpha > 0.0 {
            let mut job = LayoutJob::single_section(
                self.title.to_owned(),
                TextFormat {
                    font_id: FontId::proportional(layout::LARGE_TITLE_FONT_SIZE),
                    color: theme::faded(theme.text_primary, large_alpha),
                    ..Default::default()
                },
            );
            job.wrap = TextWrapping {
                max_rows: 1,
                max_width: band_rect.width() - 2.0 * layout::ROW_HORIZONTAL_PADDING,
                ..Default::default()
            };
            let galley = ui.fonts(|f| f.layout_job(job));
            let pos = Pos2::new(
                band_rect.left() + layout::ROW_HORIZONTAL_PADDING,
                band_rect.bottom() - galley.size().y - 12.0,
            );
            ui.painter().galley(pos, galley, theme.text_primary);
        }

        // ── Content list ───────────────────────────────────────────────────
        let output = egui::ScrollArea::vertical()
            .id_salt((self.title, "collapsing_header_list"))
            .auto_shrink(false)
            .enable_scrolling(false)
            .vertical_scroll_offset(state.list.offset())
            .show(ui, |ui| {
                content(ui);
            });
        // Feed measured extents back so the chain knows the scrollable range
        // on the next event (and re-clamps if the content shrank).
        state
            .list
            .set_extents(output.inner_rect.height(), output.content_size.y);

        HeaderResponse {
            back_clicked: back.clicked(),
            collapse_fraction: fraction,
        }
    }
}

/// Opacity of the large title and of the compact toolbar title for a given
/// collapse fraction. The two are exact inverses.
pub(crate) fn title_alphas(fraction: f32) -> (f32, f32) {
    let f = fraction.clamp(0.0, 1.0);
    (1.0 - f, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_alphas_are_inverse_and_exact_at_endpoints() {
        assert_eq!(title_alphas(0.0), (1.0, 0.0));
        assert_eq!(title_alphas(1.0), (0.0, 1.0));
        let (large, compact) = title_alphas(0.3);
        assert!((large + compact - 1.0).abs() < f32::EPSILON);
        // Out-of-range fractions clamp rather than producing negative opacity.
        assert_eq!(title_alphas(-2.0), (1.0, 0.0));
        assert_eq!(title_alphas(9.0), (0.0, 1.0));
    }

    #[test]
    fn styles_expose_their_collapse_distance() {
        let large = HeaderStyle::large();
        assert_eq!(
            large.collapse_distance(),
            layout::HEADER_EXPANDED_HEIGHT - layout::TOOLBAR_HEIGHT
        );
        assert!(HeaderStyle::medium().collapse_distance() < large.collapse_distance());

        // Degenerate geometry clamps to zero instead of a negative distance.
        let flat = HeaderStyle {
            toolbar_height: 64.0,
            expanded_height: 48.0,
        };
        assert_eq!(flat.collapse_distance(), 0.0);
    }

    #[test]
    fn fresh_state_starts_expanded() {
        let state = CollapsingHeaderState::new(HeaderStyle::large());
        assert_eq!(state.fraction(), 0.0);
        assert_eq!(state.list_offset(), 0.0);
    }
}
