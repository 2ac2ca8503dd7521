//! A pill-shaped row combining a title and a binary switch, with accent
//! colouring that encodes the current value.

use eframe::egui::{
    self, Align, Color32, CornerRadius, Frame, Label, Layout, Margin, Pos2, RichText, Vec2,
    WidgetInfo, WidgetType,
};

use crate::ui::theme::{Theme, layout};
use crate::ui::widgets::activation_sense;

/// The prominent on/off row at the top of a settings screen.
///
/// The caller owns the source of truth: both activation paths — a tap
/// anywhere in the pill, or direct manipulation of the switch — flip the
/// same `&mut bool` exactly once, so they always agree on the resulting
/// value. `response.changed()` reports a flip from either path.
pub struct PrimarySwitchRow<'a> {
    title: &'a str,
    checked: &'a mut bool,
    enabled: bool,
}

impl<'a> PrimarySwitchRow<'a> {
    pub fn new(title: &'a str, checked: &'a mut bool) -> Self {
        Self {
            title,
            checked,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(self, ui: &mut egui::Ui, theme: &Theme) -> egui::Response {
        let title = self.title;
        let enabled = self.enabled;
        let checked = self.checked;

        let fill = pill_fill(*checked, theme);
        let text_color = if *checked {
            theme.on_accent
        } else {
            theme.on_muted
        };

        let mut switch_changed = false;
        let inner = Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(layout::PILL_CORNER_RADIUS))
            .outer_margin(Margin::symmetric(
                layout::ROW_HORIZONTAL_PADDING as i8,
                layout::ROW_VERTICAL_PADDING as i8,
            ))
            .inner_margin(Margin::symmetric((layout::PILL_CORNER_RADIUS / 2) as i8, 8))
            .show(ui, |ui| {
                let fade = ui.ctx().animate_bool_with_time(
                    ui.id().with("enabled_fade"),
                    enabled,
                    layout::ENABLE_FADE_SECS,
                );
                ui.set_opacity(egui::lerp(layout::DISABLED_ALPHA..=1.0, fade));

                let width = ui.available_width();
                ui.allocate_ui_with_layout(
                    Vec2::new(width, layout::PILL_MIN_HEIGHT),
                    Layout::right_to_left(Align::Center),
                    |ui| {
                        switch_changed = switch(ui, &mut *checked, enabled, theme).changed();
                        ui.add_space(layout::TRAILING_GAP);
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.add(
                                Label::new(
                                    RichText::new(title)
                                        .size(layout::TITLE_FONT_SIZE)
                                        .color(text_color),
                                )
                                .truncate()
                                .selectable(false),
                            );
                        });
                    },
                );
            });

        let mut response = inner.response.interact(activation_sense(enabled));
        // A click that landed on the switch already flipped the value; the
        // row path must not flip it back.
        if response.clicked() && !switch_changed {
            *checked = !*checked;
            response.mark_changed();
        } else if switch_changed {
            response.mark_changed();
        }
        response.widget_info(|| WidgetInfo::selected(WidgetType::Checkbox, enabled, *checked, title));
        response
    }
}

/// Pill fill: a discrete two-colour lookup, no interpolation.
pub(crate) fn pill_fill(checked: bool, theme: &Theme) -> Color32 {
    if checked { theme.accent } else { theme.muted }
}

/// Switch track/thumb pair for the current value.
pub(crate) fn switch_palette(checked: bool, theme: &Theme) -> (Color32, Color32) {
    if checked {
        (theme.on_accent, theme.accent)
    } else {
        (theme.on_muted, theme.muted)
    }
}

/// Hand-painted binary switch. Flips `on` and marks the response changed
/// when clicked; hover-only while disabled.
fn switch(ui: &mut egui::Ui, on: &mut bool, enabled: bool, theme: &Theme) -> egui::Response {
    let desired = Vec2::new(2.0, 1.0) * ui.spacing().interact_size.y;
    let (rect, mut response) = ui.allocate_exact_size(desired, activation_sense(enabled));
    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        let (track, thumb) = switch_palette(*on, theme);
        let radius = rect.height() / 2.0;
        ui.painter()
            .rect_filled(rect, CornerRadius::same(radius as u8), track);
        // Thumb snaps between the two ends; the value is discrete, so is
        // the position.
        let cx = if *on {
            rect.right() - radius
        } else {
            rect.left() + radius
        };
        ui.painter()
            .circle_filled(Pos2::new(cx, rect.center().y), radius - 3.0, thumb);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_fill_is_a_two_colour_lookup() {
        let theme = Theme::dark();
        assert_eq!(pill_fill(true, &theme), theme.accent);
        assert_eq!(pill_fill(false, &theme), theme.muted);
    }

    #[test]
    fn switch_palette_follows_the_value() {
        let theme = Theme::light();
        assert_eq!(switch_palette(true, &theme), (theme.on_accent, theme.accent));
        assert_eq!(switch_palette(false, &theme), (theme.on_muted, theme.muted));
    }
}
