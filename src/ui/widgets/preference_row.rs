//! A single preference row: one-line title, optional multi-line summary,
//! optional decorative slots, and a disabled visual treatment.

use eframe::egui::{
    self, Align, CornerRadius, Direction, FontId, Frame, Label, Layout, Margin, RichText, Vec2,
    WidgetInfo, WidgetType,
    text::{LayoutJob, TextFormat, TextWrapping},
};

use crate::ui::theme::{self, Theme, layout};
use crate::ui::widgets::activation_sense;

type Slot<'a> = Box<dyn FnOnce(&mut egui::Ui) + 'a>;

/// A settings-list row.
///
/// Activation is reported through the returned [`egui::Response`]:
/// `response.clicked()` is the row's tap event and is never true while the
/// row is disabled. Render slots are plain closures invoked at most once
/// during `show`; an absent slot simply renders nothing.
pub struct PreferenceRow<'a> {
    title: &'a str,
    summary: Option<&'a str>,
    enabled: bool,
    leading: Option<Slot<'a>>,
    trailing: Option<Slot<'a>>,
    below: Option<Slot<'a>>,
}

impl<'a> PreferenceRow<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            summary: None,
            enabled: true,
            leading: None,
            trailing: None,
            below: None,
        }
    }

    /// Summary text under the title, ellipsised after three lines.
    /// A blank summary is treated as absent.
    pub fn summary(mut self, summary: &'a str) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Decorative slot rendered before the text block, in a fixed square box.
    pub fn leading(mut self, slot: impl FnOnce(&mut egui::Ui) + 'a) -> Self {
        self.leading = Some(Box::new(slot));
        self
    }

    /// Decorative slot rendered after the text block.
    pub fn trailing(mut self, slot: impl FnOnce(&mut egui::Ui) + 'a) -> Self {
        self.trailing = Some(Box::new(slot));
        self
    }

    /// Decorative slot rendered below the title/summary block.
    pub fn below(mut self, slot: impl FnOnce(&mut egui::Ui) + 'a) -> Self {
        self.below = Some(Box::new(slot));
        self
    }

    pub fn show(self, ui: &mut egui::Ui, theme: &Theme) -> egui::Response {
        let summary = effective_summary(self.summary);
        // Summary rows trade min-height budget for real vertical margin; the
        // summary text itself then grows the row past the baseline.
        let v_pad = if summary.is_some() {
            layout::ROW_VERTICAL_PADDING
        } else {
            0.0
        };
        let min_height = layout::ROW_MIN_HEIGHT - v_pad;

        let title = self.title;
        let enabled = self.enabled;

        let inner = Frame::new()
            .fill(theme.surface)
            .inner_margin(Margin::symmetric(
                layout::ROW_HORIZONTAL_PADDING as i8,
                v_pad as i8,
            ))
            .show(ui, |ui| {
                let fade = ui.ctx().animate_bool_with_time(
                    ui.id().with("enabled_fade"),
                    enabled,
                    layout::ENABLE_FADE_SECS,
                );
                ui.set_opacity(egui::lerp(layout::DISABLED_ALPHA..=1.0, fade));
                ui.set_width(ui.available_width());
                ui.set_min_height(min_height);

                ui.horizontal(|ui| {
                    if let Some(leading) = self.leading {
                        ui.allocate_ui_with_layout(
                            Vec2::splat(layout::SLOT_SIZE),
                            Layout::centered_and_justified(Direction::LeftToRight),
                            leading,
                        );
                        ui.add_space(layout::SLOT_GAP);
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(trailing) = self.trailing {
                            trailing(ui);
                            ui.add_space(layout::TRAILING_GAP);
                        }
                        // Text block takes whatever width the slots left over.
                        ui.with_layout(Layout::top_down(Align::Min), |ui| {
                            ui.add(
                                Label::new(
                                    RichText::new(title)
                                        .size(layout::TITLE_FONT_SIZE)
                                        .color(theme.text_primary),
                                )
                                .truncate()
                                .selectable(false),
                            );
                            if let Some(summary) = summary {
                                ui.add(Label::new(summary_job(summary, theme)).selectable(false));
                            }
                            if let Some(below) = self.below {
                                below(ui);
                            }
                        });
                    });
                });
            });

        let response = inner.response.interact(activation_sense(enabled));
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, enabled, title));
        if enabled && response.hovered() {
            ui.painter().rect_filled(
                response.rect,
                CornerRadius::ZERO,
                theme::faded(theme.text_primary, 0.04),
            );
        }
        response
    }
}

/// A summary counts only if it contains something visible.
pub(crate) fn effective_summary(summary: Option<&str>) -> Option<&str> {
    summary.filter(|s| !s.trim().is_empty())
}

/// Layout job for the summary block: secondary tone, at most three rows,
/// ellipsised overflow.
pub(crate) fn summary_job(text: &str, theme: &Theme) -> LayoutJob {
    let mut job = LayoutJob::single_section(
        text.to_owned(),
        TextFormat {
            font_id: FontId::proportional(layout::SUMMARY_FONT_SIZE),
            color: theme.text_secondary,
            ..Default::default()
        },
    );
    job.wrap = TextWrapping {
        max_rows: 3,
        ..Default::default()
    };
    job
}
