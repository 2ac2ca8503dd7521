//! Gallery binary: a settings screen exercising every widget in the crate.
//!
//! Run with an optional theme override: `prefkit path/to/theme.json`.

use eframe::egui;
use prefkit::{
    CollapsingHeader, CollapsingHeaderState, HeaderStyle, PreferenceRow, PrimarySwitchRow, Theme,
};
use std::env;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional first argument: path to a theme JSON file.
    let args: Vec<String> = env::args().collect();
    let theme = match args.get(1) {
        Some(path) => Theme::from_json_file(path).unwrap_or_else(|e| {
            log::warn!("falling back to the dark preset: {e}");
            Theme::dark()
        }),
        None => Theme::dark(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Preference Gallery",
        options,
        Box::new(move |cc| Ok(Box::new(GalleryApp::new(cc, theme)))),
    )
}

/// The demo application: one collapsing settings screen.
struct GalleryApp {
    theme: Theme,
    header: CollapsingHeaderState,

    // ── Screen state ───────────────────────────────────────────────────────
    master_enabled: bool,
    sync_wifi_only: bool,
    notifications: bool,
    row_taps: u32,
}

impl GalleryApp {
    fn new(_cc: &eframe::CreationContext<'_>, theme: Theme) -> Self {
        Self {
            theme,
            header: CollapsingHeaderState::new(HeaderStyle::large()),
            master_enabled: true,
            sync_wifi_only: false,
            notifications: true,
            row_taps: 0,
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = self.theme.clone();
        let panel_frame = egui::Frame::new().fill(theme.surface);

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                let response = CollapsingHeader::new("Settings").show(
                    ui,
                    &theme,
                    &mut self.header,
                    |ui| {
                        if PrimarySwitchRow::new("Use feature", &mut self.master_enabled)
                            .show(ui, &theme)
                            .changed()
                        {
                            log::info!("master toggle -> {}", self.master_enabled);
                        }

                        PrimarySwitchRow::new("Notifications", &mut self.notifications)
                            .enabled(self.master_enabled)
                            .show(ui, &theme);

                        if PreferenceRow::new("Sync over Wi-Fi only")
                            .summary("Pause sync on mobile data")
                            .enabled(self.master_enabled)
                            .trailing(|ui| {
                                ui.label("›");
                            })
                            .show(ui, &theme)
                            .clicked()
                        {
                            self.sync_wifi_only = !self.sync_wifi_only;
                            log::info!("wifi-only -> {}", self.sync_wifi_only);
                        }

                        PreferenceRow::new("Storage")
                            .summary("Local cache, downloads and exports share one quota")
                            .leading(|ui| {
                                ui.label("🖴");
                            })
                            .below(|ui| {
                                ui.add(egui::ProgressBar::new(0.37).desired_height(6.0));
                            })
                            .show(ui, &theme);

                        for index in 0..50 {
                            let title = format!("Preference {index}");
                            let mut row = PreferenceRow::new(&title);
                            if index % 2 == 0 {
                                row = row.summary("Preference summary");
                            }
                            if row.show(ui, &theme).clicked() {
                                self.row_taps += 1;
                                log::debug!("tapped row {index} ({} total)", self.row_taps);
                            }
                        }
                    },
                );

                if response.back_clicked {
                    log::info!("back pressed at collapse {:.2}", response.collapse_fraction);
                }
            });
    }
}
