//! Settings dialog
//!
//! Edits the persisted settings in place; the caller applies and saves when
//! a change is reported.

use crate::calendar::DisplayMode;
use crate::models::settings::{Settings, THEME_DARK, THEME_LIGHT, THEME_SYSTEM};

const WEEK_START_CHOICES: [(u8, &str); 3] = [(0, "Sunday"), (1, "Monday"), (6, "Saturday")];

pub fn render_settings_dialog(
    ctx: &egui::Context,
    open: &mut bool,
    settings: &mut Settings,
) -> bool {
    let mut changed = false;

    egui::Window::new("Settings")
        .open(open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Theme");
                    egui::ComboBox::from_id_source("settings_theme")
                        .selected_text(settings.theme.clone())
                        .show_ui(ui, |ui| {
                            for theme in [THEME_SYSTEM, THEME_LIGHT, THEME_DARK] {
                                if ui
                                    .selectable_value(
                                        &mut settings.theme,
                                        theme.to_string(),
                                        theme,
                                    )
                                    .changed()
                                {
                                    changed = true;
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Week starts on");
                    let week_start_label = WEEK_START_CHOICES
                        .iter()
                        .find(|(day, _)| *day == settings.first_day_of_week)
                        .map(|(_, label)| *label)
                        .unwrap_or("Sunday");
                    egui::ComboBox::from_id_source("settings_week_start")
                        .selected_text(week_start_label)
                        .show_ui(ui, |ui| {
                            for (day, label) in WEEK_START_CHOICES {
                                if ui
                                    .selectable_value(
                                        &mut settings.first_day_of_week,
                                        day,
                                        label,
                                    )
                                    .changed()
                                {
                                    changed = true;
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Open in");
                    egui::ComboBox::from_id_source("settings_startup_mode")
                        .selected_text(match settings.startup_mode {
                            DisplayMode::Week => "Week",
                            DisplayMode::Month => "Month",
                        })
                        .show_ui(ui, |ui| {
                            for (mode, label) in
                                [(DisplayMode::Week, "Week"), (DisplayMode::Month, "Month")]
                            {
                                if ui
                                    .selectable_value(&mut settings.startup_mode, mode, label)
                                    .changed()
                                {
                                    changed = true;
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Week numbers");
                    if ui
                        .checkbox(&mut settings.show_week_numbers, "Show in month grid")
                        .changed()
                    {
                        changed = true;
                    }
                    ui.end_row();
                });
        });

    changed
}
