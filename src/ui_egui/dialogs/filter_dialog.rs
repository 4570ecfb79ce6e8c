//! Calendar filter dialog
//!
//! Lists the configured calendar sources with a color swatch and a
//! visibility checkbox each. Visibility changes are reported back so the
//! caller can persist them.

use egui::{Color32, Sense, Stroke, Vec2};

use crate::models::calendar_source::CalendarSource;
use crate::ui_egui::theme::CalendarTheme;

/// Outcome of rendering the filter dialog for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDialogAction {
    None,
    /// At least one visibility toggle changed
    Changed,
}

pub fn render_filter_dialog(
    ctx: &egui::Context,
    open: &mut bool,
    calendars: &mut [CalendarSource],
    theme: &CalendarTheme,
) -> FilterDialogAction {
    let mut action = FilterDialogAction::None;

    egui::Window::new("Calendars")
        .open(open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            if calendars.is_empty() {
                ui.label(
                    egui::RichText::new("No calendars configured")
                        .color(theme.text_secondary),
                );
                return;
            }

            ui.label(
                egui::RichText::new("Choose which calendars to show")
                    .size(12.0)
                    .color(theme.text_secondary),
            );
            ui.add_space(6.0);

            for calendar in calendars.iter_mut() {
                ui.horizontal(|ui| {
                    render_swatch(ui, &calendar.color);
                    if ui.checkbox(&mut calendar.visible, &calendar.name).changed() {
                        action = FilterDialogAction::Changed;
                    }
                });
            }

            ui.add_space(6.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Show all").clicked()
                    && set_all_visible(calendars, true)
                {
                    action = FilterDialogAction::Changed;
                }
                if ui.button("Hide all").clicked()
                    && set_all_visible(calendars, false)
                {
                    action = FilterDialogAction::Changed;
                }
            });
        });

    action
}

fn set_all_visible(calendars: &mut [CalendarSource], visible: bool) -> bool {
    let mut changed = false;
    for calendar in calendars.iter_mut() {
        if calendar.visible != visible {
            calendar.visible = visible;
            changed = true;
        }
    }
    changed
}

fn render_swatch(ui: &mut egui::Ui, color: &str) {
    let color = CalendarTheme::color_from_string(color).unwrap_or(Color32::GRAY);
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
    ui.painter().rect_filled(rect, 3.0, color);
    ui.painter()
        .rect_stroke(rect, 3.0, Stroke::new(1.0, color.gamma_multiply(0.6)));
}
