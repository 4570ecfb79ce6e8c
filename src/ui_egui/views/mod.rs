// Day grid views
// Month and week renderings of a calendar page, plus shared header/cell code

use chrono::NaiveDate;
use egui::{Margin, Stroke, Vec2};

pub mod day_cell;
pub mod month_view;
mod palette;
pub mod week_view;

pub(crate) use palette::CalendarCellPalette;

use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::day_names;

/// Horizontal/vertical gap between grid cells
pub(crate) const GRID_SPACING: f32 = 2.0;
/// Width of the optional ISO week-number column
pub(crate) const WEEK_NUMBER_WIDTH: f32 = 35.0;

/// Action reported by a day grid view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    /// No interaction this frame
    None,
    /// The user tapped a day cell
    DaySelected(NaiveDate),
}

/// Width of one weekday column given the space the grid can use.
pub(crate) fn column_width(available_width: f32, with_week_numbers: bool) -> f32 {
    let week_col_extra = if with_week_numbers {
        WEEK_NUMBER_WIDTH + GRID_SPACING
    } else {
        0.0
    };
    let total_spacing = GRID_SPACING * 6.0; // 6 gaps between 7 columns
    (available_width - total_spacing - week_col_extra) / 7.0
}

/// Weekday header row, ordered by the configured first day of week.
/// Shared by the month and week views so both modes page under one header.
pub fn render_weekday_header(
    ui: &mut egui::Ui,
    first_day_of_week: u8,
    with_week_numbers: bool,
    theme: &CalendarTheme,
) {
    let names = day_names(first_day_of_week);
    let col_width = column_width(ui.available_width(), with_week_numbers);

    egui::Grid::new("weekday_header_grid")
        .spacing([GRID_SPACING, GRID_SPACING])
        .show(ui, |ui| {
            if with_week_numbers {
                ui.allocate_ui_with_layout(
                    Vec2::new(WEEK_NUMBER_WIDTH, 26.0),
                    egui::Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| {
                        ui.label(
                            egui::RichText::new("Wk")
                                .size(12.0)
                                .color(theme.text_secondary)
                                .strong(),
                        );
                    },
                );
            }

            for name in names {
                ui.allocate_ui_with_layout(
                    Vec2::new(col_width, 26.0),
                    egui::Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| {
                        egui::Frame::none()
                            .fill(theme.calendar_background)
                            .rounding(egui::Rounding::same(4.0))
                            .stroke(Stroke::new(1.0, theme.day_border))
                            .inner_margin(Margin::symmetric(4.0, 4.0))
                            .show(ui, |cell_ui| {
                                cell_ui.centered_and_justified(|label_ui| {
                                    label_ui.label(
                                        egui::RichText::new(name)
                                            .size(13.0)
                                            .color(theme.text_primary)
                                            .strong(),
                                    );
                                });
                            });
                    },
                );
            }
            ui.end_row();
        });
}
