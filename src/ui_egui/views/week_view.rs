use chrono::{Local, NaiveDate};
use egui::Vec2;

use super::day_cell::render_day_cell;
use super::{column_width, CalendarCellPalette, GridAction, GRID_SPACING};
use crate::calendar::{Page, DAY_ROW_HEIGHT};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::is_weekend;

pub struct WeekView;

impl WeekView {
    /// Render one week page as a single 7-cell strip.
    pub fn show(
        ui: &mut egui::Ui,
        page: &Page,
        selected: NaiveDate,
        theme: &CalendarTheme,
    ) -> GridAction {
        let today = Local::now().date_naive();
        let palette = CalendarCellPalette::from_theme(theme);
        let col_width = column_width(ui.available_width(), false);
        let cell_size = Vec2::new(col_width, DAY_ROW_HEIGHT - GRID_SPACING);
        let mut action = GridAction::None;

        egui::Grid::new("week_grid")
            .spacing([GRID_SPACING, GRID_SPACING])
            .show(ui, |ui| {
                for cell in page.cells() {
                    let clicked = render_day_cell(
                        ui,
                        &cell,
                        cell.date == today,
                        cell.date == selected,
                        is_weekend(cell.date),
                        &palette,
                        cell_size,
                    );
                    if clicked {
                        action = GridAction::DaySelected(cell.date);
                    }
                }
                ui.end_row();
            });

        action
    }
}
