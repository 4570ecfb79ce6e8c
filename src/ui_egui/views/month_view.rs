use chrono::{Datelike, Local, NaiveDate};
use egui::Vec2;

use super::day_cell::render_day_cell;
use super::{column_width, CalendarCellPalette, GridAction, GRID_SPACING, WEEK_NUMBER_WIDTH};
use crate::calendar::{Page, DAY_ROW_HEIGHT};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::is_weekend;

pub struct MonthView;

impl MonthView {
    /// Render one month page as a 7-wide grid with leading/trailing fill
    /// days. Reports the tapped day, if any.
    pub fn show(
        ui: &mut egui::Ui,
        page: &Page,
        selected: NaiveDate,
        show_week_numbers: bool,
        theme: &CalendarTheme,
    ) -> GridAction {
        let today = Local::now().date_naive();
        let palette = CalendarCellPalette::from_theme(theme);
        let col_width = column_width(ui.available_width(), show_week_numbers);
        let cell_size = Vec2::new(col_width, DAY_ROW_HEIGHT - GRID_SPACING);
        let mut action = GridAction::None;

        let cells = page.cells();
        egui::Grid::new("month_grid")
            .spacing([GRID_SPACING, GRID_SPACING])
            .show(ui, |ui| {
                for week in cells.chunks(7) {
                    if show_week_numbers {
                        Self::render_week_number(ui, week[0].date, &palette);
                    }
                    for cell in week {
                        let clicked = render_day_cell(
                            ui,
                            cell,
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
                }
            });

        action
    }

    fn render_week_number(ui: &mut egui::Ui, row_start: NaiveDate, palette: &CalendarCellPalette) {
        let week_num = row_start.iso_week().week();
        ui.allocate_ui_with_layout(
            Vec2::new(WEEK_NUMBER_WIDTH, DAY_ROW_HEIGHT - GRID_SPACING),
            egui::Layout::centered_and_justified(egui::Direction::TopDown),
            |ui| {
                ui.label(
                    egui::RichText::new(week_num.to_string())
                        .size(11.0)
                        .color(palette.muted_text),
                );
            },
        );
    }
}
