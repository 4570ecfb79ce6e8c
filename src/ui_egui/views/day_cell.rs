//! Day cell rendering shared by the month grid and the week strip.

use chrono::Datelike;
use egui::{Sense, Stroke, Vec2};

use super::CalendarCellPalette;
use crate::calendar::DayCell;

/// Render one day cell. Returns true when the cell was clicked.
pub(super) fn render_day_cell(
    ui: &mut egui::Ui,
    cell: &DayCell,
    is_today: bool,
    is_selected: bool,
    is_weekend: bool,
    palette: &CalendarCellPalette,
    size: Vec2,
) -> bool {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click().union(Sense::hover()));

    let bg_color = if is_selected {
        palette.selected_bg
    } else if is_today {
        palette.today_bg
    } else if !cell.in_month {
        palette.fill_bg
    } else if is_weekend {
        palette.weekend_bg
    } else {
        palette.regular_bg
    };
    ui.painter().rect_filled(rect, 2.0, bg_color);

    let border_color = if is_selected {
        palette.selected_border
    } else if is_today {
        palette.today_border
    } else {
        palette.border
    };
    ui.painter()
        .rect_stroke(rect, 2.0, Stroke::new(1.0, border_color));

    if response.hovered() {
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let text_color = if is_selected {
        palette.selected_text
    } else if cell.in_month {
        palette.text
    } else {
        palette.muted_text
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        cell.date.day().to_string(),
        egui::FontId::proportional(14.0),
        text_color,
    );

    response.clicked()
}
