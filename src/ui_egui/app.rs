// Planner application
// Owns the paging controller and implements its delegate surface; renders
// the header, the paged day grid, the selected-day panel, and the dialogs

use chrono::{Datelike, Local, NaiveDate};
use egui::{Margin, Sense, Vec2};
use egui_extras::DatePickerButton;
use std::path::PathBuf;

use crate::calendar::{CalendarController, CalendarDelegate, DisplayMode};
use crate::models::calendar_source::CalendarSource;
use crate::models::settings::Settings;
use crate::services::settings::{AppConfig, SettingsService};
use crate::ui_egui::dialogs::filter_dialog::{render_filter_dialog, FilterDialogAction};
use crate::ui_egui::dialogs::settings_dialog::render_settings_dialog;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::month_view::MonthView;
use crate::ui_egui::views::week_view::WeekView;
use crate::ui_egui::views::{self, GridAction};
use crate::utils::date::month_name;

/// Horizontal drag distance that commits a page swipe
const SWIPE_THRESHOLD: f32 = 40.0;

/// Screen-side half of the controller seam. Receives the delegate
/// notifications and answers the calendar-count pull for the filter badge.
pub struct PlannerState {
    /// Height the grid area should occupy, as last reported by the controller
    pub grid_height: f32,
    pub animate_resize: bool,
    pub filter_open: bool,
    pub calendars: Vec<CalendarSource>,
}

impl CalendarDelegate for PlannerState {
    fn date_selected(&mut self, date: NaiveDate) {
        log::debug!("date selected: {}", date);
    }

    fn transitioned_to(&mut self, date: NaiveDate) {
        log::debug!("transitioned to {}", date);
    }

    fn resized(&mut self, height: f32, animated: bool) {
        self.grid_height = height;
        self.animate_resize = animated;
    }

    fn filter_requested(&mut self) {
        self.filter_open = true;
    }

    fn calendar_count(&self) -> Option<usize> {
        if self.calendars.is_empty() {
            return None;
        }
        Some(self.calendars.iter().filter(|c| c.visible).count())
    }
}

/// In-progress swipe gesture on the day grid
#[derive(Default)]
struct SwipeState {
    /// Accumulated horizontal drag distance
    dx: f32,
    /// Set once the drag crossed the threshold; true = toward the next page
    armed: Option<bool>,
}

pub struct PlannerApp {
    settings_service: SettingsService,
    settings: Settings,
    controller: CalendarController,
    state: PlannerState,
    active_theme: CalendarTheme,
    show_settings_dialog: bool,
    /// Scratch date bound to the jump-to-date picker
    picker_date: NaiveDate,
    swipe: SwipeState,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::with_default_path().unwrap_or_else(|err| {
            log::warn!("Failed to resolve config directory: {:#}", err);
            SettingsService::new(PathBuf::from("planner-calendar.toml"))
        });
        let config = settings_service.load().unwrap_or_else(|err| {
            log::warn!("Failed to load config, using defaults: {:#}", err);
            AppConfig::default()
        });
        log::info!(
            "Loaded settings: theme={}, first_day_of_week={}, startup_mode={:?}",
            config.settings.theme,
            config.settings.first_day_of_week,
            config.settings.startup_mode
        );

        let today = Local::now().date_naive();
        let controller = CalendarController::new(
            today,
            config.settings.startup_mode,
            config.settings.first_day_of_week,
        );
        let active_theme = CalendarTheme::from_preference(&config.settings.theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        let state = PlannerState {
            grid_height: controller.page().height(),
            animate_resize: false,
            filter_open: false,
            calendars: config.calendars,
        };

        Self {
            settings_service,
            settings: config.settings,
            controller,
            state,
            active_theme,
            show_settings_dialog: false,
            picker_date: today,
            swipe: SwipeState::default(),
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context) {
        let mut save_needed = false;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(self.active_theme.app_background)
                    .inner_margin(Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
                ui.add_space(8.0);
                views::render_weekday_header(
                    ui,
                    self.settings.first_day_of_week,
                    self.show_week_numbers(),
                    &self.active_theme,
                );
                ui.add_space(views::GRID_SPACING);
                self.render_day_grid(ui);
                ui.add_space(10.0);
                ui.separator();
                self.render_selected_day_panel(ui);
            });

        if self.state.filter_open {
            let changed = {
                let PlannerState {
                    filter_open,
                    calendars,
                    ..
                } = &mut self.state;
                render_filter_dialog(ctx, filter_open, calendars, &self.active_theme)
            };
            if changed == FilterDialogAction::Changed {
                save_needed = true;
            }
        }

        if self.show_settings_dialog
            && render_settings_dialog(ctx, &mut self.show_settings_dialog, &mut self.settings)
        {
            self.apply_settings(ctx);
            save_needed = true;
        }

        // Keep the jump-to-date picker in step with taps and swipes
        self.picker_date = self.controller.selected_date();

        if save_needed {
            self.save_config();
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        let selected = self.controller.selected_date();
        ui.horizontal(|ui| {
            let (chevron, hover_text) = match self.controller.mode() {
                DisplayMode::Week => ("▸", "Show a month at a time"),
                DisplayMode::Month => ("▾", "Show a week at a time"),
            };
            let month_button = egui::Button::new(
                egui::RichText::new(format!("{} {}", month_name(selected.month()), chevron))
                    .size(18.0)
                    .strong()
                    .color(self.active_theme.text_primary),
            )
            .frame(false);
            if ui.add(month_button).on_hover_text(hover_text).clicked() {
                self.controller.toggle_mode(&mut self.state);
            }

            ui.label(
                egui::RichText::new(selected.year().to_string())
                    .size(18.0)
                    .color(self.active_theme.text_secondary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button("⚙")
                    .on_hover_text("Settings")
                    .clicked()
                {
                    self.show_settings_dialog = true;
                }

                let filter_label = match self.state.calendar_count() {
                    Some(count) => format!("Calendars ({})", count),
                    None => "Calendars".to_string(),
                };
                if ui
                    .button(filter_label)
                    .on_hover_text("Choose calendars to show")
                    .clicked()
                {
                    self.controller.filter_activated(&mut self.state);
                }

                let picker = DatePickerButton::new(&mut self.picker_date)
                    .id_source("jump_to_date")
                    .show_icon(true);
                if ui.add(picker).on_hover_text("Go to date").changed() {
                    self.controller.show_date(self.picker_date, &mut self.state);
                }

                if ui.button("▶").on_hover_text("Next page").clicked() {
                    self.page_step(true);
                }
                if ui.button("Today").clicked() {
                    let today = Local::now().date_naive();
                    self.controller.show_date(today, &mut self.state);
                }
                if ui.button("◀").on_hover_text("Previous page").clicked() {
                    self.page_step(false);
                }
            });
        });
    }

    /// Programmatic page move (arrow buttons); runs the same transition
    /// lifecycle a swipe does, just without the cancellable phase.
    fn page_step(&mut self, forward: bool) {
        let current = *self.controller.page();
        let target = if forward {
            self.controller.page_after(&current)
        } else {
            self.controller.page_before(&current)
        };
        self.controller.transition_will_begin(target);
        self.controller
            .transition_did_finish(true, target, &mut self.state);
    }

    fn render_day_grid(&mut self, ui: &mut egui::Ui) {
        let height = ui.ctx().animate_value_with_time(
            egui::Id::new("day_grid_height"),
            self.state.grid_height,
            if self.state.animate_resize { 0.2 } else { 0.0 },
        );

        let page = *self.controller.page();
        let selected = self.controller.selected_date();
        let show_week_numbers = self.show_week_numbers();
        let theme = self.active_theme.clone();

        let output = ui.allocate_ui(Vec2::new(ui.available_width(), height), |ui| {
            ui.set_min_height(height);
            match page.mode() {
                DisplayMode::Month => {
                    MonthView::show(ui, &page, selected, show_week_numbers, &theme)
                }
                DisplayMode::Week => WeekView::show(ui, &page, selected, &theme),
            }
        });

        if let GridAction::DaySelected(date) = output.inner {
            self.controller.day_selected(date, &mut self.state);
        }

        self.handle_swipe(ui, output.response.rect);
    }

    /// Drive the transition lifecycle from a horizontal drag: crossing the
    /// threshold begins a transition toward the revealed page; releasing
    /// inside the threshold cancels it.
    fn handle_swipe(&mut self, ui: &mut egui::Ui, grid_rect: egui::Rect) {
        let response = ui.interact(grid_rect, ui.id().with("day_grid_swipe"), Sense::drag());

        if response.dragged() {
            self.swipe.dx += response.drag_delta().x;
            if self.swipe.armed.is_none() && self.swipe.dx.abs() > SWIPE_THRESHOLD {
                // Dragging left reveals the next page
                let forward = self.swipe.dx < 0.0;
                let current = *self.controller.page();
                let target = if forward {
                    self.controller.page_after(&current)
                } else {
                    self.controller.page_before(&current)
                };
                self.controller.transition_will_begin(target);
                self.swipe.armed = Some(forward);
            }
        }

        if response.drag_stopped() {
            if let Some(forward) = self.swipe.armed.take() {
                let current = *self.controller.page();
                let target = if forward {
                    self.controller.page_after(&current)
                } else {
                    self.controller.page_before(&current)
                };
                let completed =
                    self.swipe.dx.abs() > SWIPE_THRESHOLD && (self.swipe.dx < 0.0) == forward;
                self.controller
                    .transition_did_finish(completed, target, &mut self.state);
            }
            self.swipe.dx = 0.0;
        }
    }

    fn render_selected_day_panel(&mut self, ui: &mut egui::Ui) {
        let selected = self.controller.selected_date();
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(selected.format("%A, %B %-d, %Y").to_string())
                .size(16.0)
                .strong()
                .color(self.active_theme.text_primary),
        );
        ui.label(
            egui::RichText::new("Nothing planned for this day")
                .color(self.active_theme.text_secondary),
        );

        let hidden = self
            .state
            .calendars
            .iter()
            .filter(|c| !c.visible)
            .count();
        if hidden > 0 {
            ui.label(
                egui::RichText::new(format!("{} calendar(s) hidden by filter", hidden))
                    .size(12.0)
                    .color(self.active_theme.text_secondary),
            );
        }
    }

    fn show_week_numbers(&self) -> bool {
        self.settings.show_week_numbers && self.controller.mode() == DisplayMode::Month
    }

    fn apply_settings(&mut self, ctx: &egui::Context) {
        self.active_theme = CalendarTheme::from_preference(&self.settings.theme);
        self.active_theme.apply_to_context(ctx);
        self.controller
            .set_first_day_of_week(self.settings.first_day_of_week, &mut self.state);
    }

    fn save_config(&self) {
        let config = AppConfig {
            settings: self.settings.clone(),
            calendars: self.state.calendars.clone(),
        };
        if let Err(err) = self.settings_service.save(&config) {
            log::error!("Failed to save config: {:#}", err);
        }
    }
}
