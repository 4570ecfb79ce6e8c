//! Theme module for the egui planner calendar
//!
//! Defines the CalendarTheme structure and conversions between
//! egui::Color32 and the "r,g,b" color format used in the config file.

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::models::calendar_source::CalendarSource;
use crate::models::settings::{THEME_DARK, THEME_LIGHT};

/// A calendar theme defining all colors used in the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Calendar grid background color
    pub calendar_background: Color32,

    /// Weekend day background color
    pub weekend_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date border color
    pub today_border: Color32,

    /// Selected date background color
    pub selected_background: Color32,

    /// Selected date border color
    pub selected_border: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (secondary info)
    pub text_secondary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(250, 250, 252),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_background: Color32::from_rgb(100, 150, 255),
            selected_border: Color32::from_rgb(60, 110, 220),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(35, 35, 38),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            selected_background: Color32::from_rgb(80, 120, 210),
            selected_border: Color32::from_rgb(130, 170, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    /// Resolve a persisted theme preference ("system", "light", "dark").
    pub fn from_preference(preference: &str) -> Self {
        match preference {
            THEME_LIGHT => Self::light(),
            THEME_DARK => Self::dark(),
            _ => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Parse a config color string "r,g,b" to Color32.
    pub fn color_from_string(s: &str) -> Option<Color32> {
        CalendarSource::parse_color(s)
            .ok()
            .map(|(r, g, b)| Color32::from_rgb(r, g, b))
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.day_background;
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;

        ctx.set_visuals(visuals);
    }
}
