// Settings module

use serde::{Deserialize, Serialize};

use crate::calendar::DisplayMode;
use crate::models::ValidationError;

pub const THEME_SYSTEM: &str = "system";
pub const THEME_LIGHT: &str = "light";
pub const THEME_DARK: &str = "dark";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "system", "light", or "dark"
    pub theme: String,
    /// 0 = Sunday
    pub first_day_of_week: u8,
    /// Display mode the calendar opens in
    pub startup_mode: DisplayMode,
    /// Show an ISO week-number column in the month grid
    pub show_week_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: THEME_SYSTEM.to_string(),
            first_day_of_week: 0, // Sunday
            startup_mode: DisplayMode::Week,
            show_week_numbers: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_day_of_week > 6 {
            return Err(ValidationError::FirstDayOfWeek(self.first_day_of_week));
        }
        match self.theme.as_str() {
            THEME_SYSTEM | THEME_LIGHT | THEME_DARK => Ok(()),
            _ => Err(ValidationError::UnknownTheme(self.theme.clone())),
        }
    }
}
