// Calendar paging core
// Display mode, page math, and the paging controller

pub mod controller;
pub mod page;

pub use controller::{CalendarController, CalendarDelegate};
pub use page::{DayCell, Page, DAY_ROW_HEIGHT};

use serde::{Deserialize, Serialize};

/// Granularity of one horizontally-swipeable page of calendar content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Month,
    #[default]
    Week,
}

impl DisplayMode {
    /// The other mode, used by the month-button toggle
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Month => DisplayMode::Week,
            DisplayMode::Week => DisplayMode::Month,
        }
    }
}
