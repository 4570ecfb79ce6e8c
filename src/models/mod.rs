// Module exports for models

pub mod calendar_source;
pub mod settings;

use thiserror::Error;

/// Validation failures for user-editable model data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("first day of week must be 0-6, got {0}")]
    FirstDayOfWeek(u8),
    #[error("unknown theme preference '{0}'")]
    UnknownTheme(String),
    #[error("calendar name cannot be empty")]
    EmptyCalendarName,
    #[error("invalid color format '{0}', expected \"r,g,b\"")]
    InvalidColor(String),
}
