// Calendar sources shown in the filter dialog
// A source is a named, colored calendar whose days the user can hide

use serde::{Deserialize, Serialize};

use crate::models::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSource {
    pub name: String,
    /// Stored as "r,g,b" (the same format themes use)
    pub color: String,
    pub visible: bool,
}

impl CalendarSource {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            visible: true,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyCalendarName);
        }
        Self::parse_color(&self.color)?;
        Ok(())
    }

    /// Parse an "r,g,b" color string into its components.
    pub fn parse_color(color: &str) -> Result<(u8, u8, u8), ValidationError> {
        let invalid = || ValidationError::InvalidColor(color.to_string());
        let parts: Vec<&str> = color.split(',').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let r = parts[0].trim().parse::<u8>().map_err(|_| invalid())?;
        let g = parts[1].trim().parse::<u8>().map_err(|_| invalid())?;
        let b = parts[2].trim().parse::<u8>().map_err(|_| invalid())?;
        Ok((r, g, b))
    }
}
