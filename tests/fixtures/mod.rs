// Test fixtures - reusable delegate recorder and sample dates
// Shared by the integration and property test targets

use chrono::NaiveDate;

use planner_calendar::calendar::CalendarDelegate;

/// Sample dates used across tests
pub mod dates {
    use super::*;

    /// Returns 2020-01-14, a Tuesday in the middle of a 5-row month
    pub fn tuesday_jan_2020() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 14).unwrap()
    }

    /// Returns 2020-02-29, the leap day
    pub fn leap_day_2020() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
    }

    /// Returns 2015-02-14, inside the rare month that fits exactly 4 rows
    /// with a Sunday week start
    pub fn four_row_february() -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 2, 14).unwrap()
    }
}

/// Everything a delegate can observe, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum DelegateEvent {
    DateSelected(NaiveDate),
    TransitionedTo(NaiveDate),
    Resized { height: f32, animated: bool },
    FilterRequested,
}

/// Delegate that records every notification it receives.
///
/// Unlike a mock with expectations, the recorder lets a test drive a whole
/// user session first and assert on the resulting event sequence afterwards.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    pub events: Vec<DelegateEvent>,
    /// Answer for `calendar_count` pulls
    pub count: Option<usize>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dates reported through `date_selected`, in order
    pub fn selected_dates(&self) -> Vec<NaiveDate> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DelegateEvent::DateSelected(date) => Some(*date),
                _ => None,
            })
            .collect()
    }

    /// Heights reported through `resized`, in order
    pub fn reported_heights(&self) -> Vec<f32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DelegateEvent::Resized { height, .. } => Some(*height),
                _ => None,
            })
            .collect()
    }

}

impl CalendarDelegate for RecordingDelegate {
    fn date_selected(&mut self, date: NaiveDate) {
        self.events.push(DelegateEvent::DateSelected(date));
    }

    fn transitioned_to(&mut self, date: NaiveDate) {
        self.events.push(DelegateEvent::TransitionedTo(date));
    }

    fn resized(&mut self, height: f32, animated: bool) {
        self.events.push(DelegateEvent::Resized { height, animated });
    }

    fn filter_requested(&mut self) {
        self.events.push(DelegateEvent::FilterRequested);
    }

    fn calendar_count(&self) -> Option<usize> {
        self.count
    }
}
