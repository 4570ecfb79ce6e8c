// Page math for the day grid
// A Page is one swipeable unit of calendar content: a week strip or a month
// grid. Pages are cheap values computed on demand; only the previous,
// current, and next page ever exist at once.

use chrono::{Datelike, Duration, NaiveDate};

use super::DisplayMode;
use crate::utils::date::{add_months, days_in_month, start_of_month, start_of_week};

/// Height in points of one week row in the day grid. A Week page is a single
/// row; a Month page is one row per week of the month grid.
pub const DAY_ROW_HEIGHT: f32 = 48.0;

/// One cell of a page's day grid.
///
/// `in_month` is false for the leading/trailing fill days a month grid needs
/// to stay 7 columns wide; week strips never contain fill days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
}

/// One swipeable unit of calendar content.
///
/// The anchor is always normalized: the first day of the month in Month
/// mode, the configured first day of the week in Week mode. Normalizing at
/// construction is what makes `before`/`after` exact inverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    mode: DisplayMode,
    anchor: NaiveDate,
    first_day_of_week: u8,
}

impl Page {
    /// The page of the given mode whose range contains `date`.
    pub fn containing(date: NaiveDate, mode: DisplayMode, first_day_of_week: u8) -> Self {
        let anchor = match mode {
            DisplayMode::Month => start_of_month(date),
            DisplayMode::Week => start_of_week(date, first_day_of_week),
        };
        Self {
            mode,
            anchor,
            first_day_of_week,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// First date of the page's range (the normalized anchor).
    pub fn start(&self) -> NaiveDate {
        self.anchor
    }

    /// Last date of the page's range, inclusive.
    pub fn end(&self) -> NaiveDate {
        match self.mode {
            DisplayMode::Month => {
                let days = days_in_month(self.anchor.year(), self.anchor.month());
                self.anchor + Duration::days(days as i64 - 1)
            }
            DisplayMode::Week => self.anchor + Duration::days(6),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.end()
    }

    /// The adjacent page one unit earlier. Exact inverse of [`Page::after`].
    pub fn before(&self) -> Self {
        let anchor = match self.mode {
            DisplayMode::Month => add_months(self.anchor, -1),
            DisplayMode::Week => self.anchor - Duration::days(7),
        };
        Self { anchor, ..*self }
    }

    /// The adjacent page one unit later. Exact inverse of [`Page::before`].
    pub fn after(&self) -> Self {
        let anchor = match self.mode {
            DisplayMode::Month => add_months(self.anchor, 1),
            DisplayMode::Week => self.anchor + Duration::days(7),
        };
        Self { anchor, ..*self }
    }

    /// Offset of the page's first day from the start of its grid row,
    /// i.e. how many fill cells a month grid needs before day 1.
    fn leading_fill(&self) -> i64 {
        match self.mode {
            DisplayMode::Month => {
                (self.anchor.weekday().num_days_from_sunday() as i64
                    - self.first_day_of_week as i64
                    + 7)
                    % 7
            }
            DisplayMode::Week => 0,
        }
    }

    /// Number of 7-day rows in the page's grid.
    pub fn rows(&self) -> u32 {
        match self.mode {
            DisplayMode::Month => {
                let days = days_in_month(self.anchor.year(), self.anchor.month()) as i64;
                ((self.leading_fill() + days + 6) / 7) as u32
            }
            DisplayMode::Week => 1,
        }
    }

    /// Content height the rendering layer should reserve for this page.
    pub fn height(&self) -> f32 {
        self.rows() as f32 * DAY_ROW_HEIGHT
    }

    /// Date of the top-left grid cell (a fill day when the month does not
    /// start on the first weekday column).
    pub fn grid_start(&self) -> NaiveDate {
        self.anchor - Duration::days(self.leading_fill())
    }

    /// The full grid for this page: 7 cells per row, in display order.
    pub fn cells(&self) -> Vec<DayCell> {
        let start = self.grid_start();
        let count = self.rows() as i64 * 7;
        (0..count)
            .map(|offset| {
                let date = start + Duration::days(offset);
                DayCell {
                    date,
                    in_month: self.contains(date),
                }
            })
            .collect()
    }

    /// Map a selection from a sibling page into this page: the same weekday
    /// slot for week strips, the same (clamped) day-of-month for months.
    pub fn carry_selection(&self, from: &Page, selected: NaiveDate) -> NaiveDate {
        match self.mode {
            DisplayMode::Week => {
                let offset = (selected - from.start()).num_days().rem_euclid(7);
                self.anchor + Duration::days(offset)
            }
            DisplayMode::Month => {
                let day = selected
                    .day()
                    .min(days_in_month(self.anchor.year(), self.anchor.month()));
                NaiveDate::from_ymd_opt(self.anchor.year(), self.anchor.month(), day).unwrap()
            }
        }
    }
}
