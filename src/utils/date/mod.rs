// Date utility functions
// Shared calendar math for the paging core and the views

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// First day of the week containing `date`, where `first_day_of_week`
/// is an offset from Sunday (0 = Sunday, 1 = Monday, ...).
pub fn start_of_week(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let offset =
        (date.weekday().num_days_from_sunday() as i64 - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(
        if month == 12 { year + 1 } else { year },
        if month == 12 { 1 } else { month + 1 },
        1,
    )
    .unwrap()
    .signed_duration_since(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
    .num_days() as u32
}

/// Shift `date` by a whole number of months, clamping the day-of-month to
/// the target month's length (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let month0 = date.year() * 12 + date.month0() as i32 + delta;
    let year = month0.div_euclid(12);
    let month = month0.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Full English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(month as usize - 1) % 12]
}

/// Short weekday names ordered by the configured first day of week.
pub fn day_names(first_day_of_week: u8) -> Vec<&'static str> {
    let all_days = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let start = first_day_of_week as usize;
    let mut result = Vec::with_capacity(7);
    for i in 0..7 {
        result.push(all_days[(start + i) % 7]);
    }
    result
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
