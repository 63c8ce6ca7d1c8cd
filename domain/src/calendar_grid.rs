//! Month grid generation and month arithmetic.
//!
//! Grids start on Sunday and carry only leading padding: the last row ends
//! on the last day of the month.

use chrono::{Datelike, Months, NaiveDate};
use shared::CalendarCell;

/// Column headers for a Sunday-first grid
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Normalize any date to the first day of its month
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Move a month anchor by `delta` months, keeping it on the first day.
/// Dates past chrono's supported range leave the anchor where it is.
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let anchor = first_of_month(month);
    let step = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        anchor.checked_add_months(step)
    } else {
        anchor.checked_sub_months(step)
    };
    shifted.unwrap_or(anchor)
}

/// Build the cells of one month: a blank for every weekday before the
/// first, then one cell per day.
pub fn build_month_grid(month: NaiveDate) -> Vec<CalendarCell> {
    let first = first_of_month(month);
    let leading_blanks = first.weekday().num_days_from_sunday() as usize;

    let mut cells = vec![CalendarCell::Blank; leading_blanks];
    cells.extend(
        first
            .iter_days()
            .take_while(|day| day.month() == first.month())
            .map(CalendarCell::Day),
    );
    cells
}

/// Get the full English name for a month number (1-12)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Three-letter month label used by the month grid
pub fn short_month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan", 2 => "Feb", 3 => "Mar", 4 => "Apr",
        5 => "May", 6 => "Jun", 7 => "Jul", 8 => "Aug",
        9 => "Sep", 10 => "Oct", 11 => "Nov", 12 => "Dec",
        _ => "???",
    }
}
