use chrono::{Datelike, NaiveDate};
use shared::DateRange;

use crate::calendar_grid::month_name;

/// Format a date for the trigger, e.g. "Jan 5, 2025"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Trigger text for a range: "Jan 5, 2025 – Jan 10, 2025", a single date for
/// one-day ranges, or `placeholder` for all time.
pub fn format_range_label(range: &DateRange, placeholder: &str) -> String {
    match (range.start, range.end) {
        (Some(start), Some(end)) if start == end => format_short_date(start),
        (Some(start), Some(end)) => {
            format!("{} – {}", format_short_date(start), format_short_date(end))
        }
        (Some(start), None) => format!("{} – …", format_short_date(start)),
        (None, Some(end)) => format!("… – {}", format_short_date(end)),
        (None, None) => placeholder.to_string(),
    }
}

/// Header above the day grid, e.g. "March 2023"
pub fn month_caption(month: NaiveDate) -> String {
    format!("{} {}", month_name(month.month()), month.year())
}
