use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date range as reported to dashboard consumers.
///
/// `{None, None}` means "all time". When both ends are present `start <= end`.
/// A range with only a start is a transient picker state and is never built
/// through [`DateRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive)
    pub start: Option<NaiveDate>,
    /// Last day of the range (inclusive)
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Build a closed range, rejecting reversed endpoints
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Reversed { start, end });
        }
        Ok(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    /// Build a closed range from two dates in any order
    pub fn ordered(a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// The unbounded "all time" range
    pub const fn all_time() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn is_all_time(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether this value may be handed to a consumer: either all time or a
    /// closed, ordered range.
    pub fn is_resolved(&self) -> bool {
        match (self.start, self.end) {
            (None, None) => true,
            (Some(start), Some(end)) => start <= end,
            _ => false,
        }
    }

    /// Inclusive containment check; an all-time range contains every date
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (None, None) => true,
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    /// Number of days between start and end, if closed
    pub fn span_days(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DateRangeError {
    Reversed { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::Reversed { start, end } => {
                write!(f, "Range start {} is after end {}", start, end)
            }
        }
    }
}

impl std::error::Error for DateRangeError {}

/// Known span of years for which an account has data.
///
/// A missing bound means the year navigation is unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvailabilityBounds {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

impl AvailabilityBounds {
    pub fn new(min_year: Option<i32>, max_year: Option<i32>) -> Result<Self, BoundsError> {
        if let (Some(min), Some(max)) = (min_year, max_year) {
            if min > max {
                return Err(BoundsError::Inverted { min, max });
            }
        }
        Ok(Self { min_year, max_year })
    }

    pub const fn unbounded() -> Self {
        Self {
            min_year: None,
            max_year: None,
        }
    }

    /// Derive bounds from the dates an account has history for.
    /// An empty history yields unbounded navigation.
    pub fn from_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut min_year: Option<i32> = None;
        let mut max_year: Option<i32> = None;
        for date in dates {
            let year = date.year();
            min_year = Some(min_year.map_or(year, |min| min.min(year)));
            max_year = Some(max_year.map_or(year, |max| max.max(year)));
        }
        Self { min_year, max_year }
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.min_year.map_or(true, |min| year >= min) && self.max_year.map_or(true, |max| year <= max)
    }

    /// Number of years covered when both bounds are known
    pub fn year_count(&self) -> Option<i32> {
        match (self.min_year, self.max_year) {
            (Some(min), Some(max)) => Some(max - min + 1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundsError {
    Inverted { min: i32, max: i32 },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::Inverted { min, max } => {
                write!(f, "Minimum year {} is greater than maximum year {}", min, max)
            }
        }
    }
}

impl std::error::Error for BoundsError {}

/// Quick ranges offered next to the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangePreset {
    Last6Months,
    LastYear,
    Last2Years,
    AllTime,
}

impl RangePreset {
    /// Get all presets in display order
    pub fn all() -> [RangePreset; 4] {
        [
            RangePreset::Last6Months,
            RangePreset::LastYear,
            RangePreset::Last2Years,
            RangePreset::AllTime,
        ]
    }

    /// Days looked back from today, or `None` for all time
    pub fn lookback_days(&self) -> Option<i64> {
        match self {
            RangePreset::Last6Months => Some(180),
            RangePreset::LastYear => Some(365),
            RangePreset::Last2Years => Some(730),
            RangePreset::AllTime => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangePreset::Last6Months => "Last 6 months",
            RangePreset::LastYear => "Last year",
            RangePreset::Last2Years => "Last 2 years",
            RangePreset::AllTime => "All time",
        }
    }
}

/// One slot of a single-month calendar grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarCell {
    /// Empty padding before the first day of the month
    Blank,
    /// Actual day within the month
    Day(NaiveDate),
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day(date) => Some(*date),
        }
    }
}

/// Screen-space rectangle in CSS pixels, as reported by `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl LayoutRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Inner size of the browser window in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

/// Where the floating picker panel goes relative to its trigger
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionState {
    pub align_right: bool,
    pub open_upwards: bool,
    pub width: f64,
    /// Usable height in the chosen direction
    pub max_height: f64,
}

/// Account as listed in the account selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: String,
    pub name: String,
    /// First day with recorded data (YYYY-MM-DD)
    pub first_data_date: Option<NaiveDate>,
    /// Last day with recorded data (YYYY-MM-DD)
    pub last_data_date: Option<NaiveDate>,
}

impl AccountSummary {
    /// Year bounds for the date-range picker derived from the data span
    pub fn availability(&self) -> AvailabilityBounds {
        AvailabilityBounds::from_dates(self.first_data_date.into_iter().chain(self.last_data_date))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountListResponse {
    pub accounts: Vec<AccountSummary>,
}

/// Historical balance query for one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountHistoryRequest {
    pub account_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl AccountHistoryRequest {
    pub fn for_range(account_id: impl Into<String>, range: &DateRange) -> Self {
        Self {
            account_id: account_id.into(),
            start_date: range.start,
            end_date: range.end,
        }
    }

    /// Query string appended to the history endpoint
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(start) = self.start_date {
            params.push(format!("start={}", start.format("%Y-%m-%d")));
        }
        if let Some(end) = self.end_date {
            params.push(format!("end={}", end.format("%Y-%m-%d")));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountHistoryResponse {
    pub account_id: String,
    pub points: Vec<BalancePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_new_rejects_reversed() {
        assert!(DateRange::new(date(2025, 1, 5), date(2025, 1, 10)).is_ok());
        assert!(DateRange::new(date(2025, 1, 5), date(2025, 1, 5)).is_ok());

        let err = DateRange::new(date(2025, 1, 10), date(2025, 1, 5)).unwrap_err();
        assert!(err.to_string().contains("after end"));
    }

    #[test]
    fn test_date_range_ordered_swaps() {
        let range = DateRange::ordered(date(2025, 1, 10), date(2025, 1, 5));
        assert_eq!(range.start, Some(date(2025, 1, 5)));
        assert_eq!(range.end, Some(date(2025, 1, 10)));
        assert_eq!(range.span_days(), Some(5));
    }

    #[test]
    fn test_date_range_resolution() {
        assert!(DateRange::all_time().is_resolved());
        assert!(DateRange::default().is_all_time());

        let half_open = DateRange {
            start: Some(date(2025, 1, 5)),
            end: None,
        };
        assert!(!half_open.is_resolved());
        assert!(!half_open.contains(date(2025, 1, 5)));
    }

    #[test]
    fn test_date_range_contains_is_inclusive() {
        let range = DateRange::new(date(2025, 1, 5), date(2025, 1, 10)).unwrap();
        assert!(range.contains(date(2025, 1, 5)));
        assert!(range.contains(date(2025, 1, 10)));
        assert!(!range.contains(date(2025, 1, 11)));
        assert!(DateRange::all_time().contains(date(1999, 12, 31)));
    }

    #[test]
    fn test_date_range_serializes_as_iso_dates() {
        let range = DateRange::new(date(2025, 1, 5), date(2025, 1, 10)).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start":"2025-01-05","end":"2025-01-10"}"#);

        let all_time = serde_json::to_string(&DateRange::all_time()).unwrap();
        assert_eq!(all_time, r#"{"start":null,"end":null}"#);
    }

    #[test]
    fn test_availability_bounds_validation() {
        assert!(AvailabilityBounds::new(Some(2020), Some(2024)).is_ok());
        assert!(AvailabilityBounds::new(None, Some(2024)).is_ok());
        assert_eq!(
            AvailabilityBounds::new(Some(2025), Some(2020)),
            Err(BoundsError::Inverted { min: 2025, max: 2020 })
        );
    }

    #[test]
    fn test_availability_bounds_from_dates() {
        let bounds = AvailabilityBounds::from_dates(vec![
            date(2021, 6, 1),
            date(2019, 2, 14),
            date(2023, 12, 31),
        ]);
        assert_eq!(bounds.min_year, Some(2019));
        assert_eq!(bounds.max_year, Some(2023));
        assert_eq!(bounds.year_count(), Some(5));

        let empty = AvailabilityBounds::from_dates(Vec::new());
        assert_eq!(empty, AvailabilityBounds::unbounded());
        assert!(empty.contains_year(1900));
    }

    #[test]
    fn test_account_availability_uses_data_span() {
        let account = AccountSummary {
            id: "acct-1".to_string(),
            name: "Brokerage".to_string(),
            first_data_date: Some(date(2020, 3, 1)),
            last_data_date: Some(date(2024, 8, 30)),
        };
        let bounds = account.availability();
        assert_eq!(bounds.min_year, Some(2020));
        assert_eq!(bounds.max_year, Some(2024));
        assert!(!bounds.contains_year(2019));
    }

    #[test]
    fn test_preset_lookback_days() {
        assert_eq!(RangePreset::Last6Months.lookback_days(), Some(180));
        assert_eq!(RangePreset::LastYear.lookback_days(), Some(365));
        assert_eq!(RangePreset::Last2Years.lookback_days(), Some(730));
        assert_eq!(RangePreset::AllTime.lookback_days(), None);
        assert_eq!(RangePreset::all().len(), 4);
    }

    #[test]
    fn test_history_query_string() {
        let range = DateRange::new(date(2024, 6, 1), date(2025, 6, 1)).unwrap();
        let request = AccountHistoryRequest::for_range("acct-1", &range);
        assert_eq!(request.query_string(), "?start=2024-06-01&end=2025-06-01");

        let all_time = AccountHistoryRequest::for_range("acct-1", &DateRange::all_time());
        assert_eq!(all_time.query_string(), "");
    }

    #[test]
    fn test_layout_rect_dimensions() {
        let rect = LayoutRect::new(10.0, 20.0, 300.0, 40.0);
        assert_eq!(rect.right, 310.0);
        assert_eq!(rect.bottom, 60.0);
        assert_eq!(rect.width(), 300.0);
        assert_eq!(rect.height(), 40.0);
    }
}
