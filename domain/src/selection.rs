//! Two-click range selection.
//!
//! The first click picks a start, the second click closes the range. Clicking
//! an earlier date second swaps the endpoints so the committed range is
//! always ordered. A click after a completed range starts over.

use chrono::NaiveDate;
use shared::DateRange;

/// Pending state of the range gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeSelection {
    #[default]
    NoSelection,
    StartChosen(NaiveDate),
    RangeComplete { start: NaiveDate, end: NaiveDate },
}

/// What a day click did to the gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A new gesture started at this date
    Started(NaiveDate),
    /// The gesture finished; this range is ready to commit
    Completed(DateRange),
}

impl RangeSelection {
    /// Pending state that mirrors an externally committed range
    pub fn from_committed(range: &DateRange) -> Self {
        match (range.start, range.end) {
            (Some(start), Some(end)) if start <= end => Self::RangeComplete { start, end },
            _ => Self::NoSelection,
        }
    }

    pub fn click(&mut self, date: NaiveDate) -> ClickOutcome {
        match *self {
            Self::NoSelection | Self::RangeComplete { .. } => {
                *self = Self::StartChosen(date);
                log::debug!("Range gesture started at {}", date);
                ClickOutcome::Started(date)
            }
            Self::StartChosen(start) => {
                let range = DateRange::ordered(start, date);
                if date < start {
                    log::debug!("Second click {} precedes start {}, swapping", date, start);
                }
                if let (Some(start), Some(end)) = (range.start, range.end) {
                    *self = Self::RangeComplete { start, end };
                }
                ClickOutcome::Completed(range)
            }
        }
    }

    /// Drop any pending endpoints; the caller commits the returned all-time range
    pub fn clear(&mut self) -> DateRange {
        *self = Self::NoSelection;
        DateRange::all_time()
    }

    pub fn pending_start(&self) -> Option<NaiveDate> {
        match *self {
            Self::NoSelection => None,
            Self::StartChosen(start) | Self::RangeComplete { start, .. } => Some(start),
        }
    }

    pub fn pending_end(&self) -> Option<NaiveDate> {
        match *self {
            Self::RangeComplete { end, .. } => Some(end),
            _ => None,
        }
    }

    /// Whether the date is one of the pending endpoints
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.pending_start() == Some(date) || self.pending_end() == Some(date)
    }

    /// Whether the date lies inside a complete pending range (inclusive)
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        match *self {
            Self::RangeComplete { start, end } => start <= date && date <= end,
            _ => false,
        }
    }
}
