//! # Year/Month Navigator
//!
//! Two-stage overlay that lets users jump far from the viewing month: first
//! a grid of twelve years, then a grid of twelve months for the chosen year.
//!
//! ## Year window clamping
//! - Bounds known on both sides and covering at most twelve years: the window
//!   starts at the minimum year and only the bounded years are shown.
//! - Otherwise the window is pushed back inside whichever bounds exist, so
//!   its edges never cross a known bound.
//!
//! The pending year only exists inside [`NavigatorStage::MonthGrid`], so a
//! hidden navigator cannot hold a stale year.

use chrono::{Datelike, Month, NaiveDate};
use shared::AvailabilityBounds;

/// Number of years shown at once in the year grid
pub const YEAR_WINDOW_SIZE: i32 = 12;

/// Twelve contiguous years `[start_year, start_year + 11]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    start_year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Backward,
    Forward,
}

impl YearWindow {
    /// Build a window starting near `start_year`, pulled inside `bounds`
    pub fn clamped(start_year: i32, bounds: &AvailabilityBounds) -> Self {
        if let (Some(min), Some(_)) = (bounds.min_year, bounds.max_year) {
            if bounds.year_count().is_some_and(|count| count <= YEAR_WINDOW_SIZE) {
                return Self { start_year: min };
            }
        }

        let mut start = start_year;
        if let Some(max) = bounds.max_year {
            start = start.min(max - (YEAR_WINDOW_SIZE - 1));
        }
        if let Some(min) = bounds.min_year {
            start = start.max(min);
        }
        Self { start_year: start }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + YEAR_WINDOW_SIZE - 1
    }

    /// Years of the window that may be picked under `bounds`
    pub fn selectable_years(&self, bounds: &AvailabilityBounds) -> Vec<i32> {
        (self.start_year..=self.end_year())
            .filter(|year| bounds.contains_year(*year))
            .collect()
    }

    pub fn can_shift_back(&self, bounds: &AvailabilityBounds) -> bool {
        bounds.min_year.map_or(true, |min| self.start_year > min)
    }

    pub fn can_shift_forward(&self, bounds: &AvailabilityBounds) -> bool {
        bounds.max_year.map_or(true, |max| self.end_year() < max)
    }

    /// The window one page over, clamped
    pub fn shifted(&self, direction: ShiftDirection, bounds: &AvailabilityBounds) -> Self {
        let delta = match direction {
            ShiftDirection::Backward => -YEAR_WINDOW_SIZE,
            ShiftDirection::Forward => YEAR_WINDOW_SIZE,
        };
        Self::clamped(self.start_year + delta, bounds)
    }
}

/// Which overlay, if any, covers the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigatorStage {
    #[default]
    Hidden,
    YearGrid { window: YearWindow },
    /// `window` is kept so going back shows the same page of years
    MonthGrid { window: YearWindow, pending_year: i32 },
}

#[derive(Debug, Clone)]
pub struct YearMonthNavigator {
    stage: NavigatorStage,
    bounds: AvailabilityBounds,
    window_lead: i32,
}

impl YearMonthNavigator {
    pub fn new(bounds: AvailabilityBounds, window_lead: i32) -> Self {
        Self {
            stage: NavigatorStage::Hidden,
            bounds,
            window_lead,
        }
    }

    pub fn stage(&self) -> NavigatorStage {
        self.stage
    }

    pub fn bounds(&self) -> AvailabilityBounds {
        self.bounds
    }

    pub fn is_active(&self) -> bool {
        self.stage != NavigatorStage::Hidden
    }

    /// Replace the availability bounds, re-clamping a visible window
    pub fn set_bounds(&mut self, bounds: AvailabilityBounds) {
        self.bounds = bounds;
        self.stage = match self.stage {
            NavigatorStage::Hidden => NavigatorStage::Hidden,
            NavigatorStage::YearGrid { window } => NavigatorStage::YearGrid {
                window: YearWindow::clamped(window.start_year(), &bounds),
            },
            // A pending year may now be out of bounds; fall back to the years
            NavigatorStage::MonthGrid { window, .. } => NavigatorStage::YearGrid {
                window: YearWindow::clamped(window.start_year(), &bounds),
            },
        };
    }

    /// Open the year grid around `viewing_month`, or close any open stage
    pub fn toggle(&mut self, viewing_month: NaiveDate) {
        if self.is_active() {
            self.hide();
            return;
        }

        let window = YearWindow::clamped(viewing_month.year() - self.window_lead, &self.bounds);
        log::debug!(
            "Year selection opened for {}, window {}..={}",
            viewing_month.year(),
            window.start_year(),
            window.end_year()
        );
        self.stage = NavigatorStage::YearGrid { window };
    }

    pub fn hide(&mut self) {
        self.stage = NavigatorStage::Hidden;
    }

    /// The year page currently on screen, in either stage
    pub fn window(&self) -> Option<YearWindow> {
        match self.stage {
            NavigatorStage::Hidden => None,
            NavigatorStage::YearGrid { window } | NavigatorStage::MonthGrid { window, .. } => {
                Some(window)
            }
        }
    }

    pub fn pending_year(&self) -> Option<i32> {
        match self.stage {
            NavigatorStage::MonthGrid { pending_year, .. } => Some(pending_year),
            _ => None,
        }
    }

    pub fn visible_years(&self) -> Vec<i32> {
        match self.stage {
            NavigatorStage::YearGrid { window } => window.selectable_years(&self.bounds),
            _ => Vec::new(),
        }
    }

    pub fn can_shift_back(&self) -> bool {
        match self.stage {
            NavigatorStage::YearGrid { window } => window.can_shift_back(&self.bounds),
            _ => false,
        }
    }

    pub fn can_shift_forward(&self) -> bool {
        match self.stage {
            NavigatorStage::YearGrid { window } => window.can_shift_forward(&self.bounds),
            _ => false,
        }
    }

    /// Page the year grid. Returns `false` when the window could not move.
    pub fn shift_window(&mut self, direction: ShiftDirection) -> bool {
        let NavigatorStage::YearGrid { window } = self.stage else {
            return false;
        };

        let shifted = window.shifted(direction, &self.bounds);
        if shifted == window {
            return false;
        }
        self.stage = NavigatorStage::YearGrid { window: shifted };
        true
    }

    /// Pick a year from the grid and move on to the months
    pub fn select_year(&mut self, year: i32) -> bool {
        let NavigatorStage::YearGrid { window } = self.stage else {
            return false;
        };

        if !window.selectable_years(&self.bounds).contains(&year) {
            log::warn!("Ignoring selection of unavailable year {}", year);
            return false;
        }
        self.stage = NavigatorStage::MonthGrid {
            window,
            pending_year: year,
        };
        true
    }

    /// Month buttons are only active once a year is pending
    pub fn month_enabled(&self) -> bool {
        self.pending_year().is_some()
    }

    /// Finish navigation on a month of the pending year.
    ///
    /// Returns the new viewing month; the navigator is hidden either way.
    pub fn select_month(&mut self, month: Month) -> Option<NaiveDate> {
        let pending_year = self.pending_year()?;
        self.hide();
        let viewing = NaiveDate::from_ymd_opt(pending_year, month.number_from_month(), 1);
        if viewing.is_none() {
            log::warn!("Year {} is outside the supported calendar", pending_year);
        }
        viewing
    }

    pub fn back_to_year_grid(&mut self) -> bool {
        let NavigatorStage::MonthGrid { window, .. } = self.stage else {
            return false;
        };
        self.stage = NavigatorStage::YearGrid { window };
        true
    }
}
