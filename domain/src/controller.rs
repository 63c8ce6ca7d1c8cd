//! # Date Range Picker Controller
//!
//! Owns one picker instance: the open flag, the committed range, the pending
//! two-click gesture, the year/month navigator, the viewing month and the
//! panel position.
//!
//! ## Commit path
//! Presets, the second day click and clear all commit through
//! [`DateRangePicker::commit`], which reports the range to the consumer,
//! then closes the panel, then releases the viewport listeners, in that
//! order. Only resolved ranges ever reach the consumer.
//!
//! ## Closing
//! Closing hides the year/month overlay and drops the pending year, but a
//! half-finished gesture (start chosen, no end) survives and resumes on the
//! next open.

use chrono::{Month, NaiveDate};
use shared::{AvailabilityBounds, CalendarCell, DateRange, PositionState, RangePreset};

use crate::calendar_grid::{build_month_grid, first_of_month, shift_month};
use crate::clock::{Clock, SystemClock};
use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::labels::{format_range_label, month_caption};
use crate::positioning::compute_position;
use crate::presets::resolve_preset;
use crate::selection::{ClickOutcome, RangeSelection};
use crate::viewport::ViewportObserver;
use crate::year_navigator::{NavigatorStage, ShiftDirection, YearMonthNavigator, YearWindow};

/// What the panel is showing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStage {
    Closed,
    Calendar,
    YearGrid,
    MonthGrid,
}

/// Highlight state of one day button.
///
/// The flags overlap freely; renderers give selection and range styling
/// precedence over the today marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub selected: bool,
    pub in_range: bool,
    pub today: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Blank,
    Day(DayCell),
}

type CommitCallback = Box<dyn FnMut(DateRange)>;

pub struct DateRangePicker<O: ViewportObserver, C: Clock = SystemClock> {
    config: PickerConfig,
    observer: O,
    clock: C,
    on_change: CommitCallback,
    committed: DateRange,
    selection: RangeSelection,
    navigator: YearMonthNavigator,
    viewing_month: NaiveDate,
    is_open: bool,
    position: Option<PositionState>,
}

impl<O: ViewportObserver, C: Clock> DateRangePicker<O, C> {
    /// Create a closed picker showing the current month with nothing committed
    pub fn new<F>(observer: O, clock: C, on_change: F) -> Self
    where
        F: FnMut(DateRange) + 'static,
    {
        let config = PickerConfig::default();
        let viewing_month = first_of_month(clock.today());
        Self {
            navigator: YearMonthNavigator::new(AvailabilityBounds::unbounded(), config.year_window_lead),
            config,
            observer,
            clock,
            on_change: Box::new(on_change),
            committed: DateRange::all_time(),
            selection: RangeSelection::NoSelection,
            viewing_month,
            is_open: false,
            position: None,
        }
    }

    pub fn with_config(mut self, config: PickerConfig) -> Result<Self, PickerError> {
        config.validate()?;
        self.navigator = YearMonthNavigator::new(self.navigator.bounds(), config.year_window_lead);
        self.config = config;
        Ok(self)
    }

    /// Start from a range the consumer already holds; the grid opens on its first month
    pub fn with_committed_range(mut self, range: DateRange) -> Result<Self, PickerError> {
        self.set_committed_range(range)?;
        if let Some(start) = range.start {
            self.viewing_month = first_of_month(start);
        }
        Ok(self)
    }

    pub fn with_bounds(mut self, bounds: AvailabilityBounds) -> Result<Self, PickerError> {
        self.set_availability_bounds(bounds)?;
        Ok(self)
    }

    // ---- visibility -------------------------------------------------------

    pub fn open(&mut self) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        self.observer.attach();
        self.recompute_position();
        log::debug!("Date range picker opened");
    }

    pub fn close(&mut self) {
        self.navigator.hide();
        if !self.is_open {
            return;
        }
        self.is_open = false;
        self.position = None;
        self.observer.detach();
        log::debug!("Date range picker closed");
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    // ---- user events ------------------------------------------------------

    pub fn on_preset_click(&mut self, preset: RangePreset) {
        let range = resolve_preset(preset, self.clock.today());
        log::info!("Preset '{}' resolved to {:?}", preset.label(), range);
        self.selection = RangeSelection::from_committed(&range);
        self.commit(range);
    }

    pub fn on_day_click(&mut self, date: NaiveDate) {
        match self.selection.click(date) {
            ClickOutcome::Started(_) => {}
            ClickOutcome::Completed(range) => self.commit(range),
        }
    }

    pub fn on_clear(&mut self) {
        let range = self.selection.clear();
        self.commit(range);
    }

    pub fn on_prev_month(&mut self) {
        self.viewing_month = shift_month(self.viewing_month, -1);
    }

    pub fn on_next_month(&mut self) {
        self.viewing_month = shift_month(self.viewing_month, 1);
    }

    /// Open or close the year/month overlay; ignored while the panel is closed
    pub fn on_toggle_year_selection(&mut self) {
        if !self.is_open {
            log::debug!("Year selection toggled while closed, ignoring");
            return;
        }
        self.navigator.toggle(self.viewing_month);
    }

    pub fn on_shift_year_window(&mut self, direction: ShiftDirection) -> bool {
        self.navigator.shift_window(direction)
    }

    pub fn on_select_year(&mut self, year: i32) -> bool {
        self.navigator.select_year(year)
    }

    pub fn on_select_month(&mut self, month: Month) -> bool {
        match self.navigator.select_month(month) {
            Some(viewing_month) => {
                log::debug!("Navigated to {}", month_caption(viewing_month));
                self.viewing_month = viewing_month;
                true
            }
            None => false,
        }
    }

    pub fn on_back_to_year_grid(&mut self) -> bool {
        self.navigator.back_to_year_grid()
    }

    /// Resize or orientation change reported by the observer
    pub fn on_layout_change(&mut self) {
        if !self.is_open {
            return;
        }
        self.recompute_position();
    }

    // ---- consumer inputs --------------------------------------------------

    /// Replace the committed range from outside, e.g. after an account switch.
    /// The consumer callback is not invoked.
    pub fn set_committed_range(&mut self, range: DateRange) -> Result<(), PickerError> {
        if !range.is_resolved() {
            return Err(PickerError::UnresolvedRange);
        }
        if range != self.committed {
            self.committed = range;
            self.selection = RangeSelection::from_committed(&range);
        }
        Ok(())
    }

    /// Replace the years with data. Inverted bounds are rejected and the
    /// previous bounds stay in place.
    pub fn set_availability_bounds(&mut self, bounds: AvailabilityBounds) -> Result<(), PickerError> {
        let bounds = AvailabilityBounds::new(bounds.min_year, bounds.max_year)?;
        if bounds != self.navigator.bounds() {
            log::debug!("Availability bounds changed to {:?}", bounds);
            self.navigator.set_bounds(bounds);
        }
        Ok(())
    }

    // ---- view state -------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn stage(&self) -> SelectionStage {
        if !self.is_open {
            return SelectionStage::Closed;
        }
        match self.navigator.stage() {
            NavigatorStage::Hidden => SelectionStage::Calendar,
            NavigatorStage::YearGrid { .. } => SelectionStage::YearGrid,
            NavigatorStage::MonthGrid { .. } => SelectionStage::MonthGrid,
        }
    }

    pub fn committed_range(&self) -> DateRange {
        self.committed
    }

    pub fn pending_selection(&self) -> RangeSelection {
        self.selection
    }

    pub fn viewing_month(&self) -> NaiveDate {
        self.viewing_month
    }

    pub fn caption(&self) -> String {
        month_caption(self.viewing_month)
    }

    pub fn label(&self) -> String {
        format_range_label(&self.committed, &self.config.placeholder)
    }

    pub fn position(&self) -> Option<PositionState> {
        self.position
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn year_window(&self) -> Option<YearWindow> {
        self.navigator.window()
    }

    pub fn visible_years(&self) -> Vec<i32> {
        self.navigator.visible_years()
    }

    pub fn can_shift_year_window_back(&self) -> bool {
        self.navigator.can_shift_back()
    }

    pub fn can_shift_year_window_forward(&self) -> bool {
        self.navigator.can_shift_forward()
    }

    pub fn pending_year(&self) -> Option<i32> {
        self.navigator.pending_year()
    }

    pub fn month_enabled(&self) -> bool {
        self.navigator.month_enabled()
    }

    /// Cells for the viewing month with highlight flags resolved
    pub fn grid(&self) -> Vec<GridCell> {
        let today = self.clock.today();
        build_month_grid(self.viewing_month)
            .into_iter()
            .map(|cell| match cell {
                CalendarCell::Blank => GridCell::Blank,
                CalendarCell::Day(date) => GridCell::Day(DayCell {
                    date,
                    selected: self.selection.is_selected(date),
                    in_range: self.selection.is_in_range(date),
                    today: date == today,
                }),
            })
            .collect()
    }

    // ---- internals --------------------------------------------------------

    fn commit(&mut self, range: DateRange) {
        if !range.is_resolved() {
            log::warn!("Refusing to commit unresolved range {:?}", range);
            return;
        }
        self.committed = range;
        log::info!("Committed date range {}", self.label());
        (self.on_change)(range);
        self.close();
    }

    fn recompute_position(&mut self) {
        match self.observer.measure() {
            Ok(layout) => self.position = Some(compute_position(&layout, &self.config)),
            Err(e) => log::warn!("Could not measure picker trigger: {}", e),
        }
    }
}

impl<O: ViewportObserver, C: Clock> Drop for DateRangePicker<O, C> {
    fn drop(&mut self) {
        if self.is_open {
            self.observer.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::testing::{EventLog, FakeViewportObserver, ObserverEvent};
    use chrono::Datelike;
    use proptest::prelude::*;
    use shared::{LayoutRect, ViewportSize};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    type TestPicker = DateRangePicker<FakeViewportObserver, FixedClock>;

    struct Harness {
        picker: TestPicker,
        commits: Rc<RefCell<Vec<DateRange>>>,
        log: EventLog,
    }

    fn harness(today: NaiveDate) -> Harness {
        let log = EventLog::default();
        let commits = Rc::new(RefCell::new(Vec::new()));
        let picker = {
            let commits = Rc::clone(&commits);
            let log = log.clone();
            DateRangePicker::new(FakeViewportObserver::new(log.clone()), FixedClock(today), move |range| {
                commits.borrow_mut().push(range);
                log.push(ObserverEvent::Commit);
            })
        };
        Harness { picker, commits, log }
    }

    #[test]
    fn test_starts_closed_on_current_month() {
        let h = harness(date(2025, 6, 17));
        assert_eq!(h.picker.stage(), SelectionStage::Closed);
        assert_eq!(h.picker.viewing_month(), date(2025, 6, 1));
        assert_eq!(h.picker.committed_range(), DateRange::all_time());
        assert_eq!(h.picker.label(), "All time");
        assert!(h.picker.position().is_none());
    }

    #[test]
    fn test_committed_range_sets_viewing_month() {
        let range = DateRange::new(date(2024, 2, 10), date(2024, 5, 1)).unwrap();
        let h = harness(date(2025, 6, 17));
        let picker = h.picker.with_committed_range(range).unwrap();
        assert_eq!(picker.viewing_month(), date(2024, 2, 1));
        assert_eq!(picker.label(), "Feb 10, 2024 – May 1, 2024");
    }

    #[test]
    fn test_two_clicks_commit_swapped_range_and_close() {
        let mut h = harness(date(2025, 6, 17));
        h.picker.open();
        h.picker.on_day_click(date(2025, 1, 10));
        assert!(h.commits.borrow().is_empty());
        assert!(h.picker.is_open());

        h.picker.on_day_click(date(2025, 1, 5));
        let expected = DateRange::new(date(2025, 1, 5), date(2025, 1, 10)).unwrap();
        assert_eq!(*h.commits.borrow(), vec![expected]);
        assert_eq!(h.picker.committed_range(), expected);
        assert_eq!(h.picker.stage(), SelectionStage::Closed);
    }

    #[test]
    fn test_commit_precedes_listener_teardown() {
        let mut h = harness(date(2025, 6, 17));
        h.picker.open();
        h.picker.on_day_click(date(2025, 3, 1));
        h.picker.on_day_click(date(2025, 3, 9));
        assert_eq!(
            h.log.events(),
            vec![ObserverEvent::Attach, ObserverEvent::Commit, ObserverEvent::Detach]
        );
    }

    #[test]
    fn test_preset_commits_and_closes() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.open();
        h.picker.on_preset_click(RangePreset::LastYear);
        let expected = DateRange::new(date(2024, 6, 1), date(2025, 6, 1)).unwrap();
        assert_eq!(*h.commits.borrow(), vec![expected]);
        assert!(!h.picker.is_open());
        assert!(h.picker.pending_selection().is_in_range(date(2024, 12, 25)));
    }

    #[test]
    fn test_all_time_preset_commits_unbounded() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.open();
        h.picker.on_preset_click(RangePreset::AllTime);
        assert_eq!(*h.commits.borrow(), vec![DateRange::all_time()]);
        assert_eq!(h.picker.pending_selection(), RangeSelection::NoSelection);
    }

    #[test]
    fn test_preset_interrupts_gesture() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.open();
        h.picker.on_day_click(date(2025, 2, 1));
        h.picker.on_preset_click(RangePreset::Last6Months);
        assert_eq!(h.commits.borrow().len(), 1);

        // Next click starts a fresh gesture instead of completing the old one
        h.picker.open();
        h.picker.on_day_click(date(2025, 3, 1));
        assert_eq!(h.commits.borrow().len(), 1);
    }

    #[test]
    fn test_clear_commits_all_time() {
        let range = DateRange::new(date(2025, 1, 5), date(2025, 1, 10)).unwrap();
        let mut h = harness(date(2025, 6, 1));
        h.picker.set_committed_range(range).unwrap();
        h.picker.open();
        h.picker.on_clear();
        assert_eq!(*h.commits.borrow(), vec![DateRange::all_time()]);
        assert_eq!(h.picker.committed_range(), DateRange::all_time());
        assert!(!h.picker.is_open());
    }

    #[test]
    fn test_close_mid_gesture_keeps_pending_start() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.open();
        h.picker.on_day_click(date(2025, 4, 2));
        h.picker.close();
        assert!(h.commits.borrow().is_empty());
        assert_eq!(h.picker.pending_selection(), RangeSelection::StartChosen(date(2025, 4, 2)));

        h.picker.open();
        h.picker.on_day_click(date(2025, 4, 20));
        assert_eq!(
            *h.commits.borrow(),
            vec![DateRange::new(date(2025, 4, 2), date(2025, 4, 20)).unwrap()]
        );
    }

    #[test]
    fn test_month_navigation_leaves_selection_alone() {
        let mut h = harness(date(2025, 1, 15));
        h.picker.open();
        h.picker.on_day_click(date(2025, 1, 20));
        h.picker.on_prev_month();
        assert_eq!(h.picker.viewing_month(), date(2024, 12, 1));
        h.picker.on_next_month();
        h.picker.on_next_month();
        assert_eq!(h.picker.viewing_month(), date(2025, 2, 1));
        assert_eq!(h.picker.pending_selection(), RangeSelection::StartChosen(date(2025, 1, 20)));
    }

    #[test]
    fn test_viewing_month_is_not_clamped_to_bounds() {
        let mut h = harness(date(2024, 12, 15));
        h.picker
            .set_availability_bounds(AvailabilityBounds::new(Some(2020), Some(2024)).unwrap())
            .unwrap();
        h.picker.on_next_month();
        assert_eq!(h.picker.viewing_month(), date(2025, 1, 1));
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let mut h = harness(date(2025, 6, 1));
        let good = AvailabilityBounds::new(Some(2020), Some(2024)).unwrap();
        h.picker.set_availability_bounds(good).unwrap();

        // Deserialized bounds skip the validating constructor
        let inverted: AvailabilityBounds =
            serde_json::from_str(r#"{"min_year":2025,"max_year":2020}"#).unwrap();
        assert!(matches!(
            h.picker.set_availability_bounds(inverted),
            Err(PickerError::Bounds(_))
        ));

        h.picker.open();
        h.picker.on_toggle_year_selection();
        assert_eq!(h.picker.visible_years(), vec![2020, 2021, 2022, 2023, 2024]);

        let rejected = harness(date(2025, 6, 1)).picker.with_bounds(inverted);
        assert!(matches!(rejected, Err(PickerError::Bounds(_))));
    }

    #[test]
    fn test_year_month_navigation_scenario() {
        let mut h = harness(date(2025, 6, 1));
        h.picker
            .set_availability_bounds(AvailabilityBounds::new(Some(2020), Some(2024)).unwrap())
            .unwrap();
        h.picker.open();
        while h.picker.viewing_month() != date(2023, 3, 1) {
            h.picker.on_prev_month();
        }

        h.picker.on_toggle_year_selection();
        assert_eq!(h.picker.stage(), SelectionStage::YearGrid);
        assert_eq!(h.picker.visible_years(), vec![2020, 2021, 2022, 2023, 2024]);
        assert!(!h.picker.can_shift_year_window_back());
        assert!(!h.picker.can_shift_year_window_forward());
        assert!(!h.picker.month_enabled());

        assert!(h.picker.on_select_year(2021));
        assert_eq!(h.picker.stage(), SelectionStage::MonthGrid);
        assert!(h.picker.month_enabled());

        assert!(h.picker.on_select_month(Month::November));
        assert_eq!(h.picker.stage(), SelectionStage::Calendar);
        assert_eq!(h.picker.viewing_month(), date(2021, 11, 1));
        assert_eq!(h.picker.pending_year(), None);
        assert!(h.commits.borrow().is_empty());
    }

    #[test]
    fn test_year_toggle_ignored_while_closed() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.on_toggle_year_selection();
        h.picker.open();
        assert_eq!(h.picker.stage(), SelectionStage::Calendar);
    }

    #[test]
    fn test_close_resets_overlay() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.open();
        h.picker.on_toggle_year_selection();
        h.picker.on_select_year(2022);
        h.picker.close();
        assert_eq!(h.picker.pending_year(), None);

        h.picker.open();
        assert_eq!(h.picker.stage(), SelectionStage::Calendar);
        assert!(h.picker.year_window().is_none());
    }

    #[test]
    fn test_bounds_change_applies_on_next_open() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.open();
        h.picker.on_toggle_year_selection();
        assert_eq!(h.picker.year_window().unwrap().start_year(), 2020);
        h.picker.close();

        h.picker
            .set_availability_bounds(AvailabilityBounds::new(Some(2022), Some(2025)).unwrap())
            .unwrap();
        h.picker.open();
        h.picker.on_toggle_year_selection();
        assert_eq!(h.picker.year_window().unwrap().start_year(), 2022);
        assert_eq!(h.picker.visible_years(), vec![2022, 2023, 2024, 2025]);
    }

    #[test]
    fn test_open_measures_and_listens() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.open();
        assert!(h.picker.observer().is_attached());
        let position = h.picker.position().unwrap();
        assert!(!position.open_upwards);
        assert!(!position.align_right);
    }

    #[test]
    fn test_layout_change_recomputes_only_while_open() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.open();
        h.picker.observer().set_layout(Ok(crate::LayoutSnapshot {
            trigger: LayoutRect::new(100.0, 700.0, 300.0, 40.0),
            viewport: ViewportSize { width: 1280.0, height: 800.0 },
            boundary: None,
        }));
        h.picker.on_layout_change();
        assert!(h.picker.position().unwrap().open_upwards);

        h.picker.close();
        assert!(!h.picker.observer().is_attached());
        let measured = h.picker.observer().measure_count();
        h.picker.on_layout_change();
        assert_eq!(h.picker.observer().measure_count(), measured);
        assert!(h.picker.position().is_none());
    }

    #[test]
    fn test_repeated_layout_changes_keep_position() {
        let mut h = harness(date(2025, 6, 1));
        // 500px window: 200px below the trigger, 140px above, both under the minimum
        h.picker.observer().set_layout(Ok(crate::LayoutSnapshot {
            trigger: LayoutRect::new(100.0, 200.0, 300.0, 40.0),
            viewport: ViewportSize { width: 1280.0, height: 500.0 },
            boundary: None,
        }));
        h.picker.open();
        let first = h.picker.position().unwrap();
        assert!(!first.open_upwards);
        assert_eq!(first.max_height, 200.0);

        for _ in 0..5 {
            h.picker.on_layout_change();
            assert_eq!(h.picker.position(), Some(first));
        }
    }

    #[test]
    fn test_unmeasurable_trigger_keeps_last_position() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.open();
        let before = h.picker.position();
        h.picker.observer().set_layout(Err(PickerError::TriggerNotMounted));
        h.picker.on_layout_change();
        assert_eq!(h.picker.position(), before);
    }

    #[test]
    fn test_unreadable_window_size_keeps_last_position() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.open();
        let before = h.picker.position();
        assert!(before.unwrap().width > 0.0);
        h.picker.observer().set_layout(Err(PickerError::ViewportUnavailable(
            "could not read window.innerWidth".to_string(),
        )));
        h.picker.on_layout_change();
        assert_eq!(h.picker.position(), before);
        assert_eq!(h.picker.observer().measure_count(), 2);
    }

    #[test]
    fn test_drop_while_open_detaches() {
        let h = harness(date(2025, 6, 1));
        let log = h.log.clone();
        let mut picker = h.picker;
        picker.open();
        drop(picker);
        assert_eq!(log.events(), vec![ObserverEvent::Attach, ObserverEvent::Detach]);
    }

    #[test]
    fn test_repeated_open_attaches_once() {
        let mut h = harness(date(2025, 6, 1));
        h.picker.open();
        h.picker.open();
        h.picker.toggle();
        h.picker.close();
        assert_eq!(h.log.events(), vec![ObserverEvent::Attach, ObserverEvent::Detach]);
    }

    #[test]
    fn test_external_range_does_not_call_back() {
        let mut h = harness(date(2025, 6, 1));
        let range = DateRange::new(date(2023, 1, 1), date(2023, 12, 31)).unwrap();
        h.picker.set_committed_range(range).unwrap();
        assert!(h.commits.borrow().is_empty());
        assert_eq!(h.picker.committed_range(), range);

        let half_open = DateRange { start: Some(date(2023, 1, 1)), end: None };
        assert!(matches!(
            h.picker.set_committed_range(half_open),
            Err(PickerError::UnresolvedRange)
        ));
    }

    #[test]
    fn test_grid_highlights() {
        let mut h = harness(date(2025, 1, 8));
        h.picker.open();
        h.picker.on_day_click(date(2025, 1, 5));
        h.picker.on_day_click(date(2025, 1, 10));

        let days: Vec<DayCell> = h
            .picker
            .grid()
            .into_iter()
            .filter_map(|cell| match cell {
                GridCell::Day(day) => Some(day),
                GridCell::Blank => None,
            })
            .collect();
        assert_eq!(days.len(), 31);

        let jan = |d: u32| days[(d - 1) as usize];
        assert!(jan(5).selected && jan(5).in_range);
        assert!(!jan(7).selected && jan(7).in_range);
        assert!(jan(8).today && jan(8).in_range);
        assert!(!jan(11).in_range && !jan(11).selected);
    }

    #[test]
    fn test_custom_config_changes_window_lead() {
        let config = PickerConfig {
            year_window_lead: 0,
            placeholder: "Any time".to_string(),
            ..PickerConfig::default()
        };
        let mut picker = harness(date(2025, 6, 1)).picker.with_config(config).unwrap();
        assert_eq!(picker.label(), "Any time");
        picker.open();
        picker.on_toggle_year_selection();
        assert_eq!(picker.year_window().unwrap().start_year(), picker.viewing_month().year());
    }

    proptest! {
        #[test]
        fn layout_changes_do_not_oscillate(
            top in 0.0f64..760.0,
            height in 300.0f64..800.0,
            repeats in 1usize..6,
        ) {
            let mut h = harness(date(2025, 6, 1));
            h.picker.observer().set_layout(Ok(crate::LayoutSnapshot {
                trigger: LayoutRect::new(100.0, top, 300.0, 40.0),
                viewport: ViewportSize { width: 1280.0, height },
                boundary: None,
            }));
            h.picker.open();
            let first = h.picker.position();
            prop_assert!(first.is_some());
            for _ in 0..repeats {
                h.picker.on_layout_change();
                prop_assert_eq!(h.picker.position(), first);
            }
        }

        #[test]
        fn consumers_only_see_resolved_ranges(
            clicks in proptest::collection::vec((0i64..3_000, any::<bool>()), 1..20)
        ) {
            let mut h = harness(date(2025, 6, 1));
            for (offset, clear) in clicks {
                h.picker.open();
                if clear {
                    h.picker.on_clear();
                } else {
                    h.picker.on_day_click(date(2020, 1, 1) + chrono::Duration::days(offset));
                }
            }
            for range in h.commits.borrow().iter() {
                prop_assert!(range.is_resolved());
            }
        }
    }
}
