//! Date-range selection logic for the advisor dashboard.
//!
//! This crate contains every rule behind the dashboard's date-range picker:
//! building month grids, resolving quick presets, the two-click range
//! protocol, the year/month navigator and placement of the floating panel.
//! The UI only renders what the [`DateRangePicker`] controller exposes and
//! forwards user events back to it.
//!
//! ## Layout
//!
//! ```text
//! DateRangePicker (controller)
//!     ├── RangeSelection       two-click protocol
//!     ├── YearMonthNavigator   year grid → month grid overlay
//!     ├── presets              quick ranges
//!     ├── calendar_grid        month → cells
//!     └── positioning          panel placement, fed by a ViewportObserver
//! ```
//!
//! Nothing in here touches the DOM. Window measurement and resize listeners
//! sit behind the [`ViewportObserver`] trait so the frontend can plug in the
//! browser and tests can plug in a fake.

pub mod calendar_grid;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod labels;
pub mod positioning;
pub mod presets;
pub mod selection;
pub mod viewport;
pub mod year_navigator;

#[cfg(test)]
pub(crate) mod testing;

pub use calendar_grid::{build_month_grid, first_of_month, shift_month};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::PickerConfig;
pub use controller::{DateRangePicker, DayCell, GridCell, SelectionStage};
pub use error::PickerError;
pub use labels::{format_range_label, month_caption};
pub use positioning::compute_position;
pub use presets::resolve_preset;
pub use selection::{ClickOutcome, RangeSelection};
pub use viewport::{LayoutSnapshot, ViewportObserver};
pub use year_navigator::{NavigatorStage, ShiftDirection, YearMonthNavigator, YearWindow};
