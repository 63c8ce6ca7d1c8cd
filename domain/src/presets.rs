use chrono::{Duration, NaiveDate};
use shared::{DateRange, RangePreset};

/// Resolve a quick-range preset against `today`.
///
/// Rolling presets end today and reach back a fixed number of days; all time
/// has no bounds.
pub fn resolve_preset(preset: RangePreset, today: NaiveDate) -> DateRange {
    match preset.lookback_days() {
        Some(days) => {
            let start = today
                .checked_sub_signed(Duration::days(days))
                .unwrap_or(NaiveDate::MIN);
            DateRange::ordered(start, today)
        }
        None => DateRange::all_time(),
    }
}
