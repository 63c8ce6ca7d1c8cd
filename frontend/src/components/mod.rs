pub mod account_selector;
pub mod date_range_picker;
