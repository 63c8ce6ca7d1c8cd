use shared::{LayoutRect, ViewportSize};

use crate::error::PickerError;

/// Everything the positioner needs from one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSnapshot {
    /// Bounding box of the button that opens the picker
    pub trigger: LayoutRect,
    pub viewport: ViewportSize,
    /// Bounding box of the closest enclosing dialog, if the picker lives in one
    pub boundary: Option<LayoutRect>,
}

/// Window measurement and resize notifications for one picker.
///
/// The controller attaches when its panel opens and detaches on every close
/// path. While attached, the implementation calls
/// [`DateRangePicker::on_layout_change`](crate::DateRangePicker::on_layout_change)
/// on `resize` and `orientationchange`.
pub trait ViewportObserver {
    fn measure(&self) -> Result<LayoutSnapshot, PickerError>;

    /// Start listening for resize and orientation changes
    fn attach(&mut self);

    /// Stop listening; must be safe to call when not attached
    fn detach(&mut self);
}
