//! Placement of the floating picker panel.
//!
//! Horizontal: the panel is left-aligned with its trigger unless it would run
//! off the right edge and there is more room on the left.
//!
//! Vertical: the panel opens downwards unless the space below is short of
//! the preferred height and the space above is larger. If the chosen side is
//! still below the minimum and the other side is roomier, it flips. The
//! boundary is the enclosing dialog when there is one, the padded window
//! otherwise.

use shared::PositionState;

use crate::config::PickerConfig;
use crate::viewport::LayoutSnapshot;

/// Result of the vertical decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalPlacement {
    pub open_upwards: bool,
    /// Space left on the chosen side
    pub available: f64,
}

pub fn compute_position(layout: &LayoutSnapshot, config: &PickerConfig) -> PositionState {
    let trigger = layout.trigger;
    let viewport = layout.viewport;

    let width = trigger
        .width()
        .min(viewport.width - config.horizontal_padding)
        .max(0.0);

    let space_right = viewport.width - trigger.left;
    let space_left = trigger.right;
    let align_right = space_right < width && space_left > space_right;

    let (boundary_top, boundary_bottom) = match layout.boundary {
        Some(dialog) => (dialog.top, dialog.bottom),
        None => (
            config.viewport_padding,
            viewport.height - config.viewport_padding,
        ),
    };
    let space_below = boundary_bottom - trigger.bottom - config.panel_margin;
    let space_above = trigger.top - boundary_top - config.panel_margin;

    let vertical = choose_vertical(space_below, space_above, config);

    PositionState {
        align_right,
        open_upwards: vertical.open_upwards,
        width,
        max_height: vertical.available.max(0.0),
    }
}

/// Pick the side to open on from the space available on each
pub fn choose_vertical(space_below: f64, space_above: f64, config: &PickerConfig) -> VerticalPlacement {
    let mut open_upwards = space_below < config.preferred_space && space_above > space_below;

    let (chosen, other) = if open_upwards {
        (space_above, space_below)
    } else {
        (space_below, space_above)
    };
    if chosen < config.minimum_space && other > chosen {
        open_upwards = !open_upwards;
    }

    VerticalPlacement {
        open_upwards,
        available: if open_upwards { space_above } else { space_below },
    }
}
