//! Exclusive left/right text-selection mode.

use crate::domain::{SelectionMode, Side};

/// The outcome of a side switch: `enabled` became selectable, `disabled`
/// stopped being selectable and any in-progress selection must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideSwitch {
    pub enabled: Side,
    pub disabled: Side,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
    mode: SelectionMode,
}

impl SelectionController {
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Enables `side` for selection. Returns `None` when it already was.
    pub fn select(&mut self, side: Side) -> Option<SideSwitch> {
        if self.mode.allows(side) {
            return None;
        }
        self.mode = SelectionMode::for_side(side);
        log::debug!("text selection switched to the {side} column");
        Some(SideSwitch {
            enabled: side,
            disabled: side.other(),
        })
    }
}
