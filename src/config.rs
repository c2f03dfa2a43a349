//! Timing configuration.
//!
//! Every interval the session arms lives here so hosts keep the shipping
//! values and tests can shrink them without touching the reducer.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Long-press threshold before a key is picked up.
    pub hold_press: Duration,
    /// Dwell on a new grid cell before a provisional reorder commits.
    pub reorder_debounce: Duration,
    /// Long-press threshold on the sections control.
    pub menu_hold: Duration,
    /// Delay before the first repeated backspace delete.
    pub backspace_initial: Duration,
    /// Interval between repeated backspace deletes.
    pub backspace_repeat: Duration,
    /// How long the tap highlight stays visible after commit.
    pub highlight_clear: Duration,
    /// How long the status label shows a section name.
    pub label_reset: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            hold_press: Duration::from_millis(500),
            reorder_debounce: Duration::from_millis(300),
            menu_hold: Duration::from_millis(300),
            backspace_initial: Duration::from_millis(700),
            backspace_repeat: Duration::from_millis(100),
            highlight_clear: Duration::from_millis(100),
            label_reset: Duration::from_millis(1500),
        }
    }
}
