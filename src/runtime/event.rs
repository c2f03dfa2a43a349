//! Event and effect vocabulary for the keyboard session reducer.

use std::time::Duration;

/// Screen position in the keyboard's coordinate space, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Identity of the control under a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIdentity {
    /// A glyph key, indexed into the currently visible glyph set.
    Glyph { index: usize },
    /// The sections control (tap advances, hold opens the quick-jump menu).
    SectionsControl,
    /// An entry in the open section menu.
    MenuEntry { index: usize },
    SpaceBar,
    Return,
    Backspace,
    /// Anything else: scroll background, gaps, outside the grid.
    Outside,
}

/// One-shot timers owned by this subsystem. Each kind has at most one armed
/// instance; a fire for a kind whose state moved on must be a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Long-press detection on a glyph key (500 ms).
    HoldPress,
    /// Dwell before a provisional favorites reorder commits (300 ms).
    ReorderDebounce,
    /// Long-press detection on the sections control (300 ms).
    MenuHold,
    /// Repeat backspace cadence (700 ms first, 100 ms after).
    BackspaceRepeat,
    /// Removes the tap highlight shortly after commit (100 ms).
    HighlightClear,
    /// Returns the status label to "space" after a section change (1.5 s).
    LabelReset,
}

/// Discrete input to the session reducer. All state changes flow through
/// these; timer fires re-enter as ordinary events on the same loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PointerDown { key: KeyIdentity, position: Point },
    PointerMoved { position: Point },
    PointerUp { key: KeyIdentity, position: Point },
    PointerCancelled,
    TimerFired(TimerKind),
    ScrollChanged(f32),
    /// Rotation / size-class change while the keyboard is up.
    SizeChanged,
    /// The keyboard view is going away.
    Teardown,
}

/// Side effects requested by a reducer step, executed by the host in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Commit text to the host document.
    InsertText(String),
    DeleteBackward,
    ArmTimer { kind: TimerKind, after: Duration },
    CancelTimer(TimerKind),
    /// Highlight the pressed glyph key.
    HighlightKey { index: usize },
    ClearHighlight,
}
