//! Long-press / drag / drop state machine for glyph pickup and favorites
//! reorder.
//!
//! States: `Idle`, `PressPending` (hold timer armed), `Floating` (a glyph
//! follows the pointer). Timers live with the host; the engine only reports
//! outcomes that tell the session what to arm, cancel, or commit.

use tracing::debug;

use crate::core::favorites::{FavoritesStore, FAVORITES_LEN};
use crate::core::glyphs::{GRID_ROWS, MIN_COLUMNS};
use crate::runtime::event::{KeyIdentity, Point};

/// Size of the glyph grid area, used to map pointer positions onto the
/// fixed 10x3 favorites grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub width: f32,
    pub height: f32,
}

impl GridMetrics {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn cell_width(&self) -> f32 {
        self.width / MIN_COLUMNS as f32
    }

    fn cell_height(&self) -> f32 {
        self.height / GRID_ROWS as f32
    }

    /// Signed grid index for a point; positions off the grid map outside
    /// `0..30` and stay that way so bounds checks can reject them.
    #[must_use]
    pub fn grid_index(&self, point: Point) -> i32 {
        let column = (point.x / self.cell_width()).floor() as i32;
        let row = (point.y / self.cell_height()).floor() as i32;
        column + row * MIN_COLUMNS as i32
    }
}

fn in_favorites_bounds(index: i32) -> bool {
    (0..FAVORITES_LEN as i32).contains(&index)
}

/// A key is down and the hold timer is running.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPress {
    pub key_index: usize,
    pub glyph: String,
    pub from_favorites: bool,
    pub position: Point,
}

/// A picked-up glyph following the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub glyph: String,
    /// The slot the glyph was picked up from (`originKey` identity).
    pub origin_index: usize,
    /// Whether the pickup came from a favorites slot (reorder) or from a
    /// block (candidate to drop into favorites).
    pub favorite_origin: bool,
    /// Slot currently holding the glyph, tracked across provisional moves.
    current_slot: usize,
    pub center: Point,
    last_pointer: Point,
    pub current_grid_index: i32,
    pub previous_grid_index: i32,
    reorder_pending: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Interaction {
    Idle,
    PressPending(PendingPress),
    Floating(DragSession),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// Hold timer should be (re-)armed and the key highlighted.
    Armed { index: usize },
    /// A glyph is already floating; the press is not allowed to start a
    /// second session.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoldOutcome {
    /// Stale timer; nothing was pending.
    Ignored,
    PickedUp {
        /// True when the pickup came from a block and the section must
        /// switch to favorites.
        forced_favorites: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Idle,
    Tracking,
    /// The floating favorite entered a new cell; restart the debounce timer.
    RestartDebounce,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Idle,
    /// Press released before the hold fired: commit the glyph as text.
    Tap { index: usize, glyph: String },
    /// Press released off the pending key; nothing committed.
    PressCancelled,
    /// Candidate glyph dropped onto a favorites slot.
    Replaced { index: usize },
    /// Candidate glyph dropped off the grid; discarded.
    DropCancelled,
    /// Favorite-origin drag finalized (possibly a no-op move).
    Reordered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterruptOutcome {
    Idle,
    Discarded,
    /// A pending favorite reorder was finalized; favorites need persisting.
    Committed,
}

pub struct DragEngine {
    metrics: GridMetrics,
    interaction: Interaction,
}

impl DragEngine {
    #[must_use]
    pub fn new(metrics: GridMetrics) -> Self {
        Self {
            metrics,
            interaction: Interaction::Idle,
        }
    }

    pub fn set_metrics(&mut self, metrics: GridMetrics) {
        self.metrics = metrics;
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.interaction, Interaction::Idle)
    }

    #[must_use]
    pub fn is_press_pending(&self) -> bool {
        matches!(self.interaction, Interaction::PressPending(_))
    }

    #[must_use]
    pub fn is_floating(&self) -> bool {
        matches!(self.interaction, Interaction::Floating(_))
    }

    #[must_use]
    pub fn floating(&self) -> Option<&DragSession> {
        match &self.interaction {
            Interaction::Floating(session) => Some(session),
            _ => None,
        }
    }

    /// Pointer down on a glyph key. A second press while one is pending
    /// replaces it; a press while floating is refused.
    pub fn press(
        &mut self,
        key_index: usize,
        glyph: String,
        from_favorites: bool,
        position: Point,
    ) -> PressOutcome {
        if self.is_floating() {
            return PressOutcome::Ignored;
        }
        self.interaction = Interaction::PressPending(PendingPress {
            key_index,
            glyph,
            from_favorites,
            position,
        });
        PressOutcome::Armed { index: key_index }
    }

    /// The hold timer fired: pick the pending key up.
    pub fn hold_fired(&mut self) -> HoldOutcome {
        let Interaction::PressPending(press) = std::mem::replace(&mut self.interaction, Interaction::Idle)
        else {
            return HoldOutcome::Ignored;
        };

        let start_index = if press.from_favorites {
            press.key_index as i32
        } else {
            self.metrics.grid_index(press.position)
        };
        debug!(
            index = press.key_index,
            from_favorites = press.from_favorites,
            "glyph picked up"
        );
        self.interaction = Interaction::Floating(DragSession {
            glyph: press.glyph,
            origin_index: press.key_index,
            favorite_origin: press.from_favorites,
            current_slot: press.key_index,
            center: press.position,
            last_pointer: press.position,
            current_grid_index: start_index,
            previous_grid_index: start_index,
            reorder_pending: false,
        });
        HoldOutcome::PickedUp {
            forced_favorites: !press.from_favorites,
        }
    }

    /// Pointer motion. The floating glyph tracks by relative delta; the
    /// grid target is recomputed from the glyph's center.
    pub fn motion(&mut self, position: Point) -> MoveOutcome {
        let Interaction::Floating(session) = &mut self.interaction else {
            return MoveOutcome::Idle;
        };

        session.center.x += position.x - session.last_pointer.x;
        session.center.y += position.y - session.last_pointer.y;
        session.last_pointer = position;

        session.previous_grid_index = session.current_grid_index;
        session.current_grid_index = self.metrics.grid_index(session.center);

        if session.favorite_origin && session.current_grid_index != session.previous_grid_index {
            session.reorder_pending = true;
            MoveOutcome::RestartDebounce
        } else {
            MoveOutcome::Tracking
        }
    }

    /// The reorder debounce fired: apply at most one provisional move for
    /// however many cells the pointer crossed since arming.
    pub fn debounce_fired(&mut self, favorites: &mut FavoritesStore) -> bool {
        let Interaction::Floating(session) = &mut self.interaction else {
            return false;
        };
        if !session.favorite_origin || !session.reorder_pending {
            return false;
        }

        let target = if in_favorites_bounds(session.current_grid_index) {
            session.current_grid_index as usize
        } else {
            // Off the grid: the glyph snaps back to the slot it holds.
            session.current_slot
        };
        if let Err(err) = favorites.remove_and_reinsert(session.current_slot, target) {
            debug!(%err, "provisional reorder rejected");
            return false;
        }
        session.current_slot = target;
        session.reorder_pending = false;
        true
    }

    /// Pointer up: tap-commit, drop, or cancel depending on state.
    pub fn release(&mut self, key: KeyIdentity, favorites: &mut FavoritesStore) -> ReleaseOutcome {
        match std::mem::replace(&mut self.interaction, Interaction::Idle) {
            Interaction::Idle => ReleaseOutcome::Idle,
            Interaction::PressPending(press) => match key {
                KeyIdentity::Glyph { index } if index == press.key_index => ReleaseOutcome::Tap {
                    index,
                    glyph: press.glyph,
                },
                _ => ReleaseOutcome::PressCancelled,
            },
            Interaction::Floating(mut session) => {
                // Releasing directly on a key counts as dropping on that
                // slot, bypassing the position math.
                if let KeyIdentity::Glyph { index } = key {
                    if index < FAVORITES_LEN {
                        session.current_grid_index = index as i32;
                    }
                }

                if session.favorite_origin {
                    finalize_favorite(&mut session, favorites);
                    ReleaseOutcome::Reordered
                } else if in_favorites_bounds(session.current_grid_index) {
                    let index = session.current_grid_index as usize;
                    if let Err(err) = favorites.set(index, session.glyph.clone()) {
                        debug!(%err, "drop target rejected");
                        return ReleaseOutcome::DropCancelled;
                    }
                    ReleaseOutcome::Replaced { index }
                } else {
                    ReleaseOutcome::DropCancelled
                }
            }
        }
    }

    /// External interruption (size change, pointer cancel, teardown).
    /// Favorite-origin sessions with a pending provisional move finalize as
    /// a drop; everything else is discarded.
    pub fn interrupt(&mut self, favorites: &mut FavoritesStore) -> InterruptOutcome {
        match std::mem::replace(&mut self.interaction, Interaction::Idle) {
            Interaction::Idle => InterruptOutcome::Idle,
            Interaction::PressPending(_) => InterruptOutcome::Discarded,
            Interaction::Floating(mut session) => {
                if session.favorite_origin && session.reorder_pending {
                    finalize_favorite(&mut session, favorites);
                    InterruptOutcome::Committed
                } else {
                    InterruptOutcome::Discarded
                }
            }
        }
    }
}

/// Final commit for a favorite-origin drag: force the pending move, and if
/// the pointer's previous cell was off the grid, reset the slot content to
/// its factory default first (drag-off-and-release resets, it does not keep
/// the custom glyph).
fn finalize_favorite(session: &mut DragSession, favorites: &mut FavoritesStore) {
    let target = if in_favorites_bounds(session.current_grid_index) {
        session.current_grid_index as usize
    } else {
        session.current_slot
    };

    if !in_favorites_bounds(session.previous_grid_index) {
        match FavoritesStore::default_for(session.origin_index) {
            Ok(default) => {
                if let Err(err) = favorites.set(session.current_slot, default) {
                    debug!(%err, "default reset rejected");
                }
            }
            Err(err) => debug!(%err, "no factory default for origin slot"),
        }
    }

    if let Err(err) = favorites.remove_and_reinsert(session.current_slot, target) {
        debug!(%err, "final reorder rejected");
        return;
    }
    session.current_slot = target;
}
