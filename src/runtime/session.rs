//! Keyboard session state: one reducer over pointer and timer events.
//!
//! All mutable session state lives here and changes only inside
//! `handle_event`; the host executes the returned effects in order on the
//! same event loop, so timer fires re-enter as ordinary events and stale
//! fires are rejected by state checks rather than assumed impossible.

use prefs_store::{PersistedPrefs, PrefsGateway};
use tracing::{debug, warn};

use crate::config::TimingConfig;
use crate::core::catalog::SectionSelector;
use crate::core::display::DisplayabilityOracle;
use crate::core::favorites::FavoritesStore;
use crate::core::glyphs::GlyphSetProvider;
use crate::runtime::drag::{
    DragEngine, DragSession, GridMetrics, HoldOutcome, InterruptOutcome, MoveOutcome,
    PressOutcome, ReleaseOutcome,
};
use crate::runtime::event::{Effect, Event, KeyIdentity, Point, TimerKind};
use crate::runtime::menu::{section_representatives, SectionMenu};

/// What the space bar currently reads. Doubles as the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLabel {
    Space,
    SectionName(String),
    /// A favorite is floating; dragging it off the grid resets the slot.
    DragHintReorder,
    /// A block glyph is floating; dragging it off the grid cancels.
    DragHintCandidate,
}

impl StatusLabel {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Space => "space",
            Self::SectionName(name) => name,
            Self::DragHintReorder => "Drag here for default.",
            Self::DragHintCandidate => "Drag here to cancel.",
        }
    }
}

pub struct KeyboardSession<P: PrefsGateway> {
    prefs: P,
    timing: TimingConfig,
    provider: GlyphSetProvider,
    favorites: FavoritesStore,
    selector: SectionSelector,
    glyphs: Vec<String>,
    columns: usize,
    scroll_offset: f32,
    dark_theme: bool,
    drag: DragEngine,
    menu: SectionMenu,
    label: StatusLabel,
    backspace_held: bool,
}

impl<P: PrefsGateway> KeyboardSession<P> {
    /// Loads persisted state once and derives the initial glyph set.
    pub fn new(
        prefs: P,
        oracle: Box<dyn DisplayabilityOracle>,
        metrics: GridMetrics,
        timing: TimingConfig,
    ) -> Self {
        let loaded = prefs.load();
        let favorites = FavoritesStore::from_persisted(loaded.favorites.clone())
            .unwrap_or_else(|| {
                warn!("persisted favorites unusable, falling back to factory defaults");
                FavoritesStore::default()
            });
        let selector = SectionSelector::from_persisted(&loaded);
        let provider = GlyphSetProvider::new(oracle);
        let glyphs = provider.current_glyphs(selector, &favorites);
        let columns = GlyphSetProvider::column_count(glyphs.len());

        Self {
            prefs,
            timing,
            provider,
            favorites,
            selector,
            glyphs,
            columns,
            scroll_offset: loaded.scroll_offset,
            dark_theme: loaded.dark_theme_enabled,
            drag: DragEngine::new(metrics),
            menu: SectionMenu::new(),
            label: StatusLabel::Space,
            backspace_held: false,
        }
    }

    /// Single entry point for pointer, timer, and lifecycle events.
    pub fn handle_event(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::PointerDown { key, position } => self.pointer_down(key, position),
            Event::PointerMoved { position } => self.pointer_moved(position),
            Event::PointerUp { key, .. } => self.pointer_up(key),
            Event::PointerCancelled | Event::SizeChanged => self.interruption(),
            Event::TimerFired(kind) => self.timer_fired(kind),
            Event::ScrollChanged(offset) => {
                self.scroll_offset = offset;
                Vec::new()
            }
            Event::Teardown => self.teardown(),
        }
    }

    // Accessors for the host's declarative layer.

    #[must_use]
    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn selector(&self) -> SectionSelector {
        self.selector
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[must_use]
    pub fn dark_theme(&self) -> bool {
        self.dark_theme
    }

    #[must_use]
    pub fn status_label(&self) -> &StatusLabel {
        &self.label
    }

    #[must_use]
    pub fn menu(&self) -> &SectionMenu {
        &self.menu
    }

    #[must_use]
    pub fn floating(&self) -> Option<&DragSession> {
        self.drag.floating()
    }

    /// The persistence gateway, for hosts that share it elsewhere.
    #[must_use]
    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn set_metrics(&mut self, metrics: GridMetrics) {
        self.drag.set_metrics(metrics);
    }

    fn pointer_down(&mut self, key: KeyIdentity, position: Point) -> Vec<Effect> {
        if self.menu.is_open() {
            // Glyph keys and the sections control are inert while the menu
            // is up; the bottom row stays live.
            return match key {
                KeyIdentity::Backspace => self.backspace_down(),
                _ => Vec::new(),
            };
        }

        match key {
            KeyIdentity::Glyph { index } => {
                let Some(glyph) = self.glyphs.get(index).cloned() else {
                    debug!(index, "press on key outside current glyph set");
                    return Vec::new();
                };
                match self
                    .drag
                    .press(index, glyph, self.selector.is_favorites(), position)
                {
                    PressOutcome::Armed { index } => vec![
                        Effect::CancelTimer(TimerKind::HoldPress),
                        Effect::ArmTimer {
                            kind: TimerKind::HoldPress,
                            after: self.timing.hold_press,
                        },
                        Effect::HighlightKey { index },
                    ],
                    PressOutcome::Ignored => Vec::new(),
                }
            }
            KeyIdentity::SectionsControl => vec![Effect::ArmTimer {
                kind: TimerKind::MenuHold,
                after: self.timing.menu_hold,
            }],
            KeyIdentity::Backspace => self.backspace_down(),
            KeyIdentity::SpaceBar
            | KeyIdentity::Return
            | KeyIdentity::MenuEntry { .. }
            | KeyIdentity::Outside => Vec::new(),
        }
    }

    fn backspace_down(&mut self) -> Vec<Effect> {
        self.backspace_held = true;
        vec![
            Effect::DeleteBackward,
            Effect::ArmTimer {
                kind: TimerKind::BackspaceRepeat,
                after: self.timing.backspace_initial,
            },
        ]
    }

    fn pointer_moved(&mut self, position: Point) -> Vec<Effect> {
        match self.drag.motion(position) {
            MoveOutcome::RestartDebounce => vec![
                Effect::CancelTimer(TimerKind::ReorderDebounce),
                Effect::ArmTimer {
                    kind: TimerKind::ReorderDebounce,
                    after: self.timing.reorder_debounce,
                },
            ],
            MoveOutcome::Tracking | MoveOutcome::Idle => Vec::new(),
        }
    }

    fn pointer_up(&mut self, key: KeyIdentity) -> Vec<Effect> {
        if self.menu.is_open() {
            return match key {
                KeyIdentity::MenuEntry { index } => {
                    match self.menu.select(index) {
                        Some(selector) => self.set_section(selector),
                        None => Vec::new(),
                    }
                }
                // The grid region and everything around it dismisses.
                KeyIdentity::Glyph { .. } | KeyIdentity::Outside => {
                    self.menu.dismiss();
                    Vec::new()
                }
                KeyIdentity::SpaceBar => vec![Effect::InsertText(" ".to_string())],
                KeyIdentity::Return => vec![Effect::InsertText("\n".to_string())],
                KeyIdentity::Backspace => self.backspace_up(),
                KeyIdentity::SectionsControl => Vec::new(),
            };
        }

        // The sections hold dies with the pointer, wherever the release
        // lands; only the menu-open branch above outlives it.
        let mut effects = vec![Effect::CancelTimer(TimerKind::MenuHold)];
        match self.drag.release(key, &mut self.favorites) {
            ReleaseOutcome::Tap { index, glyph } => {
                debug!(index, %glyph, "tap commit");
                effects.extend([
                    Effect::CancelTimer(TimerKind::HoldPress),
                    Effect::InsertText(glyph),
                    Effect::ArmTimer {
                        kind: TimerKind::HighlightClear,
                        after: self.timing.highlight_clear,
                    },
                ]);
            }
            ReleaseOutcome::PressCancelled => effects.extend([
                Effect::CancelTimer(TimerKind::HoldPress),
                Effect::ClearHighlight,
            ]),
            ReleaseOutcome::Replaced { index } => {
                debug!(index, "candidate dropped into favorites");
                self.refresh_glyphs();
                self.label = StatusLabel::Space;
                self.save_prefs();
                effects.extend([
                    Effect::CancelTimer(TimerKind::LabelReset),
                    Effect::ClearHighlight,
                ]);
            }
            ReleaseOutcome::DropCancelled => {
                self.label = StatusLabel::Space;
                effects.extend([
                    Effect::CancelTimer(TimerKind::LabelReset),
                    Effect::ClearHighlight,
                ]);
            }
            ReleaseOutcome::Reordered => {
                self.refresh_glyphs();
                self.label = StatusLabel::Space;
                self.save_prefs();
                effects.extend([
                    Effect::CancelTimer(TimerKind::ReorderDebounce),
                    Effect::CancelTimer(TimerKind::LabelReset),
                    Effect::ClearHighlight,
                ]);
            }
            ReleaseOutcome::Idle => match key {
                KeyIdentity::SectionsControl => {
                    effects.extend(self.set_section(GlyphSetProvider::advance(self.selector)));
                }
                KeyIdentity::Backspace => effects.extend(self.backspace_up()),
                KeyIdentity::SpaceBar => effects.push(Effect::InsertText(" ".to_string())),
                KeyIdentity::Return => effects.push(Effect::InsertText("\n".to_string())),
                _ => {}
            },
        }
        effects
    }

    fn backspace_up(&mut self) -> Vec<Effect> {
        self.backspace_held = false;
        vec![Effect::CancelTimer(TimerKind::BackspaceRepeat)]
    }

    fn timer_fired(&mut self, kind: TimerKind) -> Vec<Effect> {
        match kind {
            TimerKind::HoldPress => match self.drag.hold_fired() {
                HoldOutcome::Ignored => Vec::new(),
                HoldOutcome::PickedUp { forced_favorites } => {
                    self.backspace_held = false;
                    let mut effects = vec![Effect::CancelTimer(TimerKind::BackspaceRepeat)];
                    if forced_favorites {
                        effects.extend(self.set_section(SectionSelector::Favorites));
                        self.label = StatusLabel::DragHintCandidate;
                    } else {
                        self.label = StatusLabel::DragHintReorder;
                    }
                    effects
                }
            },
            TimerKind::ReorderDebounce => {
                if self.drag.debounce_fired(&mut self.favorites) {
                    // Provisional only: grid animates, nothing persisted yet.
                    self.refresh_glyphs();
                }
                Vec::new()
            }
            TimerKind::MenuHold => {
                if self.drag.is_idle() && !self.menu.is_open() {
                    self.menu
                        .open(section_representatives(&self.provider, &self.favorites));
                } else {
                    debug!("section menu refused: interaction in progress");
                }
                Vec::new()
            }
            TimerKind::BackspaceRepeat => {
                if self.backspace_held {
                    vec![
                        Effect::DeleteBackward,
                        Effect::ArmTimer {
                            kind: TimerKind::BackspaceRepeat,
                            after: self.timing.backspace_repeat,
                        },
                    ]
                } else {
                    Vec::new()
                }
            }
            TimerKind::HighlightClear => vec![Effect::ClearHighlight],
            TimerKind::LabelReset => {
                self.label = match self.drag.floating() {
                    Some(session) if session.favorite_origin => StatusLabel::DragHintReorder,
                    Some(_) => StatusLabel::DragHintCandidate,
                    None => StatusLabel::Space,
                };
                Vec::new()
            }
        }
    }

    /// Size change, pointer cancel: resolve any modal interaction and drop
    /// every armed interaction timer so stale fires cannot touch a
    /// torn-down session.
    fn interruption(&mut self) -> Vec<Effect> {
        match self.drag.interrupt(&mut self.favorites) {
            InterruptOutcome::Committed => {
                self.refresh_glyphs();
                self.save_prefs();
            }
            InterruptOutcome::Discarded => self.refresh_glyphs(),
            InterruptOutcome::Idle => {}
        }
        self.backspace_held = false;
        self.label = StatusLabel::Space;
        vec![
            Effect::CancelTimer(TimerKind::HoldPress),
            Effect::CancelTimer(TimerKind::ReorderDebounce),
            Effect::CancelTimer(TimerKind::MenuHold),
            Effect::CancelTimer(TimerKind::BackspaceRepeat),
            Effect::ClearHighlight,
        ]
    }

    /// View teardown: interruption handling plus the scroll offset
    /// checkpoint and the remaining timers.
    fn teardown(&mut self) -> Vec<Effect> {
        let mut effects = self.interruption();
        self.menu.dismiss();
        self.save_prefs();
        effects.extend([
            Effect::CancelTimer(TimerKind::HighlightClear),
            Effect::CancelTimer(TimerKind::LabelReset),
        ]);
        effects
    }

    /// Switches section: recomputes the glyph set and column count, resets
    /// scroll, shows the section name briefly, and persists the selector.
    fn set_section(&mut self, selector: SectionSelector) -> Vec<Effect> {
        self.selector = selector;
        self.scroll_offset = 0.0;
        self.refresh_glyphs();
        self.label =
            StatusLabel::SectionName(GlyphSetProvider::section_name(selector).to_string());
        self.save_prefs();
        vec![
            Effect::CancelTimer(TimerKind::LabelReset),
            Effect::ArmTimer {
                kind: TimerKind::LabelReset,
                after: self.timing.label_reset,
            },
        ]
    }

    fn refresh_glyphs(&mut self) {
        self.glyphs = self.provider.current_glyphs(self.selector, &self.favorites);
        self.columns = GlyphSetProvider::column_count(self.glyphs.len());
    }

    fn save_prefs(&mut self) {
        let (is_favorites, block_number) = self.selector.to_persisted();
        let prefs = PersistedPrefs {
            is_favorites,
            block_number,
            favorites: self.favorites.to_vec(),
            scroll_offset: self.scroll_offset,
            dark_theme_enabled: self.dark_theme,
        };
        if let Err(err) = self.prefs.save(&prefs) {
            // Persistence failures never surface as user-visible errors.
            warn!(%err, "failed to persist keyboard preferences");
        }
    }
}
