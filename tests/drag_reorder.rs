
use fixture::{cell_center, Keyboard};
use glyphboard::{
    Event, FavoritesStore, KeyIdentity, PersistedPrefs, Point, SectionSelector, TimerKind,
};

fn prefs_with_slot(index: usize, glyph: &str) -> PersistedPrefs {
    let mut prefs = PersistedPrefs::default();
    prefs.favorites[index] = glyph.to_string();
    prefs
}

#[test]
fn tap_commits_glyph_and_briefly_keeps_highlight() {
    let mut kb = Keyboard::new();

    kb.press_glyph(3);
    assert_eq!(kb.highlight, Some(3));
    kb.advance(100);
    kb.up(KeyIdentity::Glyph { index: 3 }, cell_center(3));

    assert_eq!(kb.inserted, vec!["❛".to_string()]);
    assert_eq!(kb.highlight, Some(3), "highlight lingers after commit");
    kb.advance(100);
    assert_eq!(kb.highlight, None);

    // The hold timer was cancelled: nothing floats later.
    kb.advance(1000);
    assert!(kb.session.floating().is_none());
}

#[test]
fn release_off_the_key_commits_nothing() {
    let mut kb = Keyboard::new();

    kb.press_glyph(3);
    kb.up(KeyIdentity::Outside, Point::new(200.0, 140.0));

    assert!(kb.inserted.is_empty());
    assert_eq!(kb.highlight, None);
}

#[test]
fn second_press_rearms_the_hold_for_the_new_key() {
    let mut kb = Keyboard::new();

    kb.press_glyph(3);
    kb.advance(300);
    kb.press_glyph(7);
    kb.advance(300);
    assert!(kb.session.floating().is_none(), "hold re-armed at second press");

    kb.advance(200);
    let session = kb.session.floating().expect("second key picked up");
    assert_eq!(session.origin_index, 7);
    assert_eq!(session.glyph, "≠");
}

#[test]
fn block_pickup_forces_favorites_and_drop_replaces_slot() {
    let initial = PersistedPrefs {
        is_favorites: false,
        block_number: 0,
        ..PersistedPrefs::default()
    };
    let mut kb = Keyboard::with_initial(initial);
    assert_eq!(kb.session.selector(), SectionSelector::Block(0));
    let picked = kb.session.glyphs()[5].clone();

    kb.press_glyph(5);
    kb.advance(500);

    assert_eq!(kb.session.selector(), SectionSelector::Favorites);
    assert_eq!(kb.session.status_label().text(), "Drag here to cancel.");
    let saved = kb.last_saved().expect("section change persisted");
    assert!(saved.is_favorites);

    kb.move_to(cell_center(12));
    kb.up(KeyIdentity::Outside, cell_center(12));

    assert_eq!(kb.session.favorites().get(12), Ok(picked.as_str()));
    assert!(kb.session.floating().is_none());
    let saved = kb.last_saved().expect("favorites persisted on drop");
    assert_eq!(saved.favorites[12], picked);
    assert_eq!(kb.session.status_label().text(), "space");
}

#[test]
fn block_pickup_dropped_off_grid_is_discarded() {
    let initial = PersistedPrefs {
        is_favorites: false,
        block_number: 0,
        ..PersistedPrefs::default()
    };
    let mut kb = Keyboard::with_initial(initial);
    let defaults = FavoritesStore::default();

    kb.press_glyph(5);
    kb.advance(500);
    let saves_after_pickup = kb.saved().len();

    kb.move_to(Point::new(50.0, 140.0));
    kb.up(KeyIdentity::SpaceBar, Point::new(50.0, 140.0));

    assert_eq!(kb.session.favorites(), &defaults);
    assert_eq!(
        kb.saved().len(),
        saves_after_pickup,
        "cancelled drop persists nothing"
    );
}

#[test]
fn rapid_movement_coalesces_into_one_provisional_reorder() {
    let mut kb = Keyboard::new();
    let defaults = FavoritesStore::default();

    kb.press_glyph(5);
    kb.advance(500);
    assert_eq!(kb.session.status_label().text(), "Drag here for default.");

    // Ten move events across five distinct cells, all inside the debounce
    // window.
    for cell in [8, 8, 2, 2, 14, 14, 27, 27, 9, 9] {
        kb.move_to(cell_center(cell));
    }
    assert_eq!(
        kb.session.favorites(),
        &defaults,
        "no provisional commit before the dwell elapses"
    );

    kb.advance(300);
    // Exactly one provisional move, to the last cell.
    assert_eq!(kb.session.favorites().get(9), Ok("☥"));
    assert_eq!(kb.session.favorites().get(5), Ok("⚚"));
    assert!(kb.saved().is_empty(), "provisional reorders are not persisted");

    kb.up(KeyIdentity::Glyph { index: 9 }, cell_center(9));
    let saved = kb.last_saved().expect("finalized reorder persisted");
    assert_eq!(saved.favorites[9], "☥");
    assert_eq!(kb.session.favorites().as_slice().len(), 30);
}

#[test]
fn dragging_a_favorite_off_grid_resets_it_to_default() {
    let mut kb = Keyboard::with_initial(prefs_with_slot(5, "✖"));
    assert_eq!(kb.session.favorites().get(5), Ok("✖"));

    kb.press_glyph(5);
    kb.advance(500);
    kb.move_to(Point::new(50.0, 130.0));
    kb.move_to(Point::new(50.0, 140.0));
    kb.up(KeyIdentity::Outside, Point::new(50.0, 140.0));

    assert_eq!(kb.session.favorites().get(5), Ok("☥"), "slot back to factory");
    let saved = kb.last_saved().expect("reset persisted");
    assert_eq!(saved.favorites[5], "☥");
}

#[test]
fn size_change_finalizes_a_pending_reorder() {
    let mut kb = Keyboard::new();

    kb.press_glyph(5);
    kb.advance(500);
    kb.move_to(cell_center(9));
    kb.dispatch(Event::SizeChanged);

    assert!(kb.session.floating().is_none());
    assert_eq!(kb.session.favorites().get(9), Ok("☥"));
    let saved = kb.last_saved().expect("commit persisted");
    assert_eq!(saved.favorites[9], "☥");

    // Every interaction timer was cancelled; time passing changes nothing.
    let snapshot = kb.session.favorites().clone();
    let saves = kb.saved().len();
    kb.advance(2000);
    assert_eq!(kb.session.favorites(), &snapshot);
    assert_eq!(kb.saved().len(), saves);
}

#[test]
fn size_change_discards_a_floating_candidate() {
    let initial = PersistedPrefs {
        is_favorites: false,
        block_number: 0,
        ..PersistedPrefs::default()
    };
    let mut kb = Keyboard::with_initial(initial);
    let defaults = FavoritesStore::default();

    kb.press_glyph(5);
    kb.advance(500);
    let saves_after_pickup = kb.saved().len();
    kb.dispatch(Event::SizeChanged);

    assert!(kb.session.floating().is_none());
    assert_eq!(kb.session.favorites(), &defaults);
    assert_eq!(kb.saved().len(), saves_after_pickup);
}

#[test]
fn backspace_repeats_after_the_initial_hold() {
    let mut kb = Keyboard::new();

    kb.down(KeyIdentity::Backspace, Point::new(280.0, 140.0));
    assert_eq!(kb.deletes, 1, "immediate delete on press");

    kb.advance(650);
    assert_eq!(kb.deletes, 1);
    kb.advance(50);
    assert_eq!(kb.deletes, 2, "first repeat at 700ms");
    kb.advance(200);
    assert_eq!(kb.deletes, 4, "then every 100ms");

    kb.up(KeyIdentity::Backspace, Point::new(280.0, 140.0));
    kb.advance(500);
    assert_eq!(kb.deletes, 4, "release stops the repeat");
}

#[test]
fn space_and_return_insert_through_the_sink() {
    let mut kb = Keyboard::new();

    kb.down(KeyIdentity::SpaceBar, Point::new(160.0, 140.0));
    kb.up(KeyIdentity::SpaceBar, Point::new(160.0, 140.0));
    kb.down(KeyIdentity::Return, Point::new(310.0, 140.0));
    kb.up(KeyIdentity::Return, Point::new(310.0, 140.0));

    assert_eq!(kb.inserted, vec![" ".to_string(), "\n".to_string()]);
}

#[test]
fn stale_timer_fires_after_teardown_are_no_ops() {
    let mut kb = Keyboard::new();

    kb.press_glyph(3);
    kb.advance(100);
    kb.dispatch(Event::Teardown);
    assert!(!kb.is_armed(TimerKind::HoldPress));

    let snapshot = kb.session.favorites().clone();
    // A late fire delivered anyway must not mutate the torn-down session.
    kb.dispatch(Event::TimerFired(TimerKind::HoldPress));
    kb.dispatch(Event::TimerFired(TimerKind::ReorderDebounce));
    assert!(kb.session.floating().is_none());
    assert_eq!(kb.session.favorites(), &snapshot);
    assert!(kb.inserted.is_empty());
}
