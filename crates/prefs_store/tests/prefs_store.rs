use prefs_store::{
    default_favorites, prefs_path, FilePrefsStore, PersistedPrefs, PrefsGateway, PrefsStoreError,
    FAVORITES_LEN,
};

fn sample_prefs() -> PersistedPrefs {
    let mut favorites = default_favorites();
    favorites[4] = "✪".to_string();
    PersistedPrefs {
        is_favorites: false,
        block_number: 3,
        favorites,
        scroll_offset: 141.5,
        dark_theme_enabled: true,
    }
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = FilePrefsStore::new(prefs_path(dir.path()));

    let prefs = sample_prefs();
    store.save(&prefs).expect("save prefs");
    assert_eq!(store.load(), prefs);
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("deep").join("nested").join("prefs.json");
    let mut store = FilePrefsStore::new(&path);

    store.save(&sample_prefs()).expect("save prefs");
    assert!(path.exists());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FilePrefsStore::new(prefs_path(dir.path()));

    assert_eq!(store.load(), PersistedPrefs::default());
    assert!(matches!(
        store.load_strict(),
        Err(PrefsStoreError::Io { .. })
    ));
}

#[test]
fn corrupt_file_loads_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = prefs_path(dir.path());
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(&path, "{not json").expect("write corrupt file");

    let store = FilePrefsStore::new(&path);
    assert_eq!(store.load(), PersistedPrefs::default());
    assert!(matches!(
        store.load_strict(),
        Err(PrefsStoreError::Parse { .. })
    ));
}

#[test]
fn unknown_fields_are_rejected_and_fall_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = prefs_path(dir.path());
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(
        &path,
        r#"{"is_favorites":true,"block_number":0,"favorites":[],"scroll_offset":0.0,"dark_theme_enabled":false,"surprise":1}"#,
    )
    .expect("write file");

    let store = FilePrefsStore::new(&path);
    assert_eq!(store.load(), PersistedPrefs::default());
}

#[test]
fn wrong_length_favorites_replaced_wholesale_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = FilePrefsStore::new(prefs_path(dir.path()));

    let mut prefs = sample_prefs();
    prefs.favorites.truncate(12);
    store.save(&prefs).expect("save prefs");

    let loaded = store.load();
    assert_eq!(loaded.favorites, default_favorites());
    assert_eq!(loaded.favorites.len(), FAVORITES_LEN);
    // Remaining fields survive untouched.
    assert_eq!(loaded.block_number, prefs.block_number);
    assert!(loaded.dark_theme_enabled);
}
