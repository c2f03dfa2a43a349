mod error;
mod paths;
mod schema;
mod store;

pub use error::PrefsStoreError;
pub use paths::{prefs_path, PREFS_DIR, PREFS_FILE};
pub use schema::{default_favorites, PersistedPrefs, DEFAULT_FAVORITES, FAVORITES_LEN};
pub use store::{FilePrefsStore, MemoryPrefsStore, PrefsGateway};
