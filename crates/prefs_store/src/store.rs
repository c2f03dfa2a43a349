use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PrefsStoreError;
use crate::schema::PersistedPrefs;

/// Load/save boundary for keyboard preferences.
///
/// `load` never fails: absent or malformed storage resolves to sanitized
/// defaults. `save` reports I/O problems to the caller, which is free to
/// treat them as non-fatal.
pub trait PrefsGateway {
    fn load(&self) -> PersistedPrefs;
    fn save(&mut self, prefs: &PersistedPrefs) -> Result<(), PrefsStoreError>;
}

/// JSON-file-backed preferences store.
pub struct FilePrefsStore {
    path: PathBuf,
}

impl FilePrefsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Like [`PrefsGateway::load`] but surfaces the underlying failure
    /// instead of falling back to defaults.
    pub fn load_strict(&self) -> Result<PersistedPrefs, PrefsStoreError> {
        let data = fs::read_to_string(&self.path)
            .map_err(|source| PrefsStoreError::io("reading preferences file", &self.path, source))?;
        serde_json::from_str(&data).map_err(|source| PrefsStoreError::parse(&self.path, source))
    }
}

impl PrefsGateway for FilePrefsStore {
    fn load(&self) -> PersistedPrefs {
        self.load_strict().unwrap_or_default().sanitized()
    }

    fn save(&mut self, prefs: &PersistedPrefs) -> Result<(), PrefsStoreError> {
        let json = serde_json::to_string_pretty(prefs)
            .map_err(|source| PrefsStoreError::serialize(&self.path, source))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| {
                    PrefsStoreError::io("creating preferences directory", &self.path, source)
                })?;
            }
        }

        // Write-then-rename so a crash mid-save never leaves a torn file
        // behind for the next load.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, json)
            .map_err(|source| PrefsStoreError::io("writing staged preferences", &staging, source))?;
        fs::rename(&staging, &self.path)
            .map_err(|source| PrefsStoreError::io("replacing preferences file", &self.path, source))
    }
}

/// In-memory gateway that records every save, for tests and harnesses.
#[derive(Debug, Default)]
pub struct MemoryPrefsStore {
    initial: PersistedPrefs,
    saved: Vec<PersistedPrefs>,
}

impl MemoryPrefsStore {
    #[must_use]
    pub fn with_initial(initial: PersistedPrefs) -> Self {
        Self {
            initial,
            saved: Vec::new(),
        }
    }

    #[must_use]
    pub fn saved(&self) -> &[PersistedPrefs] {
        &self.saved
    }

    #[must_use]
    pub fn last_saved(&self) -> Option<&PersistedPrefs> {
        self.saved.last()
    }
}

impl PrefsGateway for MemoryPrefsStore {
    fn load(&self) -> PersistedPrefs {
        self.initial.clone().sanitized()
    }

    fn save(&mut self, prefs: &PersistedPrefs) -> Result<(), PrefsStoreError> {
        self.saved.push(prefs.clone());
        Ok(())
    }
}
