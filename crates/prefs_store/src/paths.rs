use std::path::{Path, PathBuf};

pub const PREFS_DIR: &str = ".glyphboard";
pub const PREFS_FILE: &str = "prefs.json";

#[must_use]
pub fn prefs_path(base: &Path) -> PathBuf {
    base.join(PREFS_DIR).join(PREFS_FILE)
}
