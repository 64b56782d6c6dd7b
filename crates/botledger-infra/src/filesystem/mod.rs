//! Filesystem locations used by botledger.

use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "BOTLEDGER_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `BOTLEDGER_DATA_DIR` environment variable
/// 2. `~/.botledger` under the user's home directory
/// 3. `.botledger` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".botledger");
    }

    PathBuf::from(".botledger")
}
