mod config;
pub mod database;
mod memory;
mod snapshot;

pub use config::{Config, HabitsConfig, PomodoroConfig, UiConfig};
pub use database::Database;
pub use memory::MemoryStore;
pub use snapshot::{HabitStore, MarksStore, PersistedState, HABITS_KEY, STATE_KEY};

use std::path::PathBuf;

use crate::error::StorageError;

/// String-keyed, string-valued store.
///
/// Writes may fail; callers that treat persistence as best-effort log and
/// carry on.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Returns `~/.config/studyhelper[-dev]/` based on STUDYHELPER_ENV.
///
/// Set STUDYHELPER_ENV=dev to use development data directory, or
/// STUDYHELPER_HOME to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("STUDYHELPER_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("STUDYHELPER_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studyhelper-dev")
            } else {
                base_dir.join("studyhelper")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
