//! Database location resolution.

use std::path::PathBuf;

/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "AA_QUESTIONS_DB";

const DB_FILE_NAME: &str = "questions.db";
const MEMORY_PATH: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub location: DbLocation,
}

fn app_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("aa-questions")
}

impl DbConfig {
    /// Explicit path wins, then `AA_QUESTIONS_DB`, then the platform data dir.
    pub fn resolve(explicit: Option<&str>) -> Self {
        Self::resolve_with(explicit, std::env::var(DB_PATH_ENV).ok())
    }

    pub fn resolve_with(explicit: Option<&str>, env_value: Option<String>) -> Self {
        let chosen = explicit
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .or_else(|| env_value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()));

        let location = match chosen.as_deref() {
            Some(MEMORY_PATH) => DbLocation::Memory,
            Some(p) => DbLocation::File(PathBuf::from(p)),
            None => DbLocation::File(app_data_dir().join(DB_FILE_NAME)),
        };
        DbConfig { location }
    }

    pub fn in_memory() -> Self {
        DbConfig {
            location: DbLocation::Memory,
        }
    }
}
