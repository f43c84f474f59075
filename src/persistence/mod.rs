//! Durable key/value persistence
//!
//! Backends:
//! - `MemoryStore`: in-process map (tests, fallback)
//! - `FileStore`: JSON object file on disk (native)
//! - `LocalStore`: browser LocalStorage (wasm32)
//!
//! Reads are advisory. Callers treat a failed read the same as a missing key.

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(target_arch = "wasm32")]
mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ritual::DecodedDate;

/// Key holding the user's display name (plain text)
pub const SAVED_NAME_KEY: &str = "savedName";
/// Key holding the last successful result (JSON)
pub const LAST_RESULT_KEY: &str = "lastResult";
/// Key holding user preferences (JSON)
pub const SETTINGS_KEY: &str = "ritualSettings";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed stored value: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fallible string key/value store
pub trait PersistenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PersistenceStore + ?Sized> PersistenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Last successful decode, as stored under `LAST_RESULT_KEY`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub day: u8,
    pub month: u8,
    /// Human-readable local date the ritual completed
    pub date: String,
}

impl PersistedRecord {
    pub fn new(date: &DecodedDate, saved_at: String) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
            date: saved_at,
        }
    }
}

/// Read a JSON value; missing key, backend failure and bad JSON all yield `None`
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: for<'de> Deserialize<'de>,
    S: PersistenceStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Failed to read '{}': {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed '{}': {}", key, e);
            None
        }
    }
}

pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
    S: PersistenceStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

pub fn load_saved_name<S: PersistenceStore + ?Sized>(store: &S) -> Option<String> {
    match store.get(SAVED_NAME_KEY) {
        Ok(name) => name.filter(|n| !n.trim().is_empty()),
        Err(e) => {
            log::warn!("Failed to read saved name: {}", e);
            None
        }
    }
}

pub fn load_last_result<S: PersistenceStore + ?Sized>(store: &S) -> Option<PersistedRecord> {
    load_json(store, LAST_RESULT_KEY)
}

/// Local date formatted as `M/D/YYYY`
#[cfg(target_arch = "wasm32")]
pub fn today_stamp() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{}/{}/{}",
        now.get_month() + 1,
        now.get_date(),
        now.get_full_year()
    )
}

/// Local date formatted as `M/D/YYYY`
#[cfg(not(target_arch = "wasm32"))]
pub fn today_stamp() -> String {
    chrono::Local::now().format("%-m/%-d/%Y").to_string()
}
