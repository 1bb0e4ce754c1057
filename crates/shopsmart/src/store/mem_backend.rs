use super::backend::PreferenceBackend;
use crate::error::{Result, ShopError};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

struct Entry {
    value: String,
    mtime: DateTime<Utc>,
}

impl Entry {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            mtime: Utc::now(),
        }
    }
}

/// In-memory preference backend for testing.
///
/// Uses a `Mutex` rather than `RefCell` because store I/O runs on Tokio's
/// blocking pool.
#[derive(Default)]
pub struct MemBackend {
    values: Mutex<HashMap<String, Entry>>,
    simulate_write_error: AtomicBool,
    simulate_read_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Enable read error simulation; `read` fails as an unreadable file would.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Test helper to plant a raw value, bypassing any encoding.
    /// Counts as an external write: the modification time moves.
    pub fn put_raw(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), Entry::new(value));
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Entry>>> {
        self.values
            .lock()
            .map_err(|_| ShopError::Store("Memory backend lock poisoned".to_string()))
    }
}

fn simulated(what: &str) -> ShopError {
    ShopError::Persistence(io::Error::new(
        io::ErrorKind::Other,
        format!("Simulated {} error", what),
    ))
}

impl PreferenceBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.load(Ordering::SeqCst) {
            return Err(simulated("read"));
        }
        Ok(self.lock()?.get(key).map(|entry| entry.value.clone()))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(simulated("write"));
        }
        self.lock()?.insert(key.to_string(), Entry::new(value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn modified_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        Ok(self.lock()?.get(key).map(|entry| entry.mtime))
    }
}
