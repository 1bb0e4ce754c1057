use crate::error::Result;
use chrono::{DateTime, Utc};

/// Abstract interface for raw key-value persistence.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`ProductStore`](super::product_store::ProductStore) handles the "what"
/// (encoding, identity backfill, change notification).
///
/// Backends are called from Tokio's blocking pool, hence `Send + Sync`.
pub trait PreferenceBackend: Send + Sync + 'static {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    /// MUST be atomic: a concurrent `read` sees the old or the new value, never a mix.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Drop the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// When the value under `key` was last replaced, by any writer.
    /// Returns Ok(None) if nothing is stored.
    fn modified_at(&self, key: &str) -> Result<Option<DateTime<Utc>>>;
}
