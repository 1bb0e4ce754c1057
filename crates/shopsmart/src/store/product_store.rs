use super::backend::PreferenceBackend;
use crate::error::{Result, ShopError};
use crate::model::Product;
use chrono::{DateTime, Utc};
use futures::Stream;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace, warn};

/// Key holding the shopping list.
pub const ITEMS_KEY: &str = "items";
/// Key holding checked-out orders.
pub const ORDERS_KEY: &str = "orders";

/// One product collection persisted under one backend key.
///
/// The store owns change notification for its key, so there should be a single
/// `ProductStore` per key in a process. Several stores (one per key) can share a
/// backend.
pub struct ProductStore<B: PreferenceBackend> {
    backend: Arc<B>,
    key: Arc<str>,
    pretty_json: bool,
    revision: watch::Sender<u64>,
    write_gate: Mutex<()>,
}

impl<B: PreferenceBackend> ProductStore<B> {
    pub fn new(backend: Arc<B>, key: impl Into<String>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            backend,
            key: Arc::from(key.into()),
            pretty_json: false,
            revision,
            write_gate: Mutex::new(()),
        }
    }

    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Replace the whole collection.
    ///
    /// Writes on one store are applied in the order they acquire the write gate;
    /// subscribers are notified only after the backend accepted the value.
    ///
    /// JSON has no encoding for NaN or infinity, so a collection holding a
    /// non-finite `amount` is refused before anything is written.
    pub async fn save_items(&self, items: &[Product]) -> Result<()> {
        if let Some(bad) = items.iter().find(|p| !p.amount.is_finite()) {
            return Err(ShopError::InvalidProduct(format!(
                "{}: amount {} cannot be stored",
                bad.name, bad.amount
            )));
        }

        let encoded = if self.pretty_json {
            serde_json::to_string_pretty(items)?
        } else {
            serde_json::to_string(items)?
        };

        let _gate = self.write_gate.lock().await;
        let backend = Arc::clone(&self.backend);
        let key = Arc::clone(&self.key);
        run_blocking(move || backend.write(&key, &encoded)).await?;

        self.revision.send_modify(|rev| *rev += 1);
        debug!(key = %self.key, count = items.len(), "saved collection");
        Ok(())
    }

    /// The current collection, decoded and backfilled exactly like one stream
    /// emission.
    pub async fn snapshot(&self) -> Result<Vec<Product>> {
        load(Arc::clone(&self.backend), Arc::clone(&self.key)).await
    }

    /// Subscribe to the collection. The first call to
    /// [`ItemsStream::next_snapshot`] yields the current value; later calls wait
    /// for the next successful write.
    pub fn read_stream(&self) -> ItemsStream<B> {
        ItemsStream {
            backend: Arc::clone(&self.backend),
            key: Arc::clone(&self.key),
            changes: self.revision.subscribe(),
            primed: false,
            poll: None,
            seen_stamp: None,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.revision.receiver_count()
    }
}

/// Live view over one store key.
///
/// Ends (yields `None`) only once the owning [`ProductStore`] is dropped.
/// Dropping the stream unsubscribes.
///
/// By default only writes made through the owning store wake the stream. Use
/// [`ItemsStream::poll_backend`] to also pick up writes from other processes.
pub struct ItemsStream<B: PreferenceBackend> {
    backend: Arc<B>,
    key: Arc<str>,
    changes: watch::Receiver<u64>,
    primed: bool,
    poll: Option<Duration>,
    seen_stamp: Option<DateTime<Utc>>,
}

impl<B: PreferenceBackend> ItemsStream<B> {
    /// Also emit when the backend's modification time for the key moves,
    /// checked every `every`.
    pub fn poll_backend(mut self, every: Duration) -> Self {
        self.poll = Some(every);
        self
    }

    pub async fn next_snapshot(&mut self) -> Option<Result<Vec<Product>>> {
        if self.primed {
            let woke = match self.poll {
                Some(every) => self.wait_for_stamp_or_write(every).await,
                None => self.changes.changed().await.is_ok(),
            };
            if !woke {
                return None;
            }
        } else {
            self.primed = true;
        }
        // Mark before loading so a write racing the load triggers another emission.
        let revision = *self.changes.borrow_and_update();
        if self.poll.is_some() {
            self.seen_stamp = self.stamp().await.unwrap_or(self.seen_stamp);
        }
        trace!(key = %self.key, revision, "emitting snapshot");
        Some(load(Arc::clone(&self.backend), Arc::clone(&self.key)).await)
    }

    /// Returns false once the owning store is gone.
    async fn wait_for_stamp_or_write(&mut self, every: Duration) -> bool {
        let mut ticks = tokio::time::interval(every);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticks.tick().await;

        loop {
            tokio::select! {
                changed = self.changes.changed() => return changed.is_ok(),
                _ = ticks.tick() => {
                    match self.stamp().await {
                        Ok(stamp) if stamp != self.seen_stamp => {
                            debug!(key = %self.key, "stored value changed outside this store");
                            return true;
                        }
                        Ok(_) => {}
                        Err(err) => trace!(key = %self.key, error = %err, "stamp check failed"),
                    }
                }
            }
        }
    }

    async fn stamp(&self) -> Result<Option<DateTime<Utc>>> {
        let backend = Arc::clone(&self.backend);
        let key = Arc::clone(&self.key);
        run_blocking(move || backend.modified_at(&key)).await
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<Product>>> {
        futures::stream::unfold(self, |mut stream| async move {
            let item = stream.next_snapshot().await?;
            Some((item, stream))
        })
    }
}

async fn load<B: PreferenceBackend>(backend: Arc<B>, key: Arc<str>) -> Result<Vec<Product>> {
    let read_key = Arc::clone(&key);
    let raw = run_blocking(move || backend.read(&read_key)).await?;
    decode(&key, raw.as_deref())
}

/// Decode a stored value and apply the identity backfill.
///
/// The backfill is never written back: a product stored without an id gets a
/// new one on every read until a caller saves a repaired copy.
pub(crate) fn decode(key: &str, raw: Option<&str>) -> Result<Vec<Product>> {
    let Some(text) = raw.filter(|text| !text.trim().is_empty()) else {
        return Ok(Vec::new());
    };

    let parsed: Option<Vec<Product>> = serde_json::from_str(text).map_err(|source| {
        warn!(key, error = %source, "stored collection is corrupt");
        ShopError::CorruptState {
            key: key.to_string(),
            source,
        }
    })?;
    let mut items = parsed.unwrap_or_default();

    let repaired = items
        .iter_mut()
        .map(Product::backfill_identity)
        .filter(|generated| *generated)
        .count();
    if repaired > 0 {
        debug!(key, repaired, "backfilled missing product ids");
    }
    Ok(items)
}

async fn run_blocking<T, F>(op: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|err| ShopError::Store(format!("Storage task failed: {}", err)))?
}
