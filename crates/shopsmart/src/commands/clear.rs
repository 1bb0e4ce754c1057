use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::store::{PreferenceBackend, ProductStore};
use tracing::{info, warn};

/// Replace a collection with an empty one.
///
/// A corrupt stored value is overwritten too; that is the way out of a
/// `CorruptState`. Any other read failure aborts before writing.
pub async fn run<B: PreferenceBackend>(store: &ProductStore<B>) -> Result<CmdResult> {
    let label = match store.key() {
        crate::store::ORDERS_KEY => "orders",
        _ => "items",
    };
    let mut result = CmdResult::default();

    let previous = match store.snapshot().await {
        Ok(previous) => previous,
        Err(ShopError::CorruptState { key, source }) => {
            warn!(key = %key, error = %source, "clearing unreadable collection");
            result.add_message(CmdMessage::warning(format!(
                "Stored {} could not be read and were discarded",
                label
            )));
            Vec::new()
        }
        Err(err) => return Err(err),
    };
    store.save_items(&[]).await?;
    info!(key = store.key(), cleared = previous.len(), "cleared collection");

    result.add_message(CmdMessage::success(format!("All {} cleared", label)));
    Ok(result.with_affected_products(previous))
}
