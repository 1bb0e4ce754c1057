use crate::commands::helpers::resolve_positions;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::store::{PreferenceBackend, ProductStore};
use tracing::info;

pub async fn run<B: PreferenceBackend>(
    store: &ProductStore<B>,
    selector: &str,
    quantity: i64,
) -> Result<CmdResult> {
    if quantity < 0 {
        return Err(ShopError::InvalidProduct(format!(
            "quantity must be non-negative, got {}",
            quantity
        )));
    }

    let mut items = store.snapshot().await?;
    let positions = resolve_positions(&items, &[selector])?;

    let mut updated = Vec::with_capacity(positions.len());
    for position in positions {
        items[position] = items[position].with_quantity(quantity);
        updated.push(items[position].clone());
    }
    store.save_items(&items).await?;
    info!(selector, count = updated.len(), quantity, "updated quantity");

    let mut result = CmdResult::default();
    for product in &updated {
        result.add_message(CmdMessage::success(format!(
            "{}: quantity set to {}",
            product.name, quantity
        )));
    }
    Ok(result.with_affected_products(updated))
}
