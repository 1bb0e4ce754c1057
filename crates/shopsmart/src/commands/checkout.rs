use crate::commands::helpers::{resolve_positions, split_at_positions};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::projections::order_total;
use crate::store::{PreferenceBackend, ProductStore};
use tracing::info;

/// Move the selected items from the shopping list into orders.
///
/// Orders are written first: if the second write fails the items show up in
/// both collections rather than in neither.
pub async fn run<B: PreferenceBackend, S: AsRef<str>>(
    items_store: &ProductStore<B>,
    orders_store: &ProductStore<B>,
    selectors: &[S],
) -> Result<CmdResult> {
    let items = items_store.snapshot().await?;
    let positions = resolve_positions(&items, selectors)?;
    let (selected, remaining) = split_at_positions(items, &positions);

    let mut orders = orders_store.snapshot().await?;
    orders.extend(selected.iter().cloned());
    orders_store.save_items(&orders).await?;
    items_store.save_items(&remaining).await?;

    let total = order_total(&selected);
    info!(count = selected.len(), total, "checked out");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Ordered {} item(s)",
        selected.len()
    )));
    Ok(result.with_total(total).with_affected_products(selected))
}
