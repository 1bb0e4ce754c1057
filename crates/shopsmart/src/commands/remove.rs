use crate::commands::helpers::{resolve_positions, split_at_positions};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{PreferenceBackend, ProductStore};
use tracing::info;

/// Remove the selected products. Fails without writing if any selector does
/// not resolve.
pub async fn run<B: PreferenceBackend, S: AsRef<str>>(
    store: &ProductStore<B>,
    selectors: &[S],
) -> Result<CmdResult> {
    let items = store.snapshot().await?;
    let positions = resolve_positions(&items, selectors)?;

    let (removed, kept) = split_at_positions(items, &positions);
    store.save_items(&kept).await?;
    info!(count = removed.len(), "removed products");

    let mut result = CmdResult::default();
    for product in &removed {
        result.add_message(CmdMessage::success(format!("Removed: {}", product.name)));
    }
    Ok(result.with_affected_products(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShopError;
    use crate::model::Product;
    use crate::store::mem_backend::MemBackend;
    use crate::store::ITEMS_KEY;
    use std::sync::Arc;

    async fn seeded() -> ProductStore<MemBackend> {
        let store = ProductStore::new(Arc::new(MemBackend::new()), ITEMS_KEY);
        store
            .save_items(&[
                Product::new("A", 1.0, 1).with_id("a"),
                Product::new("B", 2.0, 1).with_id("b"),
                Product::new("C", 3.0, 1).with_id("c"),
            ])
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn removes_by_position_and_id() {
        let store = seeded().await;
        let result = run(&store, &["1", "c"]).await.unwrap();
        assert_eq!(result.affected_products.len(), 2);

        let left = store.snapshot().await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, "b");
    }

    #[tokio::test]
    async fn position_removes_one_row_when_ids_repeat() {
        let store = ProductStore::new(Arc::new(MemBackend::new()), ITEMS_KEY);
        store
            .save_items(&[
                Product::new("First", 1.0, 1).with_id("dup"),
                Product::new("Second", 2.0, 1).with_id("dup"),
            ])
            .await
            .unwrap();

        let result = run(&store, &["1"]).await.unwrap();
        assert_eq!(result.affected_products.len(), 1);
        assert_eq!(result.affected_products[0].name, "First");

        let left = store.snapshot().await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].name, "Second");
    }

    #[tokio::test]
    async fn unknown_selector_leaves_list_untouched() {
        let store = seeded().await;
        let err = run(&store, &["a", "nope"]).await.unwrap_err();
        assert!(matches!(err, ShopError::ProductNotFound(_)));
        assert_eq!(store.snapshot().await.unwrap().len(), 3);
    }
}
