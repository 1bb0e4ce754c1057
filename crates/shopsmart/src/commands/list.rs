use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::projections::order_total;
use crate::store::{PreferenceBackend, ProductStore};

/// Snapshot of a collection together with its total.
pub async fn run<B: PreferenceBackend>(store: &ProductStore<B>) -> Result<CmdResult> {
    let products = store.snapshot().await?;
    let total = order_total(&products);

    let mut result = CmdResult::default();
    if products.is_empty() {
        result.add_message(CmdMessage::info(empty_message(store.key())));
    }
    Ok(result.with_total(total).with_listed_products(products))
}

fn empty_message(key: &str) -> &'static str {
    match key {
        crate::store::ORDERS_KEY => "No orders yet. Start shopping!",
        _ => "Your shopping list is empty.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::store::mem_backend::MemBackend;
    use crate::store::{ITEMS_KEY, ORDERS_KEY};
    use std::sync::Arc;

    #[tokio::test]
    async fn lists_with_total() {
        let store = ProductStore::new(Arc::new(MemBackend::new()), ITEMS_KEY);
        store
            .save_items(&[Product::new("A", 10.0, 2), Product::new("B", 5.0, 3)])
            .await
            .unwrap();

        let result = run(&store).await.unwrap();
        assert_eq!(result.listed_products.len(), 2);
        assert_eq!(result.total, Some(35.0));
        assert!(result.messages.is_empty());
    }

    #[tokio::test]
    async fn empty_orders_say_so() {
        let store = ProductStore::new(Arc::new(MemBackend::new()), ORDERS_KEY);
        let result = run(&store).await.unwrap();
        assert_eq!(result.total, Some(0.0));
        assert_eq!(result.messages[0].content, "No orders yet. Start shopping!");
    }
}
