use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::{PreferenceBackend, ProductStore};
use tracing::info;

pub async fn run<B: PreferenceBackend>(
    store: &ProductStore<B>,
    name: String,
    amount: f64,
    quantity: i64,
    image_url: Option<String>,
) -> Result<CmdResult> {
    let mut product = Product::new(name, amount, quantity);
    if let Some(url) = image_url {
        product = product.with_image_url(url);
    }
    product.validate()?;

    let mut items = store.snapshot().await?;
    items.push(product.clone());
    store.save_items(&items).await?;
    info!(id = %product.id, name = %product.name, "added product");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added: {}", product.name)));
    Ok(result.with_affected_products(vec![product]))
}
