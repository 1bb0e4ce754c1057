use crate::error::{Result, ShopError};
use crate::model::Product;

/// Resolve user-facing selectors to positions in `products`.
///
/// A selector is either a 1-based position or an id. A position picks exactly
/// that row. An id (or any prefix that matches a single distinct id) picks
/// every row carrying it, since stored data can repeat ids. Positions come back
/// in selector order with duplicates dropped, first occurrence wins.
pub fn resolve_positions<S: AsRef<str>>(
    products: &[Product],
    selectors: &[S],
) -> Result<Vec<usize>> {
    let mut positions: Vec<usize> = Vec::new();
    for selector in selectors {
        for position in resolve_one(products, selector.as_ref())? {
            if !positions.contains(&position) {
                positions.push(position);
            }
        }
    }
    Ok(positions)
}

fn resolve_one(products: &[Product], selector: &str) -> Result<Vec<usize>> {
    let selector = selector.trim();

    if let Ok(position) = selector.parse::<usize>() {
        return position
            .checked_sub(1)
            .filter(|i| *i < products.len())
            .map(|i| vec![i])
            .ok_or_else(|| ShopError::ProductNotFound(selector.to_string()));
    }

    let id = if products.iter().any(|p| p.id == selector) {
        selector
    } else {
        unique_prefix_match(products, selector)?
    };
    Ok(products
        .iter()
        .enumerate()
        .filter(|(_, p)| p.id == id)
        .map(|(i, _)| i)
        .collect())
}

fn unique_prefix_match<'a>(products: &'a [Product], selector: &str) -> Result<&'a str> {
    let mut found: Option<&str> = None;
    for product in products {
        if selector.is_empty() || !product.id.starts_with(selector) {
            continue;
        }
        match found {
            None => found = Some(product.id.as_str()),
            Some(id) if id == product.id => {}
            Some(_) => {
                return Err(ShopError::ProductNotFound(format!(
                    "{} (ambiguous id prefix)",
                    selector
                )))
            }
        }
    }
    found.ok_or_else(|| ShopError::ProductNotFound(selector.to_string()))
}

/// Split `products` into the rows at `positions` (in collection order) and
/// the rest.
pub fn split_at_positions(
    products: Vec<Product>,
    positions: &[usize],
) -> (Vec<Product>, Vec<Product>) {
    let (picked, rest): (Vec<_>, Vec<_>) = products
        .into_iter()
        .enumerate()
        .partition(|(i, _)| positions.contains(i));
    (
        picked.into_iter().map(|(_, p)| p).collect(),
        rest.into_iter().map(|(_, p)| p).collect(),
    )
}
