//! Pure views over a collection snapshot, as consumed by the list and order screens.

use crate::model::Product;
use std::collections::HashSet;

/// Σ `amount × no_of_items`.
pub fn order_total(products: &[Product]) -> f64 {
    products.iter().map(Product::line_total).sum()
}

pub fn item_count(products: &[Product]) -> i64 {
    products.iter().map(|p| p.no_of_items).sum()
}

/// Products whose id is in `ids`, in collection order.
pub fn select_by_ids<'a, S: AsRef<str>>(products: &'a [Product], ids: &[S]) -> Vec<&'a Product> {
    let wanted: HashSet<&str> = ids.iter().map(|id| id.as_ref()).collect();
    products
        .iter()
        .filter(|p| wanted.contains(p.id.as_str()))
        .collect()
}

/// Groups products by `key`, keeping groups in first-seen order and products
/// in collection order within a group.
pub fn group_by<'a, K, F>(products: &'a [Product], key: F) -> Vec<(K, Vec<&'a Product>)>
where
    K: PartialEq,
    F: Fn(&Product) -> K,
{
    let mut groups: Vec<(K, Vec<&'a Product>)> = Vec::new();
    for product in products {
        let k = key(product);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(product),
            None => groups.push((k, vec![product])),
        }
    }
    groups
}
