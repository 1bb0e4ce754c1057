use crate::error::{Result, ShopError};
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A purchasable line item: price, quantity and identity.
///
/// The field names on the wire (`no_of_items`, `imageUrl`, `dateAdded`) are the
/// ones already present in stored collections and must not change.
///
/// Construction is deliberately permissive: a negative price or an empty name is
/// accepted here. Callers that take user input run [`Product::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Blank or missing in stored data is tolerated; the store backfills it on read.
    #[serde(default, deserialize_with = "string_or_null")]
    pub id: String,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub no_of_items: i64,
    #[serde(
        rename = "imageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(rename = "dateAdded", default)]
    pub date_added: i64,
}

impl Product {
    pub fn new(name: impl Into<String>, amount: f64, no_of_items: i64) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            amount,
            no_of_items,
            image_url: None,
            date_added: now_millis(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_date_added(mut self, millis: i64) -> Self {
        self.date_added = millis;
        self
    }

    /// Copy of this product with a different quantity. Identity and
    /// `date_added` are carried over.
    pub fn with_quantity(&self, no_of_items: i64) -> Self {
        Self {
            no_of_items,
            ..self.clone()
        }
    }

    pub fn has_identity(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Assigns a fresh id when the current one is blank. Returns whether an id
    /// was generated.
    pub fn backfill_identity(&mut self) -> bool {
        if self.has_identity() {
            return false;
        }
        self.id = new_id();
        true
    }

    /// `amount × no_of_items`.
    pub fn line_total(&self) -> f64 {
        self.amount * self.no_of_items as f64
    }

    /// Opt-in input check used by the command layer. The store never calls this.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ShopError::InvalidProduct("name cannot be empty".to_string()));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ShopError::InvalidProduct(format!(
                "amount must be a non-negative number, got {}",
                self.amount
            )));
        }
        if self.no_of_items < 0 {
            return Err(ShopError::InvalidProduct(format!(
                "quantity must be non-negative, got {}",
                self.no_of_items
            )));
        }
        Ok(())
    }
}

/// A past search shown on the history screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub query: String,
    pub timestamp: i64,
    pub category: String,
}

impl SearchEntry {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            timestamp: now_millis(),
            category: category.into(),
        }
    }

    pub fn at(mut self, millis: i64) -> Self {
        self.timestamp = millis;
        self
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn string_or_null<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_product_gets_unique_identity() {
        let ids: HashSet<String> = (0..100)
            .map(|_| Product::new("Milk", 1.0, 1).id)
            .collect();
        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| !id.trim().is_empty()));
    }

    #[test]
    fn new_product_stamps_date_added() {
        let before = now_millis();
        let product = Product::new("Bread", 2.5, 1);
        let after = now_millis();
        assert!(product.date_added >= before && product.date_added <= after);
        assert!(product.image_url.is_none());
    }

    #[test]
    fn construction_accepts_negative_values() {
        let product = Product::new("", -3.0, -1);
        assert_eq!(product.amount, -3.0);
        assert_eq!(product.no_of_items, -1);
    }

    #[test]
    fn validate_rejects_bad_input() {
        assert!(Product::new("  ", 1.0, 1).validate().is_err());
        assert!(Product::new("Eggs", -0.5, 1).validate().is_err());
        assert!(Product::new("Eggs", f64::NAN, 1).validate().is_err());
        assert!(Product::new("Eggs", 1.0, -2).validate().is_err());
        assert!(Product::new("Eggs", 0.0, 0).validate().is_ok());
    }

    #[test]
    fn line_total_multiplies_price_and_quantity() {
        assert_eq!(Product::new("Rice", 10.0, 2).line_total(), 20.0);
    }

    #[test]
    fn with_quantity_keeps_identity() {
        let product = Product::new("Tea", 4.0, 1);
        let updated = product.with_quantity(5);
        assert_eq!(updated.id, product.id);
        assert_eq!(updated.date_added, product.date_added);
        assert_eq!(updated.no_of_items, 5);
    }

    #[test]
    fn backfill_only_touches_blank_ids() {
        let mut kept = Product::new("A", 1.0, 1).with_id("fixed");
        assert!(!kept.backfill_identity());
        assert_eq!(kept.id, "fixed");

        let mut blank = Product::new("B", 1.0, 1).with_id("   ");
        assert!(blank.backfill_identity());
        assert!(blank.has_identity());
    }

    #[test]
    fn wire_format_uses_stored_field_names() {
        let product = Product::new("Soap", 3.5, 2)
            .with_id("abc")
            .with_date_added(1_700_000_000_000)
            .with_image_url("soap.png");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["no_of_items"], 2);
        assert_eq!(json["imageUrl"], "soap.png");
        assert_eq!(json["dateAdded"], 1_700_000_000_000i64);
    }

    #[test]
    fn missing_image_url_is_omitted() {
        let json = serde_json::to_value(Product::new("Salt", 1.0, 1)).unwrap();
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn missing_or_null_id_decodes_as_blank() {
        let absent: Product =
            serde_json::from_str(r#"{"name":"X","amount":1.0,"no_of_items":1}"#).unwrap();
        assert_eq!(absent.id, "");
        assert_eq!(absent.date_added, 0);

        let null: Product =
            serde_json::from_str(r#"{"id":null,"name":"X","amount":1,"no_of_items":1}"#)
                .unwrap();
        assert!(!null.has_identity());
    }

    #[test]
    fn missing_name_is_an_error() {
        let parsed: std::result::Result<Product, _> =
            serde_json::from_str(r#"{"amount":1.0,"no_of_items":1}"#);
        assert!(parsed.is_err());
    }
}
