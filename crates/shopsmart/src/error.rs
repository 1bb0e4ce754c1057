use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    /// The backend could not complete a read or write (I/O, permissions, quota).
    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    /// A value exists under `key` but does not decode as a product collection.
    #[error("Corrupt state under key '{key}': {source}")]
    CorruptState {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, ShopError>;
