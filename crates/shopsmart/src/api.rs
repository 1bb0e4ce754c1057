//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients (the CLI today).
//!
//! It owns the two collections the application keeps, each in its own
//! [`ProductStore`] over one shared backend:
//!
//! - `items`: the shopping list
//! - `orders`: products that went through checkout
//!
//! Methods dispatch to `commands/*.rs` and return `Result<CmdResult>`. Business
//! logic lives in the commands, encoding and notification in the store.
//!
//! ## Generic Over PreferenceBackend
//!
//! - Production: `ShopApi<FsBackend>`
//! - Testing: `ShopApi<MemBackend>`

use crate::commands;
use crate::config::ShopConfig;
use crate::error::Result;
use crate::store::fs_backend::FsBackend;
use crate::store::{ItemsStream, PreferenceBackend, ProductStore, ITEMS_KEY, ORDERS_KEY};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct ShopApi<B: PreferenceBackend> {
    items: ProductStore<B>,
    orders: ProductStore<B>,
    data_dir: PathBuf,
}

impl ShopApi<FsBackend> {
    /// Open the file-backed stores under `data_dir`, honouring its config.
    pub fn open(data_dir: PathBuf, config: &ShopConfig) -> Self {
        let backend = Arc::new(FsBackend::new(data_dir.clone()));
        Self::new(backend, data_dir).with_pretty_json(config.pretty_json)
    }
}

impl<B: PreferenceBackend> ShopApi<B> {
    pub fn new(backend: Arc<B>, data_dir: PathBuf) -> Self {
        Self {
            items: ProductStore::new(Arc::clone(&backend), ITEMS_KEY),
            orders: ProductStore::new(backend, ORDERS_KEY),
            data_dir,
        }
    }

    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.items = self.items.with_pretty_json(pretty);
        self.orders = self.orders.with_pretty_json(pretty);
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn items(&self) -> &ProductStore<B> {
        &self.items
    }

    pub fn orders(&self) -> &ProductStore<B> {
        &self.orders
    }

    pub async fn add_item(
        &self,
        name: String,
        amount: f64,
        quantity: i64,
        image_url: Option<String>,
    ) -> Result<CmdResult> {
        commands::add::run(&self.items, name, amount, quantity, image_url).await
    }

    pub async fn remove_items<S: AsRef<str>>(&self, selectors: &[S]) -> Result<CmdResult> {
        commands::remove::run(&self.items, selectors).await
    }

    pub async fn set_quantity(&self, selector: &str, quantity: i64) -> Result<CmdResult> {
        commands::quantity::run(&self.items, selector, quantity).await
    }

    pub async fn list_items(&self) -> Result<CmdResult> {
        commands::list::run(&self.items).await
    }

    pub async fn checkout<S: AsRef<str>>(&self, selectors: &[S]) -> Result<CmdResult> {
        commands::checkout::run(&self.items, &self.orders, selectors).await
    }

    pub async fn list_orders(&self) -> Result<CmdResult> {
        commands::list::run(&self.orders).await
    }

    pub async fn clear_orders(&self) -> Result<CmdResult> {
        commands::clear::run(&self.orders).await
    }

    pub fn watch_items(&self) -> ItemsStream<B> {
        self.items.read_stream()
    }

    pub fn watch_orders(&self) -> ItemsStream<B> {
        self.orders.read_stream()
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}
