//! # Storage Layer
//!
//! Two levels, split the same way as "how" and "what":
//!
//! - [`backend::PreferenceBackend`]: raw key → string persistence with a
//!   single-key atomic replace. [`fs_backend::FsBackend`] is the production
//!   backend, [`mem_backend::MemBackend`] keeps everything in memory for tests.
//! - [`product_store::ProductStore`]: one product collection under one key.
//!   Encodes the whole collection as a JSON array on every write, decodes and
//!   backfills identity on every read, and notifies subscribers after writes.
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! <data dir>/
//! ├── items.json     # shopping list (JSON array of products)
//! ├── orders.json    # checked-out orders (same shape)
//! └── config.json    # ShopConfig
//! ```
//!
//! A product on disk:
//! ```text
//! {"id":"…","name":"Milk","amount":1.5,"no_of_items":2,"imageUrl":"milk.png","dateAdded":1700000000000}
//! ```
//!
//! ## Failure policy
//!
//! - Backend write/read failure: `ShopError::Persistence`, no retry, previous
//!   value untouched.
//! - Stored value that does not decode: `ShopError::CorruptState` for that read.
//!   The store never falls back to an empty collection for corrupt data; an absent
//!   (or blank) value is the only thing that reads as empty.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod product_store;

pub use backend::PreferenceBackend;
pub use product_store::{ItemsStream, ProductStore, ITEMS_KEY, ORDERS_KEY};
