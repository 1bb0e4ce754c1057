//! # ShopSmart Architecture
//!
//! ShopSmart is a **UI-agnostic shopping-list library**. The screens of the
//! original app (list, orders, search history) are clients; this crate is the
//! part with actual data contracts: product identity, the persisted collection,
//! and the projections screens compute over it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/shopsmart-cli)                                 │
//! │  - Parses arguments, renders lists, owns stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the items and orders stores                         │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Read-modify-write over whole collections                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ProductStore: encode, backfill, notify                   │
//! │  - PreferenceBackend: FsBackend, MemBackend                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns Rust types, never prints, and never exits
//! the process. There is no global store: whoever builds a [`api::ShopApi`] or a
//! [`store::ProductStore`] owns it, and dropping it ends every read stream it
//! handed out.
//!
//! ## Async
//!
//! Store operations are `async` and run backend I/O on Tokio's blocking pool.
//! Any Tokio runtime works, including `current_thread`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction, backends and the product store
//! - [`model`]: `Product` and `SearchEntry`
//! - [`projections`]: Totals, selection and grouping over a snapshot
//! - [`history`]: In-memory search history
//! - [`config`]: Configuration and data directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod projections;
pub mod store;
