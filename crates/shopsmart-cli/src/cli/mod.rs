//! # CLI Behavior
//!
//! This is **one possible UI client** for shopsmart, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes, and output
//! formatting.
//!
//! ## Naked Execution
//!
//! Running `shopsmart` with no arguments lists the shopping list.
//!
//! ## Selecting Products
//!
//! Commands that act on products (`remove`, `qty`, `checkout`) take either the
//! 1-based position shown by `list` or a product id (any unique prefix works).
//!
//! ## Errors
//!
//! A failed command prints one line to stderr and exits non-zero. Stored data is
//! left as it was before the command ran.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `logging`: tracing subscriber installation
//! - `render`: Output formatting (lists, totals, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
