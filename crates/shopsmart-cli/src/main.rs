//! # ShopSmart CLI
//!
//! A thin terminal client over the `shopsmart` library. It stands in for the
//! app's screens: the list, the orders page with its total, and the version
//! page. Everything user-facing (argument parsing, rendering, exit codes) lives
//! in `src/cli/`; this file only starts the runtime and handles process exit.
//!
//! The runtime is Tokio's `current_thread` flavour: one task owns the stores,
//! and backend I/O is pushed to the blocking pool by the library.
//!
//! ## Testing Approach
//!
//! - Library commands and store semantics are tested in `crates/shopsmart`.
//! - Rendering is tested here with canned products (`cli/render.rs`).
//! - `tests/cli_test.rs` drives the binary end to end against a temp data dir.

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
