//! # CLI Layer
//!
//! Responsibilities:
//!
//! 1. **Argument Parsing**: clap, see `setup.rs`
//! 2. **Context Setup**: resolve the data dir, load config, open the API
//! 3. **Dispatch**: one handler per command
//! 4. **Output Formatting**: via `render.rs`
//! 5. **Error Handling**: errors bubble up to `main` with context attached

use super::logging;
use super::render::{render_config, render_messages, render_products, render_version};
use super::setup::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use shopsmart::api::{CmdResult, ConfigAction, ShopApi};
use shopsmart::config::{resolve_data_dir, ShopConfig};
use shopsmart::projections::order_total;
use shopsmart::store::fs_backend::FsBackend;
use std::time::Duration;
use tracing::{debug, warn};

struct AppContext {
    api: ShopApi<FsBackend>,
    config: ShopConfig,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            amount,
            quantity,
            image,
        }) => handle_add(&ctx, name, amount, quantity, image).await,
        Some(Commands::List) | None => handle_list(&ctx).await,
        Some(Commands::Remove { selectors }) => handle_remove(&ctx, selectors).await,
        Some(Commands::Qty { selector, quantity }) => {
            handle_quantity(&ctx, selector, quantity).await
        }
        Some(Commands::Checkout { selectors }) => handle_checkout(&ctx, selectors).await,
        Some(Commands::Orders { clear }) => handle_orders(&ctx, clear).await,
        Some(Commands::Watch {
            orders,
            count,
            interval,
        }) => handle_watch(&ctx, orders, count, interval).await,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Version) => handle_version(),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = ShopConfig::load(&data_dir)
        .with_context(|| format!("Failed to read config in {}", data_dir.display()))?;
    debug!(data_dir = %data_dir.display(), "opening stores");

    let api = ShopApi::open(data_dir, &config);
    Ok(AppContext { api, config })
}

async fn handle_add(
    ctx: &AppContext,
    name: String,
    amount: f64,
    quantity: i64,
    image: Option<String>,
) -> Result<()> {
    let result = ctx
        .api
        .add_item(name, amount, quantity, image)
        .await
        .context("Could not add product")?;
    print_messages(&result);
    Ok(())
}

async fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx
        .api
        .list_items()
        .await
        .context("Could not read shopping list")?;
    print_listing(ctx, &result);
    Ok(())
}

async fn handle_remove(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx
        .api
        .remove_items(&selectors)
        .await
        .context("Could not remove products")?;
    print_messages(&result);
    Ok(())
}

async fn handle_quantity(ctx: &AppContext, selector: String, quantity: i64) -> Result<()> {
    let result = ctx
        .api
        .set_quantity(&selector, quantity)
        .await
        .context("Could not update quantity")?;
    print_messages(&result);
    Ok(())
}

async fn handle_checkout(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx
        .api
        .checkout(&selectors)
        .await
        .context("Could not place order")?;
    print_messages(&result);
    if let Some(total) = result.total {
        println!("Order total: {}", ctx.config.format_price(total));
    }
    Ok(())
}

async fn handle_orders(ctx: &AppContext, clear: bool) -> Result<()> {
    if clear {
        let result = ctx
            .api
            .clear_orders()
            .await
            .context("Error clearing orders")?;
        print_messages(&result);
        return Ok(());
    }

    let result = ctx
        .api
        .list_orders()
        .await
        .context("Could not read orders")?;
    print_listing(ctx, &result);
    Ok(())
}

/// Prints every snapshot until `count` is reached (forever without it).
/// Writes from other `shopsmart` processes are picked up by polling the data
/// file every `interval_ms`. A snapshot that fails to read is reported and
/// watching continues.
async fn handle_watch(
    ctx: &AppContext,
    orders: bool,
    count: Option<usize>,
    interval_ms: u64,
) -> Result<()> {
    let stream = if orders {
        ctx.api.watch_orders()
    } else {
        ctx.api.watch_items()
    };
    let mut stream = stream.poll_backend(Duration::from_millis(interval_ms));

    let mut seen = 0;
    while count.map_or(true, |limit| seen < limit) {
        let Some(snapshot) = stream.next_snapshot().await else {
            break;
        };
        seen += 1;
        match snapshot {
            Ok(products) => {
                let total = order_total(&products);
                print!("{}", render_products(&products, total, &ctx.config));
                println!("---");
            }
            Err(err) => {
                warn!(error = %err, "snapshot failed");
                eprintln!("Error: {}", err);
            }
        }
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (Some(key), Some(value)) => ConfigAction::Set { key, value },
        (Some(key), None) => {
            let result = ctx.api.config(ConfigAction::Show)?;
            let config = result.config.unwrap_or_default();
            let rendered = render_config(&config);
            let line = rendered
                .lines()
                .find(|line| line.starts_with(&format!("{} =", key)))
                .with_context(|| format!("Unknown config key: {}", key))?;
            println!("{}", line);
            return Ok(());
        }
        (None, _) => ConfigAction::Show,
    };

    let result = ctx.api.config(action).context("Could not update config")?;
    print_messages(&result);
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    Ok(())
}

fn handle_version() -> Result<()> {
    print!(
        "{}",
        render_version(
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH"),
            env!("GIT_COMMIT_DATE"),
            env!("IS_RELEASE") == "true",
        )
    );
    Ok(())
}

fn print_listing(ctx: &AppContext, result: &CmdResult) {
    let total = result.total.unwrap_or_default();
    print!(
        "{}",
        render_products(&result.listed_products, total, &ctx.config)
    );
    print_messages(result);
}

fn print_messages(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}
