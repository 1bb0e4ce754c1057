use colored::*;
use shopsmart::api::{CmdMessage, MessageLevel};
use shopsmart::config::ShopConfig;
use shopsmart::model::Product;
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 24;

/// One line per product, then the total.
pub fn render_products(products: &[Product], total: f64, config: &ShopConfig) -> String {
    let mut out = String::new();
    for (i, product) in products.iter().enumerate() {
        let name = truncate(&product.name, NAME_WIDTH);
        let pad = NAME_WIDTH.saturating_sub(name.width());
        out.push_str(&format!(
            "{:>3}. {}{}  x{:<4} {:>10}  {}\n",
            i + 1,
            name,
            " ".repeat(pad),
            product.no_of_items,
            config.format_price(product.line_total()),
            short_id(&product.id).dimmed(),
        ));
    }
    if !products.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            "Total:".bold(),
            config.format_price(total).green().bold()
        ));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_config(config: &ShopConfig) -> String {
    format!(
        "currency_symbol = {}\ntotal_precision = {}\npretty_json = {}\n",
        config.currency_symbol, config.total_precision, config.pretty_json
    )
}

pub fn render_version(version: &str, git_hash: &str, commit_date: &str, is_release: bool) -> String {
    if is_release || git_hash.is_empty() {
        format!("shopsmart {}\n", version)
    } else if commit_date.is_empty() {
        format!("shopsmart {} ({})\n", version, git_hash)
    } else {
        format!("shopsmart {} ({}, {})\n", version, git_hash, commit_date)
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}
