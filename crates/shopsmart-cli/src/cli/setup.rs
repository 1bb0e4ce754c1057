use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopsmart")]
#[command(about = "Shopping list and orders, stored locally", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $SHOPSMART_HOME, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product to the shopping list
    #[command(alias = "a")]
    Add {
        /// Product name
        name: String,

        /// Unit price
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Number of items
        #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,

        /// Image reference shown next to the product
        #[arg(long)]
        image: Option<String>,
    },

    /// List the shopping list with its total
    #[command(alias = "ls")]
    List,

    /// Remove products from the shopping list
    #[command(alias = "rm")]
    Remove {
        /// Positions or ids of the products
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Set the quantity of a product
    Qty {
        /// Position or id of the product
        selector: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Move products from the shopping list into orders
    Checkout {
        /// Positions or ids of the products
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Show orders and their total
    Orders {
        /// Clear all orders
        #[arg(long)]
        clear: bool,
    },

    /// Print the list every time it changes
    Watch {
        /// Watch orders instead of the shopping list
        #[arg(long)]
        orders: bool,

        /// Stop after this many snapshots
        #[arg(long)]
        count: Option<usize>,

        /// How often to check the data file for changes made elsewhere, in milliseconds
        #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (currency_symbol, total_precision, pretty_json)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },

    /// Show version and build information
    Version,
}
