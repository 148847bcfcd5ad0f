//! Figurine Market CLI - drive a cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add two of a figurine to the cart
//! fm-cart add --id fig-0042 --name "Crimson Oni" --origin "Yokai Parade" \
//!     --price 24.50 --image https://img.example.com/fig-0042.png --quantity 2
//!
//! # Change a quantity (0 removes the item)
//! fm-cart update --id fig-0042 --quantity 3
//!
//! # Remove an item, empty the cart, or recompute the total
//! fm-cart remove --id fig-0042
//! fm-cart reset
//! fm-cart total
//!
//! # Print the cart as JSON
//! fm-cart show
//! ```
//!
//! The cart snapshot lives under `FM_CART_DATA_DIR` (default `./cart-data`),
//! so carts survive between invocations the way a browser cart survives page
//! reloads.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use figurine_market_cart::{CartStore, FileStore, TracingNotifier};
use figurine_market_core::{FigurineId, LineItem, Price};

mod config;

#[derive(Parser)]
#[command(name = "fm-cart")]
#[command(author, version, about = "Figurine Market cart tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the hydrated cart as JSON
    Show,
    /// Add a figurine to the cart
    Add {
        /// Catalog identifier
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Series or franchise
        #[arg(long)]
        origin: String,

        /// Unit price, e.g. 24.50
        #[arg(long)]
        price: Decimal,

        /// Product image URL
        #[arg(long)]
        image: String,

        /// Number of units
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a cart item (0 removes it)
    Update {
        /// Catalog identifier
        #[arg(long)]
        id: String,

        /// New quantity
        #[arg(long)]
        quantity: u32,
    },
    /// Remove an item from the cart
    Remove {
        /// Catalog identifier
        #[arg(long)]
        id: String,
    },
    /// Empty the cart
    Reset,
    /// Recompute and print the cart total
    Total,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let storage = FileStore::open(config::data_dir())?;
    let mut store = CartStore::new(storage).with_notifier(TracingNotifier);
    store.hydrate();

    let state = match cli.command {
        Commands::Show => store.state(),
        Commands::Add {
            id,
            name,
            origin,
            price,
            image,
            quantity,
        } => store.add_item(LineItem {
            id: FigurineId::new(id),
            name,
            origin,
            price: Price::new(price)?,
            image,
            quantity,
        }),
        Commands::Update { id, quantity } => store.update_quantity(&FigurineId::new(id), quantity),
        Commands::Remove { id } => store.remove_item(&FigurineId::new(id)),
        Commands::Reset => store.reset_cart(),
        Commands::Total => store.recompute_total(),
    };

    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}
