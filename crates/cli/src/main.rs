//! Paper Lantern CLI - Storefront driver for browsing and demo sessions.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! pl-cli browse
//!
//! # Filter and sort
//! pl-cli browse --category fiction --sort price-low
//! pl-cli browse --search "haig" --max-price 25.00
//!
//! # Run a scripted shopping session end to end
//! pl-cli demo
//! ```
//!
//! # Commands
//!
//! - `browse` - Print the catalog, filtered and sorted
//! - `demo` - Scripted add-to-cart / checkout walkthrough

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pl-cli")]
#[command(author, version, about = "Paper Lantern Books CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the book catalog
    Browse {
        /// Category filter (`fiction`, `non-fiction`, `romance`, `mystery`,
        /// `sci-fi`, `biography`)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive search over title and author
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order (`featured`, `price-low`, `price-high`, `rating`,
        /// `newest`)
        #[arg(long, default_value = "featured")]
        sort: String,

        /// Inclusive upper price bound
        #[arg(long)]
        max_price: Option<String>,
    },
    /// Run a scripted shopping session
    Demo,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Browse {
            category,
            search,
            sort,
            max_price,
        } => {
            commands::browse::run(
                category.as_deref(),
                search,
                &sort,
                max_price.as_deref(),
            )?;
        }
        Commands::Demo => commands::demo::run()?,
    }
    Ok(())
}
