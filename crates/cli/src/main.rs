//! Dukaan CLI - Database migrations and seeding tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply schema + session-store migrations
//! dukaan-cli migrate
//!
//! # Seed the platform catalog with sample products
//! dukaan-cli seed catalog
//!
//! # Seed a demo seller with inventory, an order, and a notification
//! dukaan-cli seed demo
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the database with sample data

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dukaan-cli")]
#[command(author, version, about = "Dukaan CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the database with sample data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Seed the platform catalog with sample products
    Catalog,
    /// Seed a demo seller account with inventory, an order, and a notification
    Demo,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { target } => match target {
            SeedTarget::Catalog => commands::seed::catalog().await?,
            SeedTarget::Demo => commands::seed::demo().await?,
        },
    }
    Ok(())
}
