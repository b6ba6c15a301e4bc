//! CLI administration tool for shortlink-catalog.
//!
//! Performs storage operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the store and apply the schema
//! cargo run --bin admin -- db init
//!
//! # Check that the store answers
//! cargo run --bin admin -- db check
//!
//! # Show SQLite version and location
//! cargo run --bin admin -- db info
//!
//! # Row counts per table
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (required unless `--storage` is given): SQLite file path or connection string

use shortlink_catalog::infrastructure::persistence::{Database, PoolSettings};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;

/// CLI tool for managing shortlink-catalog storage.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Storage location, overrides `STORAGE_PATH`
    #[arg(short, long, global = true)]
    storage: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the store and apply the schema
    Init,

    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let location = match cli.storage {
        Some(location) => location,
        None => std::env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?,
    };

    let database = Database::connect(&location, &PoolSettings::default())
        .await
        .context("Failed to open storage")?;

    match cli.command {
        Commands::Stats => handle_stats(&database.pool()).await?,
        Commands::Db { action } => handle_db_action(action, &database, &location).await?,
    }

    database.close().await;
    Ok(())
}

/// Displays row counts per table.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(pool)
        .await?;

    let groups_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_groups")
        .fetch_one(pool)
        .await?;

    let products_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    println!(
        "  Short links:    {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Product groups: {}",
        groups_count.to_string().bright_green().bold()
    );
    println!(
        "  Products:       {}",
        products_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, database: &Database, location: &str) -> Result<()> {
    match action {
        DbAction::Init => {
            // Opening the store already applied the schema.
            println!(
                "{} {}",
                "✅ Storage initialized at".green().bold(),
                location.bright_white()
            );
        }
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            database.ping().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(database.pool().as_ref())
                .await?;

            println!("  SQLite:   {}", version.bright_white());
            println!("  Location: {}", location.bright_white());
            println!();
        }
    }

    Ok(())
}
