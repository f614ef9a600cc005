//! CLI administration tool for shorturl.
//!
//! Runs the shorten and resolve protocols directly against the database and
//! reports store status, without going through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten "https://example.com/page"
//!
//! # Look up a token
//! cargo run --bin admin -- resolve xY12abcDEF_-
//!
//! # Count stored mappings
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! Database settings are read the same way as the server (`DATABASE_URL` or
//! the `DB_*` components, `.env` supported).

use shorturl::application::services::{
    ResolveError, ResolveService, ShortenError, ShortenService, with_deadline,
};
use shorturl::config::Config;
use shorturl::domain::repositories::MappingRepository;
use shorturl::infrastructure::persistence::PgMappingRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL (reuses the existing token if already stored)
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// Resolve a token to its original URL
    Resolve {
        /// Short token
        token: String,
    },

    /// Show statistics
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
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;
    let pool = shorturl::server::connect(&config).await?;
    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool)));

    match cli.command {
        Commands::Shorten { url } => {
            let service = ShortenService::new(repo).with_store_timeout(config.store_timeout());
            shorten(&service, &url).await?
        }
        Commands::Resolve { token } => {
            let service = ResolveService::new(repo).with_store_timeout(config.store_timeout());
            resolve(&service, &token).await?
        }
        Commands::Stats => handle_stats(repo.as_ref(), config.store_timeout()).await?,
        Commands::Db { action } => match action {
            DbAction::Check => check_connection(repo.as_ref(), config.store_timeout()).await?,
        },
    }

    Ok(())
}

async fn shorten(service: &ShortenService<PgMappingRepository>, url: &str) -> Result<()> {
    match service.shorten(url).await {
        Ok(mapping) => {
            println!("{}", "✅ Shortened".green().bold());
            println!("  Original: {}", mapping.original_url.cyan());
            println!("  Token:    {}", mapping.short_url.bright_yellow().bold());
            println!(
                "  Created:  {}",
                mapping.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            Ok(())
        }
        Err(ShortenError::InvalidUrl(reason)) => {
            println!("{} {}", "❌ Invalid URL:".red().bold(), reason);
            std::process::exit(2);
        }
        Err(e) => Err(e).context("Failed to shorten URL"),
    }
}

async fn resolve(service: &ResolveService<PgMappingRepository>, token: &str) -> Result<()> {
    match service.resolve(token).await {
        Ok(url) => {
            println!("{} {}", token.bright_yellow(), "→".bright_black());
            println!("  {}", url.cyan());
            Ok(())
        }
        Err(e) => match unresolved(&e, token) {
            Some((message, code)) => {
                println!("{} {}", "❌".red(), message.red().bold());
                std::process::exit(code);
            }
            None => Err(e).context("Failed to resolve token"),
        },
    }
}

/// Message and exit code for a token that resolves to nothing; `None` for
/// storage failures.
fn unresolved(err: &ResolveError, token: &str) -> Option<(String, i32)> {
    match err {
        ResolveError::NotFound => Some((format!("No URL found for {}", token), 1)),
        ResolveError::BadRequest => Some(("Token must not be blank".to_string(), 2)),
        ResolveError::Storage(_) => None,
    }
}

/// Displays mapping count.
async fn handle_stats(repo: &dyn MappingRepository, deadline: Duration) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = with_deadline(deadline, repo.count())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("  Mappings: {}", count.to_string().bright_yellow().bold());

    Ok(())
}

/// Checks database connectivity.
async fn check_connection(repo: &dyn MappingRepository, deadline: Duration) -> Result<()> {
    print!("{} ", "Checking database connection...".bright_white());

    match with_deadline(deadline, repo.ping()).await {
        Ok(()) => {
            println!("{}", "OK".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{}", "FAILED".red().bold());
            Err(anyhow::anyhow!("Database check failed: {}", e))
        }
    }
}
