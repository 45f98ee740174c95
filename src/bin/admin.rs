//! CLI administration tool for the personal site.
//!
//! Registers and inspects short links and checks the storage backend
//! without going through the website.
//!
//! # Usage
//!
//! ```bash
//! # Register a short link
//! cargo run --bin site-admin -- link add resume https://example.com/resume.pdf
//!
//! # Show where a short code points
//! cargo run --bin site-admin -- link get resume
//!
//! # Check the storage connection and schema
//! cargo run --bin site-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same storage settings as the server (`DATABASE_URL` or `DB_*`).

use personal_site::application::services::ResolutionService;
use personal_site::config;
use personal_site::domain::entities::Registration;
use personal_site::infrastructure::persistence::open_store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::process::ExitCode;

/// CLI tool for managing the personal site.
#[derive(Parser)]
#[command(name = "site-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Register a new short link
    Add {
        /// Short code (letters, digits, '-' and '_')
        code: String,

        /// Destination URL
        destination: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the destination of a short code
    Get {
        /// Short code to resolve
        code: String,
    },
}

/// Storage subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check the connection, create the schema and seed link if missing
    Check,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.database_url.starts_with("memory://") {
        println!(
            "{}",
            "Warning: memory:// storage is process-local; changes are discarded on exit".yellow()
        );
    }

    let store = open_store(&config)
        .await
        .context("Failed to open link store")?;
    let service = ResolutionService::new(store);

    service
        .initialize()
        .await
        .context("Failed to initialize link store")?;

    let code = match cli.command {
        Commands::Link { action } => handle_link_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    };

    service.shutdown().await;

    Ok(code)
}

/// Dispatches short link commands.
async fn handle_link_action(action: LinkAction, service: &ResolutionService) -> Result<ExitCode> {
    match action {
        LinkAction::Add {
            code,
            destination,
            yes,
        } => add_link(service, &code, &destination, yes).await,
        LinkAction::Get { code } => get_link(service, &code).await,
    }
}

/// Registers a short link after an optional confirmation.
///
/// Exits with a failure code when the short code is already taken.
async fn add_link(
    service: &ResolutionService,
    code: &str,
    destination: &str,
    skip_confirm: bool,
) -> Result<ExitCode> {
    println!("{}", "Register short link".bright_blue().bold());
    println!();
    println!("  Code:        {}", code.cyan());
    println!("  Destination: {}", destination.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Register this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(ExitCode::SUCCESS);
        }
    }

    let outcome = service
        .create(code, destination)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to register link: {}", e))?;

    match outcome {
        Registration::Created => {
            println!("{}", "Short link created".green().bold());
            println!("  /short/{}/ -> {}", code.cyan(), destination);
            Ok(ExitCode::SUCCESS)
        }
        Registration::Conflict => {
            println!(
                "{}",
                format!("Short code '{}' is already taken", code).red().bold()
            );
            if let Some(existing) = service.resolve(code).await? {
                println!("  Current destination: {}", existing.bright_black());
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Prints the destination of a short code.
async fn get_link(service: &ResolutionService, code: &str) -> Result<ExitCode> {
    match service.resolve(code).await? {
        Some(destination) => {
            println!("{} -> {}", code.cyan(), destination.bright_white());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("{}", format!("Short code '{}' not found", code).yellow());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Dispatches storage commands.
async fn handle_db_action(action: DbAction, service: &ResolutionService) -> Result<ExitCode> {
    match action {
        DbAction::Check => {
            service
                .health()
                .await
                .map_err(|e| anyhow::anyhow!("Store check failed: {}", e))?;

            println!(
                "{}",
                format!("Link store ({}) is reachable and initialized", service.backend())
                    .green()
                    .bold()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
