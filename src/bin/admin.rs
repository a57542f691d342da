//! CLI administration tool for media-gateway.
//!
//! Runs the same services as the HTTP server against the configured stores,
//! without going through the API.
//!
//! # Usage
//!
//! ```bash
//! # Run the health check once
//! cargo run --bin admin -- health
//!
//! # List open debug log entries
//! cargo run --bin admin -- logs list --unresolved
//!
//! # Resolve an entry
//! cargo run --bin admin -- logs resolve abc123
//!
//! # Print direct and CDN URLs for an object
//! cargo run --bin admin -- url videos/intro.mp4
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`media_gateway::config`].

use media_gateway::application::services::{DebugLogService, MediaUrlService};
use media_gateway::config::{self, Config, DebugLogStore};
use media_gateway::domain::health::ServiceStatus;
use media_gateway::domain::repositories::DebugLogRepository;
use media_gateway::server::{build_health_aggregator, build_repository};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing media-gateway.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Run the health check once and print the report
    Health {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Debug log triage
    Logs {
        #[command(subcommand)]
        action: LogsAction,
    },

    /// Print direct and CDN URLs for an object key
    Url {
        /// Object key, e.g. "videos/intro.mp4"
        key: String,
    },
}

#[derive(Subcommand)]
enum LogsAction {
    /// List entries, newest first
    List {
        /// Only show entries that are not resolved yet
        #[arg(short, long)]
        unresolved: bool,

        /// Maximum number of entries
        #[arg(short, long, default_value_t = 50)]
        limit: i64,
    },

    /// Mark an entry resolved
    Resolve {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Health { json } => handle_health(&config, json).await?,
        Commands::Logs { action } => handle_logs_action(action, &config).await?,
        Commands::Url { key } => handle_url(&config, &key)?,
    }

    Ok(())
}

/// Runs every probe and prints one line per service.
///
/// # Output Format
///
/// ```text
/// 🩺 Health: DEGRADED
///
///   cdn           DEGRADED  CDN domain not configured, serving directly from storage
///   credentials   OK        credentials configured
///   storage       OK        bucket 'media-bucket' reachable
/// ```
async fn handle_health(config: &Config, json: bool) -> Result<()> {
    let aggregator = build_health_aggregator(config)?;
    let report = aggregator.perform_full_health_check().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "🩺 Health:".bright_blue().bold(),
        paint(report.overall()).bold()
    );
    println!();

    for (name, result) in report.services() {
        println!(
            "  {:<13} {:<9} {}",
            name.cyan(),
            paint(result.status),
            result.detail.as_deref().unwrap_or("").bright_black()
        );
    }
    println!();

    Ok(())
}

fn paint(status: ServiceStatus) -> ColoredString {
    let label = status.as_str().to_uppercase();
    match status {
        ServiceStatus::Ok => label.green(),
        ServiceStatus::Degraded => label.yellow(),
        ServiceStatus::Error => label.red(),
    }
}

/// Dispatches debug log commands.
async fn handle_logs_action(action: LogsAction, config: &Config) -> Result<()> {
    ensure_persistent_store(config.debug_log_store)?;
    let service = DebugLogService::<dyn DebugLogRepository>::new(build_repository(config).await?);

    match action {
        LogsAction::List { unresolved, limit } => {
            list_logs(&service, unresolved, limit).await?;
        }
        LogsAction::Resolve { id, yes } => {
            resolve_log(&service, &id, yes).await?;
        }
    }

    Ok(())
}

/// The memory store lives inside one process, so the CLI would only ever see
/// an empty one.
fn ensure_persistent_store(store: DebugLogStore) -> Result<()> {
    match store {
        DebugLogStore::Postgres => Ok(()),
        DebugLogStore::Memory => anyhow::bail!(
            "logs commands need a persistent store; DEBUG_LOG_STORE=memory is only visible to the running server"
        ),
    }
}

/// Lists entries with a status column.
async fn list_logs(
    service: &DebugLogService<dyn DebugLogRepository>,
    unresolved: bool,
    limit: i64,
) -> Result<()> {
    println!("{}", "📋 Debug Logs".bright_blue().bold());
    println!();

    let logs = service
        .list(unresolved.then_some(false), Some(limit))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list debug logs: {}", e))?;

    if logs.is_empty() {
        println!("{}", "  No entries found".yellow());
        return Ok(());
    }

    println!(
        "  {:<14} {:<7} {:<18} {:<10} {}",
        "ID".bright_white().bold(),
        "Level".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold(),
        "Message".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for log in &logs {
        let status = if log.resolved {
            "RESOLVED".green()
        } else {
            "OPEN".yellow()
        };

        let message: String = log.message.chars().take(40).collect();

        println!(
            "  {:<14} {:<7} {:<18} {:<10} {}",
            log.id.cyan(),
            log.level,
            log.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status,
            message
        );
    }

    println!();
    println!("  Total: {}", logs.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Resolves an entry after showing it and asking for confirmation.
async fn resolve_log(
    service: &DebugLogService<dyn DebugLogRepository>,
    id: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔧 Resolve Debug Log".bright_blue().bold());
    println!();

    let log = service
        .get(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    if log.resolved {
        println!("{}", "⚠️  This entry is already resolved".yellow());
        return Ok(());
    }

    println!("  ID:      {}", log.id.cyan());
    println!("  Level:   {}", log.level);
    println!("  Message: {}", log.message);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Mark this entry resolved?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .resolve(&log.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve entry: {}", e))?;

    println!("{}", "✅ Entry resolved".green().bold());
    println!();

    Ok(())
}

/// Prints the URLs the API would return for `key`.
fn handle_url(config: &Config, key: &str) -> Result<()> {
    let urls = MediaUrlService::new(config.storage.clone())
        .build(key)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Key:    {}", urls.key.cyan());
    println!("  Direct: {}", urls.direct_url.bright_white());
    match urls.cdn_url {
        Some(cdn) => println!("  CDN:    {}", cdn.bright_green()),
        None => println!("  CDN:    {}", "not configured".yellow()),
    }

    Ok(())
}
