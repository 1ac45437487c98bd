//! Weight Logs CLI
//!
//! Drives the weight log component from the command line:
//! - `list` mounts the component and prints the entries it fetched
//! - `add` fills the form, submits it and prints the refreshed list

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weight_logs_client::{config::AppConfig, HttpWeightLogApi, WeightLogApi, WeightLogsComponent};
use weight_logs_shared::{FormField, FormState, WeightLogEntry};

#[derive(Parser)]
#[command(name = "weight-logs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Record and review body-weight logs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Weight log service URL (overrides WL__API__BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// User whose logs are read and written
    #[arg(long, global = true)]
    user_id: Option<String>,

    /// Bearer token for the service
    #[arg(long, env = "WL_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List weight logs
    List {
        /// Only show entries recorded on this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Record a new weight log
    Add {
        /// Current weight
        #[arg(short, long)]
        weight: String,
        /// Target weight
        #[arg(short, long, default_value = "")]
        target_weight: String,
        /// Unit of both weights
        #[arg(short, long, default_value = "KG")]
        unit: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    let mut session = config.session.session();
    if let Some(user_id) = cli.user_id {
        session.user_id = user_id;
    }
    if let Some(token) = cli.token {
        session.token = token;
    }

    let api = HttpWeightLogApi::new(&config.api).context("Failed to build HTTP client")?;
    info!(base_url = %api.base_url(), user_id = %session.user_id, "Starting weight log client");
    let form = FormState::for_session(session);

    match cli.command {
        Commands::List { date } => {
            let component = WeightLogsComponent::new(api, form).with_date_filter(date);
            component
                .try_fetch_weight_logs()
                .await
                .context("Failed to fetch weight logs")?;
            render(&component);
        }
        Commands::Add {
            weight,
            target_weight,
            unit,
        } => {
            let component = WeightLogsComponent::new(api, form);
            component.mount().await;
            component.edit(FormField::Weight, weight);
            component.edit(FormField::TargetWeight, target_weight);
            component.edit(FormField::Unit, unit);
            component
                .try_submit()
                .await
                .context("Failed to add weight log")?;
            render(&component);
        }
    }

    Ok(())
}

fn render<A: WeightLogApi>(component: &WeightLogsComponent<A>) {
    let logs = component.logs();
    if logs.is_empty() {
        println!("No weight logs.");
        return;
    }
    for entry in &logs {
        println!("{}", format_entry(entry));
    }
}

fn format_entry(entry: &WeightLogEntry) -> String {
    let mut line = format!("{:<25} {:>7.1} {}", entry.timestamp, entry.weight, entry.unit);
    if let Some(target) = entry.target_weight {
        line.push_str(&format!("  target {:.1}", target));
    }
    if let Some(remaining) = entry.remaining_to_target() {
        line.push_str(&format!(" ({:+.1})", remaining));
    }
    line
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout only carries the rendered list.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "weight_logs_client=warn".into()
        } else {
            "weight_logs_client=info".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
