//! Jobsight CLI
//!
//! Terminal rendition of the job-portal dashboard:
//! - Collection totals
//! - Users by role / jobs by type / applications per company
//! - Applications over time
//!
//! # Configuration
//!
//! Environment variables:
//! - `JOBSIGHT_API_BASE`: Portal API base URL (default: http://localhost:5000/api)
//! - `JOBSIGHT_EMAIL` / `JOBSIGHT_PASSWORD`: Login credentials
//! - `JOBSIGHT_CACHE_TTL_SECS`: Snapshot cache TTL (default: 300)
//! - `RUST_LOG`: Log level (default: info)

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobsight::analytics;
use jobsight::config::{generate_default_config, Config};
use jobsight::portal::{Dashboard, Snapshot};

#[derive(Parser)]
#[command(name = "jobsight")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Job-portal analytics from the terminal")]
#[command(long_about = "Jobsight logs in to the job-portal API, pulls the users, jobs and\napplications collections, and prints the same count series the dashboard charts.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Portal API base URL (overrides config and JOBSIGHT_API_BASE)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Login email (or JOBSIGHT_EMAIL)
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Login password (or JOBSIGHT_PASSWORD)
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "table", global = true, value_parser = ["table", "json"])]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collection totals
    Summary,

    /// Users grouped by role
    Roles,

    /// Jobs grouped by type
    Types,

    /// Applications per company
    Companies,

    /// Applications per day
    Timeline,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobsight=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Commands::Config { output } = &cli.command {
        let config = generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &config)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", config),
        }
        return Ok(());
    }

    let mut config = Config::load_default();
    if let Some(url) = &cli.api_url {
        config.portal.base_url = url.clone();
    }

    let snapshot = load_snapshot(&cli, &config).await?;

    match cli.command {
        Commands::Summary => {
            if cli.format == "json" {
                let body = serde_json::json!({
                    "users": snapshot.users.len(),
                    "jobs": snapshot.jobs.len(),
                    "applications": snapshot.applications.len(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("Users:        {}", snapshot.users.len());
                println!("Jobs:         {}", snapshot.jobs.len());
                println!("Applications: {}", snapshot.applications.len());
            }
        }

        Commands::Roles => {
            let series = analytics::users_by_role(&snapshot.users);
            print_labeled(&series, "Role", &cli.format)?;
        }

        Commands::Types => {
            let series = analytics::jobs_by_type(&snapshot.jobs);
            print_labeled(&series, "Type", &cli.format)?;
        }

        Commands::Companies => {
            let series = analytics::applications_per_company(&snapshot.applications);
            print_labeled(&series, "Company", &cli.format)?;
        }

        Commands::Timeline => {
            let series = analytics::applications_per_day(&snapshot.applications);
            if cli.format == "json" {
                let body: Vec<_> = series
                    .iter()
                    .map(|(day, count)| {
                        serde_json::json!({ "date": day.to_string(), "count": count })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else if series.is_empty() {
                println!("No dated applications");
            } else {
                println!("{:<12} {}", "Date", "Applications");
                println!("{}", "-".repeat(25));
                for (day, count) in series {
                    println!("{:<12} {}", day, count);
                }
            }
        }

        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Log in and pull the three collections
async fn load_snapshot(cli: &Cli, config: &Config) -> anyhow::Result<std::sync::Arc<Snapshot>> {
    let email = cli
        .email
        .clone()
        .or_else(|| std::env::var("JOBSIGHT_EMAIL").ok());
    let password = cli
        .password
        .clone()
        .or_else(|| std::env::var("JOBSIGHT_PASSWORD").ok());

    let (Some(email), Some(password)) = (email, password) else {
        bail!("Credentials required: pass --email/--password or set JOBSIGHT_EMAIL/JOBSIGHT_PASSWORD");
    };

    let dashboard = Dashboard::new(config)?;
    dashboard
        .login(&email, &password)
        .await
        .with_context(|| format!("Cannot log in to {}", config.portal.base_url))?;

    let snapshot = dashboard.load_all().await?;
    Ok(snapshot)
}

/// Print a (label, count) series as a table or JSON
fn print_labeled(series: &[(String, u64)], header: &str, format: &str) -> anyhow::Result<()> {
    if format == "json" {
        let body: Vec<_> = series
            .iter()
            .map(|(label, count)| serde_json::json!({ "label": label, "count": count }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if series.is_empty() {
        println!("No records");
        return Ok(());
    }

    println!("{:<24} {}", header, "Count");
    println!("{}", "-".repeat(32));
    for (label, count) in series {
        println!("{:<24} {}", label, count);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_accepts_known_values() {
        let cli = Cli::try_parse_from(["jobsight", "summary", "--format", "json"]).unwrap();
        assert_eq!(cli.format, "json");

        let cli = Cli::try_parse_from(["jobsight", "summary"]).unwrap();
        assert_eq!(cli.format, "table");
    }

    #[test]
    fn test_format_rejects_typos() {
        assert!(Cli::try_parse_from(["jobsight", "summary", "--format", "jsn"]).is_err());
    }
}
