//! # Jobsight
//!
//! Job-Portal Analytics - the data pipeline behind the job-portal dashboard:
//! authenticate against the remote portal API, fetch the users / jobs /
//! applications collections, cache them for a short window, and derive the
//! count series the charts and tables are drawn from.
//!
//! ## Modules
//!
//! - [`portal`]: session store, HTTP client with retry, TTL snapshot cache
//! - [`analytics`]: pure grouping / counting over the fetched records
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jobsight::config::Config;
//! use jobsight::portal::Dashboard;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let dashboard = Dashboard::new(&config)?;
//!
//!     dashboard.login("me@example.com", "hunter2").await?;
//!
//!     // Cached for the configured TTL; repeat calls within the window
//!     // reuse the same snapshot.
//!     let snapshot = dashboard.load_all().await?;
//!
//!     for (role, count) in jobsight::analytics::users_by_role(&snapshot.users) {
//!         println!("{role}: {count}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod portal;

// Re-export top-level types for convenience
pub use portal::{
    Application, Dashboard, Job, JobRef, PortalClient, PortalError, SessionStore, Snapshot,
    SnapshotCache, User,
};

pub use analytics::{
    applications_per_company, applications_per_day, count_by, jobs_by_type, users_by_role,
};

pub use config::{CacheConfig, Config, ConfigError, LoggingConfig, PortalConfig};
