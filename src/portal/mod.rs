//! Portal Access Layer
//!
//! Everything that talks to the remote job-portal API:
//! - [`SessionStore`]: the single bearer credential for the active session
//! - [`PortalClient`]: login plus authenticated GETs with retry-on-timeout
//! - [`SnapshotCache`]: TTL memoization of the fetched collections
//! - [`Dashboard`]: the session context tying the three together
//!
//! Failure policy: login errors surface to the caller; collection fetches
//! never do. A fetch that times out repeatedly or comes back with a bad
//! status degrades to an empty list with a warning, and downstream
//! aggregation treats that as zero records.

mod cache;
mod client;
mod loader;
mod records;
mod session;

pub use cache::{Snapshot, SnapshotCache};
pub use client::PortalClient;
pub use loader::Dashboard;
pub use records::{Application, Job, JobRef, User};
pub use session::SessionStore;

/// Errors that can occur when talking to the portal API
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("Login failed with status {status}")]
    AuthFailed { status: u16 },

    #[error("Login succeeded but no token was returned")]
    NoToken,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response body: {0}")]
    Parse(String),
}
