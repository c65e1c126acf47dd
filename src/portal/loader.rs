//! Dashboard Session Context
//!
//! [`Dashboard`] is the explicit context object the rest of the system works
//! through: it owns the portal client, the session credential and the
//! snapshot cache, and keeps them consistent - any credential change
//! invalidates whatever was cached.

use std::sync::Arc;
use std::time::Duration;

use super::cache::{Snapshot, SnapshotCache};
use super::client::PortalClient;
use super::session::SessionStore;
use super::PortalError;
use crate::config::Config;

/// Session context: client + credential + cache
pub struct Dashboard {
    client: PortalClient,
    session: SessionStore,
    cache: SnapshotCache,
}

impl Dashboard {
    pub fn new(config: &Config) -> Result<Self, PortalError> {
        Ok(Self {
            client: PortalClient::new(&config.portal)?,
            session: SessionStore::new(),
            cache: SnapshotCache::new(Duration::from_secs(config.cache.ttl_secs)),
        })
    }

    /// Authenticate and enter the Authenticated state
    ///
    /// A successful login stores the token and drops any cached snapshot so
    /// the next load fetches under the new credential.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), PortalError> {
        let token = self.client.login(email, password).await?;
        self.session.set_token(token);
        self.cache.invalidate();
        tracing::info!("Logged in to {}", self.client.base_url());
        Ok(())
    }

    /// Discard the credential and cached data
    pub fn logout(&self) {
        self.session.clear();
        self.cache.invalidate();
        tracing::info!("Logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Load the users, jobs and applications collections
    ///
    /// Returns the cached snapshot while it is fresh; otherwise issues the
    /// three GETs and caches whatever they produced - degraded (empty)
    /// collections included, matching the best-effort fetch policy.
    pub async fn load_all(&self) -> Result<Arc<Snapshot>, PortalError> {
        if !self.session.is_authenticated() {
            return Err(PortalError::NotAuthenticated);
        }

        if let Some(snapshot) = self.cache.get() {
            return Ok(snapshot);
        }

        let snapshot = Snapshot {
            users: self.client.fetch_list("/user/getall", &self.session).await?,
            jobs: self.client.fetch_list("/job/getall", &self.session).await?,
            applications: self.client.fetch_list("/apply/getall", &self.session).await?,
        };

        tracing::debug!(
            "Fetched snapshot: {} users, {} jobs, {} applications",
            snapshot.users.len(),
            snapshot.jobs.len(),
            snapshot.applications.len()
        );

        Ok(self.cache.store(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CacheConfig, PortalConfig};

    /// Config pointing at a port nothing listens on, so every fetch attempt
    /// fails fast with a connection error and degrades to empty.
    fn unreachable_config() -> Config {
        Config {
            portal: PortalConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                request_timeout_secs: 2,
                max_tries: 1,
                retry_backoff_ms: 1,
            },
            cache: CacheConfig { ttl_secs: 60 },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_all_requires_authentication() {
        let dashboard = Dashboard::new(&unreachable_config()).unwrap();
        let err = dashboard.load_all().await.unwrap_err();
        assert!(matches!(err, PortalError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_load_all_is_memoized_within_ttl() {
        let dashboard = Dashboard::new(&unreachable_config()).unwrap();
        dashboard.session.set_token("abc".to_string());

        let first = dashboard.load_all().await.unwrap();
        let second = dashboard.load_all().await.unwrap();

        // Same Arc: the second call never went back to the client
        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.users.is_empty());
    }

    #[tokio::test]
    async fn test_credential_change_forces_refetch() {
        let dashboard = Dashboard::new(&unreachable_config()).unwrap();
        dashboard.session.set_token("abc".to_string());

        let first = dashboard.load_all().await.unwrap();

        dashboard.logout();
        assert!(!dashboard.is_authenticated());
        assert!(matches!(
            dashboard.load_all().await.unwrap_err(),
            PortalError::NotAuthenticated
        ));

        dashboard.session.set_token("def".to_string());
        let second = dashboard.load_all().await.unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
