//! Snapshot Cache
//!
//! TTL memoization for the three fetched collections. Within the window,
//! repeated loads reuse the stored snapshot; after it, or after an explicit
//! invalidation on credential change, the next load refetches. There is no
//! per-key locking or build coordination - the cache is session-scoped and
//! single-writer.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::records::{Application, Job, User};

/// One fetched set of portal collections
#[derive(Debug, Default, Clone)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub jobs: Vec<Job>,
    pub applications: Vec<Application>,
}

/// TTL cache holding at most one snapshot
#[derive(Debug)]
pub struct SnapshotCache {
    ttl: Duration,
    slot: Mutex<Option<(Instant, Arc<Snapshot>)>>,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// The cached snapshot, if still within the TTL window
    pub fn get(&self) -> Option<Arc<Snapshot>> {
        let slot = self.slot.lock().unwrap();
        match slot.as_ref() {
            Some((stored_at, snapshot)) if stored_at.elapsed() < self.ttl => {
                Some(Arc::clone(snapshot))
            }
            _ => None,
        }
    }

    /// Store a fresh snapshot, restarting the TTL window
    pub fn store(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        *self.slot.lock().unwrap() = Some((Instant::now(), Arc::clone(&snapshot)));
        snapshot
    }

    /// Drop the cached snapshot; called whenever the credential changes
    pub fn invalidate(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_snapshot_is_reused() {
        let cache = SnapshotCache::new(Duration::from_secs(60));
        assert!(cache.get().is_none());

        let stored = cache.store(Snapshot::default());
        let again = cache.get().unwrap();
        assert!(Arc::ptr_eq(&stored, &again));
    }

    #[test]
    fn test_expiry() {
        let cache = SnapshotCache::new(Duration::from_millis(20));
        cache.store(Snapshot::default());
        assert!(cache.get().is_some());

        std::thread::sleep(Duration::from_millis(30));
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_invalidate() {
        let cache = SnapshotCache::new(Duration::from_secs(60));
        cache.store(Snapshot::default());
        cache.invalidate();
        assert!(cache.get().is_none());
    }
}
