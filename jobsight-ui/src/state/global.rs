//! Global Application State
//!
//! Reactive state management using Leptos signals. The session is either
//! Unauthenticated (no token, login page only) or Authenticated; fetched
//! collections live in a single snapshot that stays fresh for five minutes
//! and is dropped on any credential change.

use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};

/// How long a fetched snapshot stays fresh (5 minutes)
pub const CACHE_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Bearer token for the active session
    pub token: RwSignal<Option<String>>,
    /// Last fetched set of portal collections
    pub snapshot: RwSignal<Option<Snapshot>>,
    /// When the snapshot was fetched (JS epoch ms)
    pub fetched_at: RwSignal<Option<f64>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// One fetched set of portal collections
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub jobs: Vec<Job>,
    pub applications: Vec<Application>,
}

/// A portal user account
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// A posted job
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub company: Option<String>,
}

/// An application for a job
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    /// Embedded job sub-object; may be absent or malformed upstream
    #[serde(deserialize_with = "lenient_job_ref")]
    pub job: Option<JobRef>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// The job sub-object embedded in an application
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct JobRef {
    pub title: Option<String>,
    pub company: Option<String>,
}

/// A non-object embedded job (bare id, null) degrades to `None` instead of
/// failing the whole collection.
fn lenient_job_ref<'de, D>(deserializer: D) -> Result<Option<JobRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        token: create_rw_signal(None),
        snapshot: create_rw_signal(None),
        fetched_at: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Store a freshly issued token; any cached snapshot belongs to the old
    /// credential and is dropped.
    pub fn set_token(&self, token: String) {
        self.token.set(Some(token));
        self.invalidate();
    }

    /// Back to Unauthenticated; cached data goes with the credential
    pub fn logout(&self) {
        self.token.set(None);
        self.invalidate();
    }

    /// Drop the cached snapshot
    pub fn invalidate(&self) {
        self.snapshot.set(None);
        self.fetched_at.set(None);
    }

    /// Whether the cached snapshot is still within the TTL window
    pub fn is_fresh(&self) -> bool {
        match self.fetched_at.get_untracked() {
            Some(at) => js_sys::Date::now() - at < CACHE_TTL_MS,
            None => false,
        }
    }

    /// Store a fetched snapshot, restarting the TTL window
    pub fn store_snapshot(&self, snapshot: Snapshot) {
        self.snapshot.set(Some(snapshot));
        self.fetched_at.set(Some(js_sys::Date::now()));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_records_deserialize() {
        let users: Vec<User> =
            serde_json::from_str(r#"[{}, {"role": "recruiter", "name": "R"}]"#).unwrap();
        assert_eq!(users[0].role, None);
        assert_eq!(users[1].role.as_deref(), Some("recruiter"));
    }

    #[test]
    fn test_malformed_embedded_job_degrades_to_none() {
        let app: Application =
            serde_json::from_str(r#"{"job": "65ab3f", "createdAt": "2024-01-05T10:00:00"}"#)
                .unwrap();
        assert_eq!(app.job, None);
        assert_eq!(app.created_at.as_deref(), Some("2024-01-05T10:00:00"));
    }

    #[test]
    fn test_job_type_rename() {
        let job: Job = serde_json::from_str(r#"{"type": "part-time"}"#).unwrap();
        assert_eq!(job.job_type.as_deref(), Some("part-time"));
    }
}
