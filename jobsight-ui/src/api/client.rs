//! HTTP API Client
//!
//! Functions for communicating with the job-portal REST API.
//!
//! Collection fetches are best-effort: network failures back off and retry a
//! bounded number of times, anything else is warned about once, and either
//! way the caller gets a (possibly empty) list rather than an error.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

use crate::state::global::Snapshot;

/// One snapshot fetch: the collections plus any degradation notices
///
/// A collection that could not be fetched comes back empty with a matching
/// entry in `warnings`; the dashboard surfaces those as a toast so zero-count
/// charts are never mistaken for real data.
pub struct FetchOutcome {
    pub snapshot: Snapshot,
    pub warnings: Vec<String>,
}

impl FetchOutcome {
    /// Single toast-able message covering every degraded collection
    pub fn warning_summary(&self) -> Option<String> {
        if self.warnings.is_empty() {
            None
        } else {
            Some(self.warnings.join("; "))
        }
    }
}

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Attempts per fetch before degrading to an empty collection
pub const MAX_TRIES: u32 = 3;

/// Pause between failed attempts (ms)
const RETRY_BACKOFF_MS: u32 = 2_000;

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("jobsight_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("jobsight_api_url", url);
        }
    }
}

// ============ API Functions ============

/// Log in and return the bearer token
///
/// The token comes from the response body's `token` field or, failing that,
/// from the `token` cookie the portal sets alongside it.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest<'a> {
        email: &'a str,
        password: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/user/login", api_base))
        .json(&LoginRequest { email, password })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed ({})", response.status()));
    }

    let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);

    body.get("token")
        .and_then(|t| t.as_str())
        .map(str::to_string)
        .or_else(cookie_token)
        .ok_or_else(|| "No token in response".to_string())
}

/// The `token` cookie, if the portal set one we can read
fn cookie_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|c| c.strip_prefix("token=").map(str::to_string))
}

/// Fetch one authenticated collection, degrading to empty on failure
///
/// The browser's fetch has no separate timeout signal, so any network error
/// is treated as the retryable case: back off and try again, up to
/// [`MAX_TRIES`]. A non-success status stops immediately.
///
/// Only the `Authorization` header is attached; browsers reserve the `Cookie`
/// header for themselves, so the `token` cookie rides along automatically
/// only if the portal set it on this origin.
///
/// On failure the returned message names the degraded endpoint so the caller
/// can show it to the user.
async fn fetch_list<T>(path: &str, token: &str) -> (Vec<T>, Option<String>)
where
    T: serde::de::DeserializeOwned,
{
    let url = format!("{}{}", get_api_base(), path);
    let bearer = format!("Bearer {}", token);

    for try_no in 1..=MAX_TRIES {
        match Request::get(&url)
            .header("Authorization", &bearer)
            .send()
            .await
        {
            Ok(response) if response.ok() => match response.json::<Vec<T>>().await {
                Ok(list) => return (list, None),
                Err(e) => {
                    warn(&format!("{} parse error: {}", path, e));
                    return (Vec::new(), Some(format!("{} returned an unreadable body", path)));
                }
            },
            Ok(response) => {
                warn(&format!("{} -> {}", path, response.status()));
                return (
                    Vec::new(),
                    Some(format!("{} failed with status {}", path, response.status())),
                );
            }
            Err(e) => {
                warn(&format!(
                    "{} failed (attempt {}/{}): {}",
                    path, try_no, MAX_TRIES, e
                ));
                if try_no < MAX_TRIES {
                    TimeoutFuture::new(RETRY_BACKOFF_MS).await;
                }
            }
        }
    }

    (
        Vec::new(),
        Some(format!("{} unreachable after {} attempts", path, MAX_TRIES)),
    )
}

/// Fetch the users, jobs and applications collections
pub async fn fetch_snapshot(token: &str) -> FetchOutcome {
    let mut warnings = Vec::new();

    let (users, w) = fetch_list("/user/getall", token).await;
    warnings.extend(w);
    let (jobs, w) = fetch_list("/job/getall", token).await;
    warnings.extend(w);
    let (applications, w) = fetch_list("/apply/getall", token).await;
    warnings.extend(w);

    FetchOutcome {
        snapshot: Snapshot {
            users,
            jobs,
            applications,
        },
        warnings,
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_fetch_has_no_warning_summary() {
        let outcome = FetchOutcome {
            snapshot: Snapshot::default(),
            warnings: Vec::new(),
        };
        assert_eq!(outcome.warning_summary(), None);
    }

    #[test]
    fn test_degraded_collections_produce_one_message() {
        let outcome = FetchOutcome {
            snapshot: Snapshot::default(),
            warnings: vec![
                "/user/getall unreachable after 3 attempts".to_string(),
                "/apply/getall failed with status 500".to_string(),
            ],
        };
        assert_eq!(
            outcome.warning_summary().as_deref(),
            Some("/user/getall unreachable after 3 attempts; /apply/getall failed with status 500")
        );
    }
}
