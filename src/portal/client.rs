//! Portal REST API Client
//!
//! HTTP client for the remote job-portal API: login and authenticated
//! collection fetches.
//!
//! Fetches are best-effort. A timeout is retried after a fixed backoff, up to
//! the configured number of attempts; any other failure (bad status, broken
//! transport, unparsable body) is warned about once and stops the loop
//! immediately. Either way the caller gets a list - possibly empty - and
//! never an error, so downstream aggregation sees missing data as zero
//! records.

use std::future::Future;
use std::time::Duration;

use reqwest::header;
use reqwest::Client;
use serde::Serialize;

use super::session::SessionStore;
use super::PortalError;
use crate::config::PortalConfig;

/// Client for the job-portal REST API
pub struct PortalClient {
    client: Client,
    base_url: String,
    max_tries: u32,
    retry_backoff: Duration,
}

impl PortalClient {
    /// Create a new client from portal configuration
    pub fn new(config: &PortalConfig) -> Result<Self, PortalError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| PortalError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tries: config.max_tries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticate against the portal
    ///
    /// Sends the credentials to `POST {base}/user/login` and extracts the
    /// bearer token from the JSON body's `token` field or, failing that,
    /// from a `token` response cookie.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, PortalError> {
        let url = format!("{}/user/login", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PortalError::Timeout
                } else {
                    PortalError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortalError::AuthFailed {
                status: status.as_u16(),
            });
        }

        // Grab the cookie before the body consumes the response
        let cookie_token = response
            .cookies()
            .find(|c| c.name() == "token")
            .map(|c| c.value().to_string());

        let body = match response.json::<serde_json::Value>().await {
            Ok(value) => Some(value),
            Err(e) if cookie_token.is_none() => return Err(PortalError::Parse(e.to_string())),
            Err(_) => None,
        };

        extract_token(body.as_ref(), cookie_token).ok_or(PortalError::NoToken)
    }

    /// Fetch a collection from an authenticated endpoint
    ///
    /// Attaches `Authorization: Bearer <token>` and a `token` cookie. The
    /// only error this can return is [`PortalError::NotAuthenticated`];
    /// transport and status problems degrade to an empty list.
    pub async fn fetch_list<T>(
        &self,
        path: &str,
        session: &SessionStore,
    ) -> Result<Vec<T>, PortalError>
    where
        T: serde::de::DeserializeOwned,
    {
        let bearer = session.bearer().ok_or(PortalError::NotAuthenticated)?;
        let cookie = session.cookie().ok_or(PortalError::NotAuthenticated)?;
        let url = format!("{}{}", self.base_url, path);

        let list = fetch_with(path, self.max_tries, self.retry_backoff, || {
            let request = self
                .client
                .get(&url)
                .header(header::AUTHORIZATION, bearer.as_str())
                .header(header::COOKIE, cookie.as_str());

            async move {
                let response = request.send().await.map_err(classify)?;
                let status = response.status();
                if !status.is_success() {
                    return Err(AttemptError::Status {
                        status: status.as_u16(),
                    });
                }
                response.json::<Vec<T>>().await.map_err(classify)
            }
        })
        .await;

        Ok(list)
    }
}

/// Drive the fetch attempts for one endpoint
///
/// Timeouts sleep the backoff and consume another attempt; everything else
/// stops the loop after a warning. Exhaustion returns an empty list.
async fn fetch_with<T, F, Fut>(path: &str, max_tries: u32, backoff: Duration, mut attempt: F) -> Vec<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Vec<T>, AttemptError>>,
{
    for try_no in 1..=max_tries {
        match attempt().await {
            Ok(list) => return list,
            Err(AttemptError::Timeout) => {
                tracing::warn!("{} timed out (attempt {}/{})", path, try_no, max_tries);
                if try_no < max_tries {
                    tokio::time::sleep(backoff).await;
                }
            }
            Err(AttemptError::Status { status }) => {
                tracing::warn!("{} -> {}", path, status);
                break;
            }
            Err(AttemptError::Transport(message)) => {
                tracing::warn!("{} failed: {}", path, message);
                break;
            }
        }
    }

    Vec::new()
}

/// One failed fetch attempt, classified for the retry policy
#[derive(Debug)]
enum AttemptError {
    Timeout,
    Status { status: u16 },
    Transport(String),
}

fn classify(e: reqwest::Error) -> AttemptError {
    if e.is_timeout() {
        AttemptError::Timeout
    } else {
        AttemptError::Transport(e.to_string())
    }
}

/// Token from the login body's `token` field, else the `token` cookie
fn extract_token(body: Option<&serde_json::Value>, cookie: Option<String>) -> Option<String> {
    body.and_then(|b| b.get("token"))
        .and_then(|t| t.as_str())
        .map(str::to_string)
        .or(cookie)
}

// ============================================
// Request DTOs
// ============================================

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_extract_token_prefers_body() {
        let body = serde_json::json!({ "token": "abc" });
        let token = extract_token(Some(&body), Some("from-cookie".to_string()));
        assert_eq!(token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_extract_token_falls_back_to_cookie() {
        let body = serde_json::json!({ "message": "ok" });
        let token = extract_token(Some(&body), Some("from-cookie".to_string()));
        assert_eq!(token.as_deref(), Some("from-cookie"));

        assert_eq!(extract_token(Some(&body), None), None);
        assert_eq!(extract_token(None, None), None);
    }

    #[tokio::test]
    async fn test_exhausted_timeouts_return_empty() {
        let calls = Cell::new(0u32);

        let list: Vec<i32> = fetch_with("/user/getall", 3, Duration::from_millis(1), || {
            calls.set(calls.get() + 1);
            async { Err(AttemptError::Timeout) }
        })
        .await;

        assert!(list.is_empty());
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_bad_status_stops_immediately() {
        let calls = Cell::new(0u32);

        let list: Vec<i32> = fetch_with("/job/getall", 3, Duration::from_millis(1), || {
            calls.set(calls.get() + 1);
            async {
                Err(AttemptError::Status { status: 500 })
            }
        })
        .await;

        assert!(list.is_empty());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_stops_immediately() {
        let calls = Cell::new(0u32);

        let list: Vec<i32> = fetch_with("/apply/getall", 3, Duration::from_millis(1), || {
            calls.set(calls.get() + 1);
            async { Err(AttemptError::Transport("connection reset".to_string())) }
        })
        .await;

        assert!(list.is_empty());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_retry_then_success_returns_body() {
        let calls = Cell::new(0u32);

        let list: Vec<i32> = fetch_with("/apply/getall", 3, Duration::from_millis(1), || {
            calls.set(calls.get() + 1);
            let try_no = calls.get();
            async move {
                if try_no < 3 {
                    Err(AttemptError::Timeout)
                } else {
                    Ok(vec![1, 2, 3])
                }
            }
        })
        .await;

        assert_eq!(list, vec![1, 2, 3]);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_first_success_uses_one_attempt() {
        let calls = Cell::new(0u32);

        let list: Vec<i32> = fetch_with("/user/getall", 3, Duration::from_millis(1), || {
            calls.set(calls.get() + 1);
            async { Ok(vec![7]) }
        })
        .await;

        assert_eq!(list, vec![7]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_base_url_normalized() {
        let config = PortalConfig {
            base_url: "http://localhost:5000/api/".to_string(),
            ..Default::default()
        };
        let client = PortalClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }
}
