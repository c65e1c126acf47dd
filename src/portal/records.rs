//! Portal Record Types
//!
//! The remote API returns loosely-typed JSON records; every field here is
//! optional and defaults to `None` so a sparse or oddly-shaped record never
//! fails the whole collection. Sentinel labels ("unknown" / "Unknown") are
//! applied later, in the aggregation layer.

use serde::{Deserialize, Deserializer, Serialize};

/// A portal user account
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Role label, free-text / enum-like ("applicant", "recruiter", ...)
    pub role: Option<String>,
}

/// A posted job
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    /// Job-type label ("full-time", "remote", ...)
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub company: Option<String>,
}

/// An application for a job
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    /// Embedded job sub-object; may be absent or malformed upstream
    #[serde(deserialize_with = "lenient_job_ref")]
    pub job: Option<JobRef>,
    /// ISO-like creation timestamp, e.g. "2024-01-05T10:00:00"
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// The job sub-object embedded in an application
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct JobRef {
    pub title: Option<String>,
    pub company: Option<String>,
}

/// Accept anything for the embedded job: a non-object (bare id, null,
/// number) degrades to `None` instead of failing the collection.
fn lenient_job_ref<'de, D>(deserializer: D) -> Result<Option<JobRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_records_deserialize() {
        let users: Vec<User> = serde_json::from_str(r#"[{}, {"role": "recruiter"}]"#).unwrap();
        assert_eq!(users[0].role, None);
        assert_eq!(users[1].role.as_deref(), Some("recruiter"));
    }

    #[test]
    fn test_application_created_at_rename() {
        let app: Application =
            serde_json::from_str(r#"{"createdAt": "2024-01-05T10:00:00"}"#).unwrap();
        assert_eq!(app.created_at.as_deref(), Some("2024-01-05T10:00:00"));
    }

    #[test]
    fn test_malformed_embedded_job_degrades_to_none() {
        // A dangling reference serialized as a bare id string
        let app: Application = serde_json::from_str(r#"{"job": "65ab3f"}"#).unwrap();
        assert_eq!(app.job, None);

        let app: Application = serde_json::from_str(r#"{"job": null}"#).unwrap();
        assert_eq!(app.job, None);

        let app: Application = serde_json::from_str(r#"{"job": {}}"#).unwrap();
        assert_eq!(app.job, Some(JobRef::default()));
    }

    #[test]
    fn test_job_type_rename() {
        let job: Job = serde_json::from_str(r#"{"type": "full-time"}"#).unwrap();
        assert_eq!(job.job_type.as_deref(), Some("full-time"));
    }
}
