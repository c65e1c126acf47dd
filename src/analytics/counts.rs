//! Count Series
//!
//! Grouping and counting over flat record lists. Labels resolve through
//! optional fields; a record missing the field lands in the sentinel bucket
//! instead of failing. Date bucketing is the one exception: records without a
//! parsable timestamp are excluded from the series entirely.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::portal::{Application, Job, User};

/// Count records per label
///
/// Records where the key resolves to `None` count toward the sentinel
/// `default` label. The result is ordered by descending count, ties broken
/// by label so the output is deterministic.
pub fn count_by<T, F>(records: &[T], key: F, default: &str) -> Vec<(String, u64)>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for record in records {
        let label = key(record).unwrap_or(default);
        *counts.entry(label.to_string()).or_default() += 1;
    }

    let mut series: Vec<(String, u64)> = counts.into_iter().collect();
    series.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    series
}

/// Users grouped by role label
pub fn users_by_role(users: &[User]) -> Vec<(String, u64)> {
    count_by(users, |u| u.role.as_deref(), "unknown")
}

/// Jobs grouped by type label
pub fn jobs_by_type(jobs: &[Job]) -> Vec<(String, u64)> {
    count_by(jobs, |j| j.job_type.as_deref(), "unknown")
}

/// Applications grouped by the embedded job's company
///
/// A missing or malformed embedded job degrades to the "Unknown" bucket.
pub fn applications_per_company(applications: &[Application]) -> Vec<(String, u64)> {
    count_by(
        applications,
        |a| a.job.as_ref().and_then(|j| j.company.as_deref()),
        "Unknown",
    )
}

/// Applications per calendar day, ascending
///
/// Timestamps are ISO-like strings; the first ten characters are the date.
/// Applications with a missing or unparsable timestamp are left out of the
/// series rather than sentineled.
pub fn applications_per_day(applications: &[Application]) -> Vec<(NaiveDate, u64)> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for application in applications {
        let Some(day) = application.created_at.as_deref().and_then(parse_day) else {
            continue;
        };
        *counts.entry(day).or_default() += 1;
    }

    counts.into_iter().collect()
}

/// Calendar date from an ISO-like timestamp, truncating time-of-day
fn parse_day(timestamp: &str) -> Option<NaiveDate> {
    let day = timestamp.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::JobRef;

    fn application(company: Option<&str>, created_at: Option<&str>) -> Application {
        Application {
            id: None,
            job: Some(JobRef {
                title: None,
                company: company.map(str::to_string),
            }),
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn test_count_by_empty_input() {
        let users: Vec<User> = Vec::new();
        assert!(users_by_role(&users).is_empty());
    }

    #[test]
    fn test_count_by_missing_field_uses_sentinel() {
        let users = vec![
            User {
                role: Some("applicant".to_string()),
                ..Default::default()
            },
            User::default(),
            User {
                role: Some("applicant".to_string()),
                ..Default::default()
            },
        ];

        let series = users_by_role(&users);
        assert_eq!(
            series,
            vec![
                ("applicant".to_string(), 2),
                ("unknown".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_count_by_orders_ties_by_label() {
        let jobs = vec![
            Job {
                job_type: Some("remote".to_string()),
                ..Default::default()
            },
            Job {
                job_type: Some("full-time".to_string()),
                ..Default::default()
            },
        ];

        let series = jobs_by_type(&jobs);
        assert_eq!(
            series,
            vec![
                ("full-time".to_string(), 1),
                ("remote".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_company_series_with_unknown_bucket() {
        // The spec scenario: one Acme application, one with an empty job
        let applications = vec![
            application(Some("Acme"), Some("2024-01-05T10:00:00")),
            application(None, Some("2024-01-05T11:00:00")),
        ];

        let series = applications_per_company(&applications);
        assert_eq!(
            series,
            vec![("Acme".to_string(), 1), ("Unknown".to_string(), 1)]
        );

        let days = applications_per_day(&applications);
        assert_eq!(
            days,
            vec![(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), 2)]
        );
    }

    #[test]
    fn test_absent_embedded_job_counts_as_unknown() {
        let applications = vec![Application::default()];
        let series = applications_per_company(&applications);
        assert_eq!(series, vec![("Unknown".to_string(), 1)]);
    }

    #[test]
    fn test_day_series_ascending_and_skips_bad_timestamps() {
        let applications = vec![
            application(Some("Acme"), Some("2024-02-01T09:00:00")),
            application(Some("Acme"), Some("2024-01-15T12:30:00")),
            application(Some("Acme"), Some("2024-02-01T17:45:00")),
            application(Some("Acme"), Some("not-a-date")),
            application(Some("Acme"), Some("")),
            application(Some("Acme"), None),
        ];

        let days = applications_per_day(&applications);
        assert_eq!(
            days,
            vec![
                (NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), 1),
                (NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), 2),
            ]
        );
    }

    #[test]
    fn test_parse_day_truncates_time_of_day() {
        assert_eq!(
            parse_day("2024-01-05T10:00:00.123Z"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(parse_day("2024-01"), None);
        assert_eq!(parse_day("0000000000"), None);
    }
}
