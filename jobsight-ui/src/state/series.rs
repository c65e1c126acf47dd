//! Chart Series
//!
//! Pure derivations from the snapshot to the (label, count) and
//! (date, count) series the canvas charts draw. Records missing a label fall
//! into a sentinel bucket; records missing a parsable timestamp are excluded
//! from the timeline.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use super::global::{Application, Job, User};

/// Count records per label, sentinel bucket for missing labels
///
/// Ordered by descending count, ties by label.
pub fn count_by<T, F>(records: &[T], key: F, default: &str) -> Vec<(String, u64)>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for record in records {
        *counts
            .entry(key(record).unwrap_or(default).to_string())
            .or_default() += 1;
    }

    let mut series: Vec<(String, u64)> = counts.into_iter().collect();
    series.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    series
}

pub fn users_by_role(users: &[User]) -> Vec<(String, u64)> {
    count_by(users, |u| u.role.as_deref(), "unknown")
}

pub fn jobs_by_type(jobs: &[Job]) -> Vec<(String, u64)> {
    count_by(jobs, |j| j.job_type.as_deref(), "unknown")
}

pub fn applications_per_company(applications: &[Application]) -> Vec<(String, u64)> {
    count_by(
        applications,
        |a| a.job.as_ref().and_then(|j| j.company.as_deref()),
        "Unknown",
    )
}

/// Applications per calendar day, ascending; unparsable timestamps excluded
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

fn parse_day(timestamp: &str) -> Option<NaiveDate> {
    let day = timestamp.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::JobRef;

    #[test]
    fn test_count_by_sentinel_bucket() {
        let users = vec![
            User {
                role: Some("applicant".to_string()),
                ..Default::default()
            },
            User::default(),
        ];

        let series = users_by_role(&users);
        assert_eq!(
            series,
            vec![("applicant".to_string(), 1), ("unknown".to_string(), 1)]
        );
    }

    #[test]
    fn test_company_series() {
        let applications = vec![
            Application {
                job: Some(JobRef {
                    company: Some("Acme".to_string()),
                    ..Default::default()
                }),
                created_at: Some("2024-01-05T10:00:00".to_string()),
                ..Default::default()
            },
            Application {
                job: Some(JobRef::default()),
                created_at: Some("2024-01-05T11:00:00".to_string()),
                ..Default::default()
            },
        ];

        assert_eq!(
            applications_per_company(&applications),
            vec![("Acme".to_string(), 1), ("Unknown".to_string(), 1)]
        );
        assert_eq!(
            applications_per_day(&applications),
            vec![(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), 2)]
        );
    }

    #[test]
    fn test_timeline_skips_unparsable() {
        let applications = vec![
            Application {
                created_at: Some("garbage".to_string()),
                ..Default::default()
            },
            Application::default(),
        ];
        assert!(applications_per_day(&applications).is_empty());
    }
}
