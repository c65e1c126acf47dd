//! Benchmarks for the Jobsight aggregation layer
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jobsight::portal::{Application, JobRef, User};

fn create_users(count: usize) -> Vec<User> {
    let roles = ["applicant", "recruiter", "admin"];
    (0..count)
        .map(|i| User {
            role: (i % 7 != 0).then(|| roles[i % roles.len()].to_string()),
            ..Default::default()
        })
        .collect()
}

fn create_applications(count: usize) -> Vec<Application> {
    (0..count)
        .map(|i| Application {
            job: Some(JobRef {
                title: None,
                company: (i % 5 != 0).then(|| format!("Company {}", i % 40)),
            }),
            created_at: Some(format!("2024-{:02}-{:02}T10:00:00", 1 + i % 12, 1 + i % 28)),
            ..Default::default()
        })
        .collect()
}

fn bench_count_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_by");

    for size in [100, 1000, 10000] {
        let users = create_users(size);
        let applications = create_applications(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("roles_{}", size), |b| {
            b.iter(|| jobsight::analytics::users_by_role(black_box(&users)))
        });

        group.bench_function(format!("companies_{}", size), |b| {
            b.iter(|| jobsight::analytics::applications_per_company(black_box(&applications)))
        });
    }

    group.finish();
}

fn bench_per_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("per_day");

    for size in [1000, 10000] {
        let applications = create_applications(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("timeline_{}", size), |b| {
            b.iter(|| jobsight::analytics::applications_per_day(black_box(&applications)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_count_by, bench_per_day);
criterion_main!(benches);
