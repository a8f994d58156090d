//! Performance benchmarks for the appraisal orchestration engine.
//!
//! This benchmark suite verifies that bulk generation meets performance targets:
//! - Generation over the demo directory: < 1ms mean
//! - Idempotent re-generation over an already-populated period: < 1ms mean
//! - Generation over 1000 synthetic employees: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use appraisal_engine::api::{AppState, create_router};
use appraisal_engine::directory::{Employee, OrgDirectory, OrgUnit};
use appraisal_engine::engine::generate_evaluations;
use appraisal_engine::store::EvaluationStore;

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;
use uuid::Uuid;

fn create_test_state() -> AppState {
    let directory = OrgDirectory::load("./config/org_demo").expect("Failed to load directory");
    AppState::new(directory)
}

/// Builds a synthetic directory: teams of 10 employees, each team with a
/// manager, all teams under a single division.
fn synthetic_directory(employee_count: usize) -> OrgDirectory {
    let team_count = employee_count.div_ceil(10);

    let mut units = vec![OrgUnit {
        code: "div_root".to_string(),
        name: "Root Division".to_string(),
        parent: None,
        manager_id: Some("mgr_root".to_string()),
    }];
    let mut employees = vec![Employee {
        id: "mgr_root".to_string(),
        name: "Root Manager".to_string(),
        is_active: true,
        unit_code: "div_root".to_string(),
    }];

    for team in 0..team_count {
        let code = format!("team_{:04}", team);
        units.push(OrgUnit {
            code: code.clone(),
            name: format!("Team {}", team),
            parent: Some("div_root".to_string()),
            manager_id: Some(format!("mgr_{:04}", team)),
        });
        employees.push(Employee {
            id: format!("mgr_{:04}", team),
            name: format!("Manager {}", team),
            is_active: true,
            unit_code: code.clone(),
        });
    }

    for i in 0..employee_count {
        employees.push(Employee {
            id: format!("emp_{:05}", i),
            name: format!("Employee {}", i),
            is_active: true,
            unit_code: format!("team_{:04}", i / 10),
        });
    }

    OrgDirectory::new(units, employees).expect("Failed to build synthetic directory")
}

fn create_period(store: &EvaluationStore) -> Uuid {
    store
        .create_period(
            2025,
            1,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        )
        .expect("Failed to create period")
        .id
}

/// Benchmark: full generation over the demo directory via the HTTP router.
///
/// Target: < 1ms mean
fn bench_generate_demo_directory(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("generate_demo_directory", |b| {
        b.to_async(&rt).iter_batched(
            || {
                let state = create_test_state();
                let period_id = create_period(state.store());
                (create_router(state), period_id)
            },
            |(router, period_id)| async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri(format!("/periods/{}/generate", period_id))
                            .header("Content-Type", "application/json")
                            .body(Body::from("{}"))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            },
            BatchSize::SmallInput,
        )
    });
}

/// Benchmark: re-running generation over an already-populated period.
///
/// Every employee is skipped; this measures the duplicate-detection path.
///
/// Target: < 1ms mean
fn bench_idempotent_regeneration(c: &mut Criterion) {
    let directory = synthetic_directory(100);
    let store = EvaluationStore::new();
    let period_id = create_period(&store);
    generate_evaluations(&directory, &store, period_id, None).expect("Initial generation failed");

    c.bench_function("idempotent_regeneration_100", |b| {
        b.iter(|| {
            let summary = generate_evaluations(&directory, &store, period_id, None).unwrap();
            black_box(summary)
        })
    });
}

/// Benchmark: generation over synthetic directories of increasing size.
///
/// Target: < 50ms mean at 1000 employees
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_scaling");

    for employee_count in [10, 100, 1000].iter() {
        let directory = synthetic_directory(*employee_count);

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| {
                b.iter_batched(
                    || {
                        let store = EvaluationStore::new();
                        let period_id = create_period(&store);
                        (store, period_id)
                    },
                    |(store, period_id)| {
                        let summary =
                            generate_evaluations(&directory, &store, period_id, None).unwrap();
                        black_box(summary)
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_demo_directory,
    bench_idempotent_regeneration,
    bench_scaling,
);
criterion_main!(benches);
