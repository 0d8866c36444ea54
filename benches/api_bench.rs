//! Criterion benchmarks for hot paths in the task service.
//!
//! Run with:
//!   cargo bench
//!
//! Covers:
//!   - Request body parsing and envelope serialization (serde_json)
//!   - Task store lookups and id assignment (linear scans)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taskd::rest::routes::v2::{CreateTaskRequest, UpdateTaskRequest};
use taskd::tasks::{Task, TaskPatch, TaskStore};

// ─── Wire serde ──────────────────────────────────────────────────────────────

static CREATE_BODY: &str = r#"{
    "task_title": "Implement the new feature",
    "task_desc": "Add tests for edge cases and wire up the endpoint.",
    "is_finished": false
}"#;

static UPDATE_BODY: &str = r#"{"task_title": "Renamed", "is_finished": true}"#;

fn bench_wire_serde(c: &mut Criterion) {
    c.bench_function("parse_create_body", |b| {
        b.iter(|| {
            let req: CreateTaskRequest = serde_json::from_str(black_box(CREATE_BODY)).unwrap();
            black_box(req);
        });
    });

    c.bench_function("parse_update_body", |b| {
        b.iter(|| {
            let req: UpdateTaskRequest = serde_json::from_str(black_box(UPDATE_BODY)).unwrap();
            black_box(req);
        });
    });

    c.bench_function("serialize_task_envelope", |b| {
        let task = Task {
            id: 7,
            title: "Implement the new feature".to_string(),
            description: "Add tests for edge cases.".to_string(),
            done: false,
        };
        b.iter(|| {
            let v = serde_json::json!({ "status": "ok", "data": black_box(&task) });
            let s = serde_json::to_string(&v).unwrap();
            black_box(s);
        });
    });

    c.bench_function("serialize_list_envelope_100", |b| {
        let tasks: Vec<Task> = (1..=100)
            .map(|i| Task {
                id: i,
                title: format!("Task {i}"),
                description: "Routine work item".to_string(),
                done: i % 2 == 0,
            })
            .collect();
        b.iter(|| {
            let v = serde_json::json!({ "status": "ok", "data": black_box(&tasks) });
            let s = serde_json::to_string(&v).unwrap();
            black_box(s);
        });
    });
}

// ─── Store scans ─────────────────────────────────────────────────────────────

fn seeded_store(n: u64) -> TaskStore {
    let mut store = TaskStore::new();
    for i in 1..=n {
        store.create(format!("Task {i}"), "Routine work item".to_string(), false);
    }
    store
}

fn bench_store(c: &mut Criterion) {
    c.bench_function("store_find_last_of_100", |b| {
        let store = seeded_store(100);
        b.iter(|| {
            black_box(store.find(black_box(100)));
        });
    });

    c.bench_function("store_list_100", |b| {
        let store = seeded_store(100);
        b.iter(|| {
            black_box(store.list());
        });
    });

    c.bench_function("store_create_after_100", |b| {
        b.iter_with_setup(
            || seeded_store(100),
            |mut store| {
                black_box(store.create("New".to_string(), "d".to_string(), false));
            },
        );
    });

    c.bench_function("store_update_middle_of_100", |b| {
        b.iter_with_setup(
            || seeded_store(100),
            |mut store| {
                let patch = TaskPatch {
                    title: Some("Renamed".to_string()),
                    description: None,
                    done: Some(true),
                };
                black_box(store.update(black_box(50), patch));
            },
        );
    });
}

// ─── Entry point ─────────────────────────────────────────────────────────────

criterion_group!(benches, bench_wire_serde, bench_store);
criterion_main!(benches);
