// SPDX-License-Identifier: MIT
//! In-memory task store.
//!
//! Owns every task record for the lifetime of the process. Handlers share
//! one instance behind [`SharedTaskStore`] and take the lock once per
//! request, so each scan-then-mutate sequence runs as a single critical
//! section.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::tasks::model::{Task, TaskPatch};

const FIXTURE_TITLE: &str = "Laboratory Activity";
const FIXTURE_DESC: &str = "Create Lab Act 2";

/// Insertion-ordered collection of task records.
///
/// Lookups are linear scans; the store stays at interactive sizes and
/// keeps no secondary index.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the single startup fixture task (id 1).
    pub fn with_fixture() -> Self {
        let mut store = Self::new();
        store.tasks.push(Task {
            id: 1,
            title: FIXTURE_TITLE.to_string(),
            description: FIXTURE_DESC.to_string(),
            done: false,
        });
        store
    }

    /// First task with a matching id, if any.
    pub fn find(&self, id: u64) -> Option<Task> {
        self.tasks.iter().find(|t| t.id == id).cloned()
    }

    /// Every task, in insertion order.
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task and return it.
    ///
    /// Ids are assigned as `1 + max(existing ids)`, so deleting the task
    /// holding the maximum id re-issues that id on the next create.
    pub fn create(&mut self, title: String, description: String, done: bool) -> Task {
        let task = Task {
            id: self.next_id(),
            title,
            description,
            done,
        };
        self.tasks.push(task.clone());
        info!(id = task.id, "task created");
        task
    }

    /// Overwrite the fields of task `id` that are present in `patch`.
    ///
    /// Returns the updated record, or `None` when the id is unknown. An
    /// all-`None` patch is a legal no-op that still returns the record.
    pub fn update(&mut self, id: u64, patch: TaskPatch) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(done) = patch.done {
            task.done = done;
        }
        info!(id, "task updated");
        Some(task.clone())
    }

    /// Remove the task with `id`. Returns `false` when no such task exists.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.tasks.remove(idx);
                info!(id, "task deleted");
                true
            }
            None => {
                debug!(id, "delete for unknown task id");
                false
            }
        }
    }

    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }
}

// ─── Shared handle ───────────────────────────────────────────────────────────

/// Thread-safe shared handle to the task store.
pub type SharedTaskStore = Arc<RwLock<TaskStore>>;

/// Construct the shared, fixture-seeded store the server hands to handlers.
pub fn new_shared_store() -> SharedTaskStore {
    Arc::new(RwLock::new(TaskStore::with_fixture()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch_title(title: &str) -> TaskPatch {
        TaskPatch {
            title: Some(title.to_string()),
            ..TaskPatch::default()
        }
    }

    #[test]
    fn test_fixture_store_contains_seed_task() {
        let store = TaskStore::with_fixture();
        assert_eq!(store.len(), 1);
        let task = store.find(1).unwrap();
        assert_eq!(task.title, "Laboratory Activity");
        assert_eq!(task.description, "Create Lab Act 2");
        assert!(!task.done);
    }

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let mut store = TaskStore::new();
        let task = store.create("a".into(), "b".into(), false);
        assert_eq!(task.id, 1);
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut store = TaskStore::with_fixture();
        let t2 = store.create("second".into(), "d".into(), false);
        let t3 = store.create("third".into(), "d".into(), true);
        assert_eq!(t2.id, 2);
        assert_eq!(t3.id, 3);
        assert!(t3.done);
    }

    #[test]
    fn test_deleting_max_id_reissues_that_id() {
        let mut store = TaskStore::with_fixture();
        let t2 = store.create("second".into(), "d".into(), false);
        assert_eq!(t2.id, 2);
        assert!(store.delete(2));
        let again = store.create("third".into(), "d".into(), false);
        assert_eq!(again.id, 2);
    }

    #[test]
    fn test_update_overwrites_only_present_fields() {
        let mut store = TaskStore::with_fixture();
        let updated = store
            .update(
                1,
                TaskPatch {
                    title: Some("Renamed".into()),
                    description: None,
                    done: Some(true),
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "Create Lab Act 2");
        assert!(updated.done);
    }

    #[test]
    fn test_update_with_empty_patch_is_noop() {
        let mut store = TaskStore::with_fixture();
        let before = store.find(1).unwrap();
        let after = store.update(1, TaskPatch::default()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let mut store = TaskStore::with_fixture();
        assert!(store.update(99, patch_title("x")).is_none());
    }

    #[test]
    fn test_delete_unknown_id_returns_false() {
        let mut store = TaskStore::with_fixture();
        assert!(!store.delete(42));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = TaskStore::with_fixture();
        store.create("second".into(), "d".into(), false);
        store.create("third".into(), "d".into(), false);
        let ids: Vec<u64> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;
        fn make_writer(&'a self) -> CaptureWriter {
            self.clone()
        }
    }

    #[test]
    fn test_every_mutation_logs_at_info() {
        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut store = TaskStore::with_fixture();
            store.create("second".into(), "d".into(), false);
            let _ = store.update(1, patch_title("Renamed"));
            store.delete(1);
        });

        let output = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("task created"));
        assert!(output.contains("task updated"));
        assert!(output.contains("task deleted"));
    }
}
