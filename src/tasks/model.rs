// SPDX-License-Identifier: MIT
//! Task record types shared by the store and the REST surface.

use serde::{Deserialize, Serialize};

/// A tracked task.
///
/// The serialized names (`task_id`, `task_title`, `task_desc`,
/// `is_finished`) are the wire contract; every request and response body
/// uses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task_id")]
    pub id: u64,
    #[serde(rename = "task_title")]
    pub title: String,
    #[serde(rename = "task_desc")]
    pub description: String,
    #[serde(rename = "is_finished")]
    pub done: bool,
}

/// Partial update for a task.
///
/// `None` leaves the field untouched. There is no explicit-clear semantic:
/// a supplied title/description always replaces the old value with a
/// non-empty one (the REST layer validates before building the patch).
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}
