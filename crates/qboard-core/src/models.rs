//! Data models for the scheduler API
//!
//! Everything here is externally sourced and read-only: the scheduler owns
//! these records, qboard only displays them.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a task has no next run time (paused/unscheduled).
pub const NOT_SCHEDULED: &str = "not scheduled";

/// Keyword arguments attached to a task.
///
/// The wire key for `suffix` is literally `sufix` - the server contract is
/// misspelled and must be preserved exactly to interoperate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskKwargs {
    pub prefix: String,
    #[serde(rename = "sufix")]
    pub suffix: String,
}

/// One scheduled task as reported by the queue endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, used as the stable display key.
    pub task_id: String,
    /// Source definition the task was loaded from.
    pub task_file: String,
    /// Next scheduled run; `None` means paused or not scheduled.
    pub next_run_time: Option<String>,
    /// Free-form scheduling rule (e.g. a cron expression), opaque to qboard.
    pub trigger: String,
    /// Positional arguments passed to the task.
    pub args: Vec<String>,
    /// Keyword arguments passed to the task.
    pub kwargs: TaskKwargs,
}

impl Task {
    /// Display text for the next-run cell: the exact server string, or the
    /// fixed placeholder when absent. Never blank.
    pub fn next_run_display(&self) -> &str {
        self.next_run_time.as_deref().unwrap_or(NOT_SCHEDULED)
    }
}

/// Envelope returned by `GET /queue/`.
///
/// `status` and `message` are part of the contract but unused by the views;
/// only `tasks` drives rendering, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEnvelope {
    pub status: String,
    pub message: String,
    pub tasks: Vec<Task>,
}

/// Envelope returned by `GET /queue/{task_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEnvelope {
    pub status: String,
    pub message: String,
    pub task: Task,
}
