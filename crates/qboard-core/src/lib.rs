//! qboard-core - Core library for qboard
//!
//! Provides the scheduler API client, data models, and view state.

pub mod client;
pub mod error;
pub mod models;
pub mod state;

pub use client::QueueClient;
pub use error::ClientError;
pub use models::{QueueEnvelope, Task, TaskEnvelope, TaskKwargs, NOT_SCHEDULED};
pub use state::QueueView;
