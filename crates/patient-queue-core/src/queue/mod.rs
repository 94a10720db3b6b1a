//! Two-tier patient queue.
//!
//! Normal patients (priority below the emergency threshold) are served in
//! arrival order. Emergency patients are kept sorted by descending priority,
//! earlier arrivals first among equals, and are always treated before any
//! normal patient.

mod config;
mod service;
mod session;

pub use config::*;
pub use service::*;
pub use session::*;

use thiserror::Error;

/// Queue errors. All are recoverable and leave queue state untouched.
#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Invalid {field}: {value:?} is not an integer")]
    InputError { field: String, value: String },

    #[error("No patients in queue")]
    EmptyQueues,

    #[error("Patient not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Priority {priority} outside allowed range {min}..={max}")]
    PriorityOutOfRange { priority: i64, min: i64, max: i64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown session: {0}")]
    UnknownSession(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type QueueResult<T> = Result<T, QueueError>;
