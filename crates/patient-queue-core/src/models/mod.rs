//! Domain models for the patient queue.

mod admission;
mod patient;
mod search;

pub use admission::*;
pub use patient::*;
pub use search::*;
