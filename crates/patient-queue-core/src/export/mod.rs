//! Read-only export of queue contents.

mod snapshot;

pub use snapshot::*;
