//! moviedb Core - entities, error facility and logging facility
//!
//! This crate provides the pieces every other moviedb crate builds on:
//! - `Genre` and `Movie` value objects
//! - The structured error facility (`ExError`, `ExErrorKind`, `DecodeError`)
//! - The logging facility (`init`, `log_op_*` macros, test capture)

pub mod errors;
pub mod logging_facility;
pub mod model;

// Used by the logging macros so callers need not depend on it directly
pub use moviedb_core_types as core_types;

// Re-export commonly used types
pub use errors::{DecodeError, ExError, ExErrorKind, Result};
pub use model::{Genre, Movie};
