//! Core types shared across moviedb facilities
//!
//! Holds the canonical field keys and event names used by both the error
//! facility and the logging facility, so every crate emits the same schema.

pub mod schema;
