//! moviedb Store - SQLite persistence for movies and genres
//!
//! Provides:
//! - A connection provider (`db::DataSource`) handing out one connection per call
//! - `GenreRepo` and `MovieRepo`, one explicit query per use case
//! - Row decoders shared by both repositories (`repo::decode`)
//! - Best-effort wrappers keeping the legacy swallow-and-log contract (`compat`)
//!
//! The `genre` and `movie` tables are a precondition; nothing here creates them.

pub mod compat;
pub mod db;
pub mod errors;
pub mod repo;

// Re-export key types
pub use compat::{BestEffortGenreRepo, BestEffortMovieRepo};
pub use db::DataSource;
pub use errors::Result;
pub use repo::{GenreRepo, MovieRepo};
