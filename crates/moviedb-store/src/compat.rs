//! Best-effort repositories
//!
//! These wrappers keep the legacy data-access contract: every failure is
//! logged and then degraded to an empty list, `None`, or nothing at all.
//! Callers cannot tell "no data" from "the store failed". Prefer `GenreRepo`
//! and `MovieRepo`, which return the typed error.

use crate::db::DataSource;
use crate::errors::Result;
use crate::repo::{GenreRepo, MovieRepo};
use moviedb_core::core_types::schema::EVENT_SWALLOWED;
use moviedb_core::{Genre, Movie};

/// Log a failure and replace it with a fallback value
fn swallow<T>(op: &'static str, result: Result<T>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(
                component = module_path!(),
                op = op,
                event = EVENT_SWALLOWED,
                err.code = err.code(),
                err.message = err.message(),
            );
            fallback
        }
    }
}

/// Genre repository with swallow-and-log failure handling
#[derive(Debug, Clone)]
pub struct BestEffortGenreRepo {
    inner: GenreRepo,
}

impl BestEffortGenreRepo {
    pub fn new(source: DataSource) -> Self {
        Self {
            inner: GenreRepo::new(source),
        }
    }

    /// All genres, or an empty list if the store failed
    pub fn list_genres(&self) -> Vec<Genre> {
        swallow("list_genres", self.inner.list_genres(), Vec::new())
    }

    /// The named genre, or `None` if absent or if the store failed
    pub fn get_genre(&self, name: &str) -> Option<Genre> {
        swallow("get_genre", self.inner.get_genre(name), None)
    }

    /// Insert a genre; a failure is only visible in the logs
    pub fn add_genre(&self, name: &str) {
        swallow("add_genre", self.inner.add_genre(name), ());
    }
}

/// Movie repository with swallow-and-log failure handling
#[derive(Debug, Clone)]
pub struct BestEffortMovieRepo {
    inner: MovieRepo,
}

impl BestEffortMovieRepo {
    pub fn new(source: DataSource) -> Self {
        Self {
            inner: MovieRepo::new(source),
        }
    }

    pub fn list_movies(&self) -> Vec<Movie> {
        swallow("list_movies", self.inner.list_movies(), Vec::new())
    }

    pub fn list_movies_by_genre(&self, genre_name: &str) -> Vec<Movie> {
        swallow(
            "list_movies_by_genre",
            self.inner.list_movies_by_genre(genre_name),
            Vec::new(),
        )
    }

    /// The inserted movie with its id, or `None` if the insert failed
    pub fn add_movie(&self, movie: &Movie) -> Option<Movie> {
        swallow("add_movie", self.inner.add_movie(movie), None)
    }
}
