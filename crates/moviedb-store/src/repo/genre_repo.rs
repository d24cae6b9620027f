//! Genre repository
//!
//! List all genres, look one up by name, insert a new one. Each call opens its
//! own connection and drops it, with any statement, before returning.

use crate::db::DataSource;
use crate::errors::{from_rusqlite, Result};
use crate::repo::decode::genre_from_row;
use moviedb_core::{log_op_end, log_op_error, log_op_start, Genre};
use rusqlite::OptionalExtension;
use std::time::Instant;

const LIST_GENRES: &str = "SELECT * FROM genre";
const GET_GENRE: &str = "SELECT * FROM genre WHERE name = ?1";
const ADD_GENRE: &str = "INSERT INTO genre(name) VALUES(?1)";

/// SQLite repository for genres
#[derive(Debug, Clone)]
pub struct GenreRepo {
    source: DataSource,
}

impl GenreRepo {
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }

    /// List every genre in store iteration order
    pub fn list_genres(&self) -> Result<Vec<Genre>> {
        log_op_start!("list_genres");
        let start = Instant::now();

        let genres = self.list_genres_impl().map_err(|e| {
            log_op_error!(
                "list_genres",
                &e,
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "list_genres",
            duration_ms = start.elapsed().as_millis() as u64,
            row_count = genres.len() as u64
        );

        Ok(genres)
    }

    fn list_genres_impl(&self) -> Result<Vec<Genre>> {
        let conn = self.source.acquire()?;
        let mut stmt = conn.prepare(LIST_GENRES).map_err(from_rusqlite)?;

        let genres = stmt
            .query_map([], genre_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(genres)
    }

    /// Find a genre by its name
    ///
    /// Returns the first matching row, or `None` when no genre has that name.
    pub fn get_genre(&self, name: &str) -> Result<Option<Genre>> {
        log_op_start!("get_genre", genre_name = name);
        let start = Instant::now();

        let genre = self.get_genre_impl(name).map_err(|e| {
            log_op_error!(
                "get_genre",
                &e,
                duration_ms = start.elapsed().as_millis() as u64,
                genre_name = name
            );
            e
        })?;

        log_op_end!(
            "get_genre",
            duration_ms = start.elapsed().as_millis() as u64,
            found = genre.is_some()
        );

        Ok(genre)
    }

    fn get_genre_impl(&self, name: &str) -> Result<Option<Genre>> {
        let conn = self.source.acquire()?;
        let mut stmt = conn.prepare(GET_GENRE).map_err(from_rusqlite)?;

        let genre = stmt
            .query_row([name], genre_from_row)
            .optional()
            .map_err(from_rusqlite)?;

        Ok(genre)
    }

    /// Insert a genre
    ///
    /// The generated id is not returned; use `get_genre` to read it back.
    pub fn add_genre(&self, name: &str) -> Result<()> {
        log_op_start!("add_genre", genre_name = name);
        let start = Instant::now();

        self.add_genre_impl(name).map_err(|e| {
            log_op_error!(
                "add_genre",
                &e,
                duration_ms = start.elapsed().as_millis() as u64,
                genre_name = name
            );
            e
        })?;

        log_op_end!(
            "add_genre",
            duration_ms = start.elapsed().as_millis() as u64
        );

        Ok(())
    }

    fn add_genre_impl(&self, name: &str) -> Result<()> {
        let conn = self.source.acquire()?;
        conn.execute(ADD_GENRE, [name]).map_err(from_rusqlite)?;
        Ok(())
    }
}
