//! Movie repository
//!
//! Movies are always read through the movie/genre join, so every Movie comes
//! back with its Genre built from the same row. Inserts return the generated
//! key from the INSERT statement itself (`RETURNING`), never from a follow-up
//! query, so concurrent inserts cannot see each other's ids.

use crate::db::DataSource;
use crate::errors::{from_rusqlite, unsaved_genre, Result};
use crate::repo::decode::movie_from_row;
use moviedb_core::{log_op_end, log_op_error, log_op_start, Movie};
use rusqlite::{OptionalExtension, Params};
use std::time::Instant;

const LIST_MOVIES: &str = "SELECT * FROM movie JOIN genre ON movie.genre_id = genre.idgenre";
const LIST_MOVIES_BY_GENRE: &str =
    "SELECT * FROM movie JOIN genre ON movie.genre_id = genre.idgenre WHERE genre.name = ?1";
const ADD_MOVIE: &str = "INSERT INTO movie(title, release_date, genre_id, duration, director, summary)
     VALUES(?1, ?2, ?3, ?4, ?5, ?6)
     RETURNING idmovie";

/// SQLite repository for movies
#[derive(Debug, Clone)]
pub struct MovieRepo {
    source: DataSource,
}

impl MovieRepo {
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }

    /// List every movie with its genre
    pub fn list_movies(&self) -> Result<Vec<Movie>> {
        log_op_start!("list_movies");
        let start = Instant::now();

        let movies = self.query_movies(LIST_MOVIES, []).map_err(|e| {
            log_op_error!(
                "list_movies",
                &e,
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "list_movies",
            duration_ms = start.elapsed().as_millis() as u64,
            row_count = movies.len() as u64
        );

        Ok(movies)
    }

    /// List the movies whose genre has the given name
    ///
    /// An unknown genre name yields an empty list, not an error.
    pub fn list_movies_by_genre(&self, genre_name: &str) -> Result<Vec<Movie>> {
        log_op_start!("list_movies_by_genre", genre_name = genre_name);
        let start = Instant::now();

        let movies = self
            .query_movies(LIST_MOVIES_BY_GENRE, [genre_name])
            .map_err(|e| {
                log_op_error!(
                    "list_movies_by_genre",
                    &e,
                    duration_ms = start.elapsed().as_millis() as u64,
                    genre_name = genre_name
                );
                e
            })?;

        log_op_end!(
            "list_movies_by_genre",
            duration_ms = start.elapsed().as_millis() as u64,
            row_count = movies.len() as u64
        );

        Ok(movies)
    }

    fn query_movies<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Movie>> {
        let conn = self.source.acquire()?;
        let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;

        let movies = stmt
            .query_map(params, movie_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(movies)
    }

    /// Insert a movie and return it with the generated id
    ///
    /// Only `genre.id` is written (as `genre_id`); the genre must already be
    /// persisted. Returns `None` if the store reports no generated key.
    pub fn add_movie(&self, movie: &Movie) -> Result<Option<Movie>> {
        log_op_start!("add_movie", title = movie.title());
        let start = Instant::now();

        let saved = self.add_movie_impl(movie).map_err(|e| {
            log_op_error!(
                "add_movie",
                &e,
                duration_ms = start.elapsed().as_millis() as u64,
                title = movie.title()
            );
            e
        })?;

        log_op_end!(
            "add_movie",
            duration_ms = start.elapsed().as_millis() as u64,
            movie_id = ?saved.as_ref().and_then(Movie::id)
        );

        Ok(saved)
    }

    fn add_movie_impl(&self, movie: &Movie) -> Result<Option<Movie>> {
        let genre_id = movie
            .genre()
            .id()
            .ok_or_else(|| unsaved_genre(movie.title(), movie.genre().name()))?;

        let conn = self.source.acquire()?;
        let generated: Option<i64> = conn
            .query_row(
                ADD_MOVIE,
                rusqlite::params![
                    movie.title(),
                    movie.release_date(),
                    genre_id,
                    movie.duration(),
                    movie.director(),
                    movie.summary(),
                ],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;

        Ok(generated.map(|id| movie.with_id(id)))
    }
}
