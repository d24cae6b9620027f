use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::genre::Genre;

/// Movie - a catalogue entry, always materialized with its genre
///
/// The genre is embedded by value rather than kept as a foreign-key integer.
/// Movies are immutable; the only "change" is `with_id`, which produces the
/// persisted copy once the store has assigned an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned identifier (`movie.idmovie`), `None` until persisted
    id: Option<i64>,

    title: String,

    /// Calendar date only; any time-of-day in the store is discarded on read
    release_date: Option<NaiveDate>,

    genre: Genre,

    /// Running time in minutes
    duration: Option<i32>,

    director: String,

    summary: Option<String>,
}

impl Movie {
    /// Create a movie that has not been persisted yet
    ///
    /// `genre` must carry an id before the movie can be inserted, since only
    /// `genre.id` is written to the store.
    pub fn new(
        title: impl Into<String>,
        release_date: Option<NaiveDate>,
        genre: Genre,
        duration: Option<i32>,
        director: impl Into<String>,
        summary: Option<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            release_date,
            genre,
            duration,
            director: director.into(),
            summary,
        }
    }

    /// Return a copy of this movie carrying the given store identifier
    pub fn with_id(&self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
    }

    pub fn genre(&self) -> &Genre {
        &self.genre
    }

    pub fn duration(&self) -> Option<i32> {
        self.duration
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}
