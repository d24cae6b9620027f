//! Row decoders
//!
//! One decoder per entity, reading columns by name. The movie decoder composes
//! the genre decoder, because the movie/genre join carries both entities in a
//! single row.

use chrono::{Local, NaiveDate, TimeZone};
use moviedb_core::errors::DecodeError;
use moviedb_core::{Genre, Movie};
use rusqlite::types::ValueRef;
use rusqlite::Row;

/// Build a Genre from the `idgenre` and `name` columns
pub fn genre_from_row(row: &Row<'_>) -> rusqlite::Result<Genre> {
    let id: i64 = row.get("idgenre")?;
    let name: String = row.get("name")?;
    Ok(Genre::with_id(id, name))
}

/// Build a Movie, with its Genre, from one row of the movie/genre join
pub fn movie_from_row(row: &Row<'_>) -> rusqlite::Result<Movie> {
    let genre = genre_from_row(row)?;

    let id: i64 = row.get("idmovie")?;
    let title: String = row.get("title")?;
    let release_date = date_column(row, "release_date")?;
    let duration: Option<i32> = row.get("duration")?;
    let director: String = row.get("director")?;
    let summary: Option<String> = row.get("summary")?;

    Ok(Movie::new(title, release_date, genre, duration, director, summary).with_id(id))
}

/// Read a nullable date column, discarding any time-of-day
fn date_column(row: &Row<'_>, column: &str) -> rusqlite::Result<Option<NaiveDate>> {
    let idx = row.as_ref().column_index(column)?;
    let value = row.get_ref(idx)?;
    decode_date(column, value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, value.data_type(), Box::new(e))
    })
}

/// Decode a stored date value
///
/// Accepts TEXT starting with `YYYY-MM-DD` (optionally followed by a time part
/// after a space or `T`) and INTEGER Unix epoch milliseconds. Integer values
/// are instants at local midnight, so the calendar day is taken in local time.
pub fn decode_date(column: &str, value: ValueRef<'_>) -> Result<Option<NaiveDate>, DecodeError> {
    let invalid = |shown: String| DecodeError::InvalidDate {
        column: column.to_string(),
        value: shown,
    };

    match value {
        ValueRef::Null => Ok(None),
        ValueRef::Text(bytes) => {
            let text = std::str::from_utf8(bytes)
                .map_err(|_| invalid(String::from_utf8_lossy(bytes).into_owned()))?;
            parse_date_text(text)
                .map(Some)
                .ok_or_else(|| invalid(text.to_string()))
        }
        ValueRef::Integer(millis) => epoch_millis_date(millis, &Local)
            .map(Some)
            .ok_or_else(|| invalid(millis.to_string())),
        other => Err(DecodeError::UnsupportedType {
            column: column.to_string(),
            found: other.data_type().to_string(),
        }),
    }
}

/// Calendar day of an epoch-millisecond instant as seen in `tz`
fn epoch_millis_date<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<NaiveDate> {
    tz.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.date_naive())
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let date_part = text.get(..10)?;
    let rest = text.get(10..)?;

    if !(rest.is_empty() || rest.starts_with(' ') || rest.starts_with('T')) {
        return None;
    }

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
