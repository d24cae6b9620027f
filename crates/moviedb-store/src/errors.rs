//! Error handling for moviedb-store
//!
//! Classifies `rusqlite::Error` into the moviedb error facility

use moviedb_core::errors::{DecodeError, ExError, ExErrorKind};
use rusqlite::ErrorCode;
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Classify a driver error as a connection, execution or mapping failure
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) => match e.code {
            ErrorCode::CannotOpen | ErrorCode::NotADatabase | ErrorCode::PermissionDenied => {
                ExErrorKind::Connection
            }
            _ => ExErrorKind::Execution,
        },
        rusqlite::Error::InvalidPath(_) => ExErrorKind::Connection,
        rusqlite::Error::FromSqlConversionFailure(_, _, source) => {
            // Our own decoders carry a DecodeError with the column name
            if let Some(decode) = source.downcast_ref::<DecodeError>() {
                return decode.clone().into();
            }
            ExErrorKind::Mapping
        }
        rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::InvalidColumnName(_)
        | rusqlite::Error::InvalidColumnIndex(_)
        | rusqlite::Error::IntegralValueOutOfRange(..)
        | rusqlite::Error::Utf8Error(_) => ExErrorKind::Mapping,
        _ => ExErrorKind::Execution,
    };

    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a connection error for a store that could not be opened or configured
pub fn connection_error(path: &Path, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Connection)
        .with_op("acquire")
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}

/// Create an error for a movie whose genre was never persisted
pub fn unsaved_genre(title: &str, genre_name: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("add_movie")
        .with_entity_id(title.to_string())
        .with_message(format!(
            "Genre '{}' has no id; only persisted genres can be referenced",
            genre_name
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::types::Type;

    #[test]
    fn test_cannot_open_is_connection() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CANTOPEN),
            None,
        );
        assert_eq!(from_rusqlite(err).kind(), ExErrorKind::Connection);
    }

    #[test]
    fn test_constraint_violation_is_execution() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT),
            Some("FOREIGN KEY constraint failed".to_string()),
        );
        let ex = from_rusqlite(err);
        assert_eq!(ex.kind(), ExErrorKind::Execution);
        assert!(ex.message().contains("FOREIGN KEY"));
    }

    #[test]
    fn test_column_type_is_mapping() {
        let err = rusqlite::Error::InvalidColumnType(1, "title".to_string(), Type::Null);
        assert_eq!(from_rusqlite(err).kind(), ExErrorKind::Mapping);
    }

    #[test]
    fn test_decode_error_keeps_column() {
        let err = rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            Box::new(DecodeError::InvalidDate {
                column: "release_date".to_string(),
                value: "soon".to_string(),
            }),
        );
        let ex = from_rusqlite(err);
        assert_eq!(ex.kind(), ExErrorKind::Mapping);
        assert_eq!(ex.entity_id(), Some("release_date"));
    }

    #[test]
    fn test_no_rows_is_execution() {
        assert_eq!(
            from_rusqlite(rusqlite::Error::QueryReturnedNoRows).kind(),
            ExErrorKind::Execution
        );
    }
}
