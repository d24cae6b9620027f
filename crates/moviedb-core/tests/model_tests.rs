use chrono::NaiveDate;
use moviedb_core::errors::{DecodeError, ExError, ExErrorKind};
use moviedb_core::{Genre, Movie};

#[test]
fn test_movie_serializes_date_without_time() {
    let movie = Movie::new(
        "Title 1",
        NaiveDate::from_ymd_opt(2015, 11, 26),
        Genre::with_id(1, "Drama"),
        Some(120),
        "director 1",
        Some("summary of the first movie".to_string()),
    )
    .with_id(1);

    let json = serde_json::to_value(&movie).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["release_date"], "2015-11-26");
    assert_eq!(json["genre"]["name"], "Drama");

    let back: Movie = serde_json::from_value(json).unwrap();
    assert_eq!(back, movie);
}

#[test]
fn test_decode_error_maps_to_mapping_kind() {
    let err: ExError = DecodeError::UnsupportedType {
        column: "duration".to_string(),
        found: "Blob".to_string(),
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::Mapping);
    assert_eq!(err.code(), "ERR_MAPPING");
    assert_eq!(err.entity_id(), Some("duration"));
    assert!(err.message().contains("unsupported storage type Blob"));
}
