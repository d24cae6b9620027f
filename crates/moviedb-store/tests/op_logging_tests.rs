// Repository operations report their fields under the canonical schema keys

mod common;

use chrono::NaiveDate;
use moviedb_core::core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_GENRE_NAME,
    FIELD_MOVIE_ID, FIELD_ROW_COUNT,
};
use moviedb_core::logging_facility::test_capture::{init_test_capture, CapturedEvent, TestCapture};
use moviedb_core::{Genre, Movie};
use moviedb_store::{GenreRepo, MovieRepo};

fn events_of(capture: &TestCapture, op: &str, event: &str) -> Vec<CapturedEvent> {
    capture
        .events_for(op)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(event))
        .collect()
}

#[test]
fn test_get_genre_logs_genre_name() {
    let capture = init_test_capture();
    let store = common::setup_catalog();
    let repo = GenreRepo::new(store.source());

    repo.get_genre("Film Noir").unwrap();

    let starts = events_of(&capture, "get_genre", EVENT_START);
    assert!(starts
        .iter()
        .any(|e| e.field(FIELD_GENRE_NAME) == Some("Film Noir")));
}

#[test]
fn test_list_movies_by_genre_logs_name_and_row_count() {
    let capture = init_test_capture();
    let store = common::setup_catalog();
    store.execute(
        "INSERT INTO genre(idgenre, name) VALUES (5, 'Western');
         INSERT INTO movie(idmovie, title, release_date, genre_id, duration, director, summary)
         VALUES (20, 'West 1', '1966-12-23', 5, 178, 'director w', NULL),
                (21, 'West 2', '1968-12-21', 5, 165, 'director w', NULL),
                (22, 'West 3', '1969-06-18', 5, 145, 'director w', NULL),
                (23, 'West 4', '1992-08-07', 5, 131, 'director w', NULL)",
    );
    let repo = MovieRepo::new(store.source());

    assert_eq!(repo.list_movies_by_genre("Western").unwrap().len(), 4);

    let starts = events_of(&capture, "list_movies_by_genre", EVENT_START);
    assert!(starts
        .iter()
        .any(|e| e.field(FIELD_GENRE_NAME) == Some("Western")));
    let ends = events_of(&capture, "list_movies_by_genre", EVENT_END);
    assert!(ends.iter().any(|e| e.field(FIELD_ROW_COUNT) == Some("4")));
}

#[test]
fn test_add_movie_logs_generated_id() {
    let capture = init_test_capture();
    let store = common::setup_catalog();
    let repo = MovieRepo::new(store.source());
    let movie = Movie::new(
        "Logged Entry",
        NaiveDate::from_ymd_opt(2012, 3, 4),
        Genre::with_id(1, "Drama"),
        Some(99),
        "director l",
        None,
    );

    let added = repo.add_movie(&movie).unwrap().unwrap();

    let expected = format!("{:?}", added.id());
    let ends = events_of(&capture, "add_movie", EVENT_END);
    assert!(ends
        .iter()
        .any(|e| e.field(FIELD_MOVIE_ID) == Some(expected.as_str())));
}

#[test]
fn test_failed_list_genres_logs_error_kind_and_code() {
    let capture = init_test_capture();
    let store = common::setup_without_tables();
    let repo = GenreRepo::new(store.source());

    repo.list_genres().unwrap_err();

    let errors = events_of(&capture, "list_genres", EVENT_END_ERROR);
    assert!(errors.iter().any(|e| {
        e.field(FIELD_ERR_KIND) == Some("Execution")
            && e.field(FIELD_ERR_CODE) == Some("ERR_EXECUTION")
    }));
}
