//! Repository layer mapping `genre` and `movie` rows to entities

pub mod decode;
pub mod genre_repo;
pub mod movie_repo;

pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
