pub mod genre;
pub mod movie;

pub use genre::Genre;
pub use movie::Movie;
