//! Movie record store: the record shape consumed by the graph and the
//! encoder, plus the CSV loader that fills it.

pub mod loader;
pub mod movie;
pub mod store;

pub use loader::{load_movie_records, read_movie_records, TextEncoding};
pub use movie::{MovieId, MovieRecord};
pub use store::RecordStore;
