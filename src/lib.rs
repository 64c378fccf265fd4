//! Bookshelf API: REST CRUD service over a single-table book catalog.

pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use error::AppError;
pub use model::{Book, BookModel, BookPatch, NewBook};
pub use routes::{book_routes, common_routes};
pub use state::AppState;
pub use store::{connect, ensure_books_table, seed_if_empty};
