//! SQLite backend for the casebook store.
//!
//! A single synchronous [`rusqlite::Connection`] owns the database file for
//! the life of the process. Every mutating call commits on its own.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
