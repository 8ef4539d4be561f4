//! SQLite-Backend-Implementierungen fuer alle Repository-Traits

pub mod pool;
pub mod posts;
pub mod tags;
pub mod users;

pub use pool::SqliteDb;
