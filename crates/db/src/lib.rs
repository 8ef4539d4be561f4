//! blogwerk-db – Datenbank-Abstraktion
//!
//! Dieses Crate stellt das Repository-Pattern bereit, das die SQLite-Ablage
//! hinter einheitlichen Traits verbirgt. Die Geschaeftslogik (Auth, Beitraege)
//! kennt nur die Traits; die konkrete Implementierung liegt unter `sqlite/`.

pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use error::{DbError, DbResult};
pub use repository::{PostRepository, TagRepository, UserRepository};
pub use sqlite::pool::DatabaseConfig;
pub use sqlite::SqliteDb;
