//! REST-Handler und gemeinsame Antwort-DTOs
//!
//! Die JSON-Feldnamen sind Teil des Client-Vertrags und bleiben englisch.

use serde::Serialize;

use blogwerk_core::UserId;
use blogwerk_db::models::BenutzerRecord;

pub mod auth;
pub mod health;
pub mod posts;

/// Benutzer-Antwort ohne sensible Felder (kein Passwort-Hash)
#[derive(Debug, Serialize)]
pub struct BenutzerAntwort {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub provider: String,
}

impl From<BenutzerRecord> for BenutzerAntwort {
    fn from(benutzer: BenutzerRecord) -> Self {
        Self {
            id: benutzer.id,
            name: benutzer.name,
            email: benutzer.email,
            avatar: benutzer.avatar,
            provider: benutzer.provider,
        }
    }
}
