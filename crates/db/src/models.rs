//! Datenbankmodelle fuer Blogwerk
//!
//! Diese Typen repraesentieren Datensaetze aus der Datenbank.
//! Sie sind von den API-DTOs getrennt und dienen als reine
//! Datenuebertragungsobjekte zwischen Repository und Services.

use blogwerk_core::{PostId, TagId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Benutzer
// ---------------------------------------------------------------------------

/// Benutzer-Datensatz aus der Datenbank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenutzerRecord {
    pub id: UserId,
    pub email: String,
    pub name: String,
    /// Argon2id-PHC-String; leerer String fuer OAuth-Demo-Identitaeten
    pub password_hash: String,
    pub avatar: Option<String>,
    /// Herkunft der Identitaet, z.B. "email" oder "google"
    pub provider: String,
    pub created_at: DateTime<Utc>,
}

/// Daten zum Erstellen eines neuen Benutzers
#[derive(Debug, Clone)]
pub struct NeuerBenutzer<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password_hash: &'a str,
    pub avatar: Option<&'a str>,
    pub provider: &'a str,
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Tag-Datensatz aus der Datenbank
///
/// Namen sind exakt (case-sensitiv) eindeutig; es findet keine
/// Normalisierung statt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub id: TagId,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Beitraege
// ---------------------------------------------------------------------------

/// Beitrags-Datensatz inklusive Autor und Tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeitragRecord {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured: bool,
    /// Menschlich lesbares Lesezeit-Label, z.B. "5 dk"
    pub read_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: BenutzerRecord,
    pub tags: Vec<TagRecord>,
}

/// Daten zum Erstellen eines neuen Beitrags
#[derive(Debug, Clone)]
pub struct NeuerBeitrag<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub excerpt: Option<&'a str>,
    pub content: &'a str,
    pub featured: bool,
    pub read_time: &'a str,
    pub author_id: UserId,
}

/// Daten zum Aktualisieren eines Beitrags – nur gesetzte Felder aendern
#[derive(Debug, Clone, Default)]
pub struct BeitragUpdate {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured: Option<bool>,
    pub read_time: Option<String>,
}

/// Filter fuer Beitragslisten
#[derive(Debug, Clone, Default)]
pub struct BeitragFilter {
    /// Nur hervorgehobene (oder nur nicht hervorgehobene) Beitraege
    pub featured: Option<bool>,
    /// Nur Beitraege mit exakt diesem Tag-Namen
    pub tag: Option<String>,
}
