//! Gemeinsame Identifikationstypen fuer Blogwerk
//!
//! Alle IDs verwenden das Newtype-Pattern um Verwechslungen zwischen
//! verschiedenen ID-Arten zur Compilezeit auszuschliessen. Die Werte
//! stammen aus den AUTOINCREMENT-Spalten der Datenbank.

use serde::{Deserialize, Serialize};

/// Eindeutige Benutzer-ID
///
/// Die Display-Form ist die reine Zahl – sie wandert als `sub`-Claim
/// in ausgestellte Tokens und als Suffix in disambiguierte Slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl UserId {
    /// Gibt den inneren Zahlenwert zurueck
    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Eindeutige Beitrags-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub i64);

impl PostId {
    /// Gibt den inneren Zahlenwert zurueck
    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Eindeutige Tag-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagId(pub i64);

impl TagId {
    /// Gibt den inneren Zahlenwert zurueck
    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display_ist_reine_zahl() {
        let id = UserId(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn user_id_aus_string_parsen() {
        let id: UserId = "7".parse().expect("numerischer String muss parsen");
        assert_eq!(id, UserId(7));

        let fehler = "abc".parse::<UserId>();
        assert!(fehler.is_err(), "nicht-numerischer String darf nicht parsen");
    }

    #[test]
    fn ids_sind_serde_kompatibel() {
        let id = PostId(13);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "13", "IDs serialisieren als nackte Zahl");

        let zurueck: PostId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, zurueck);
    }

    #[test]
    fn tag_id_inner() {
        assert_eq!(TagId(5).inner(), 5);
    }
}
