//! Fehlertypen fuer das Content-Crate

use thiserror::Error;

use blogwerk_db::DbError;

/// Alle moeglichen Fehler der Beitrags-Logik
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Nicht gefunden: {0}")]
    NichtGefunden(String),

    #[error("Zugriff verweigert: {0}")]
    ZugriffVerweigert(String),

    #[error("Konflikt: {0}")]
    Konflikt(String),

    #[error("Datenbankfehler: {0}")]
    Datenbank(DbError),
}

/// Result-Alias fuer das Content-Crate
pub type ContentResult<T> = Result<T, ContentError>;

impl From<DbError> for ContentError {
    /// Eindeutigkeitsverletzungen aus der Ablage sind fachliche Konflikte
    /// (z.B. kollidierender Slug), alles andere bleibt ein Datenbankfehler.
    fn from(e: DbError) -> Self {
        if e.ist_eindeutigkeit() {
            Self::Konflikt(e.to_string())
        } else {
            Self::Datenbank(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eindeutigkeit_wird_zu_konflikt() {
        let e: ContentError = DbError::Eindeutigkeit("Slug 'x' bereits vergeben".into()).into();
        assert!(matches!(e, ContentError::Konflikt(_)));
    }

    #[test]
    fn andere_db_fehler_bleiben_datenbankfehler() {
        let e: ContentError = DbError::intern("Pool erschoepft").into();
        assert!(matches!(e, ContentError::Datenbank(_)));
    }
}
