//! Repository-Trait-Definitionen
//!
//! Das Repository-Pattern entkoppelt die Geschaeftslogik von der konkreten
//! Datenbank-Implementierung. Alle Lookups laufen ueber eindeutige Schluessel
//! (E-Mail, Slug, Tag-Name, ID); schreibende Mehrzeilen-Operationen sind
//! transaktional.

use blogwerk_core::{PostId, UserId};

use crate::error::DbResult;
use crate::models::{
    BeitragFilter, BeitragRecord, BeitragUpdate, BenutzerRecord, NeuerBenutzer, NeuerBeitrag,
    TagRecord,
};

/// Repository fuer Benutzer-Datenzugriffe
#[allow(async_fn_in_trait)]
pub trait UserRepository: Send + Sync {
    /// Einen neuen Benutzer anlegen
    ///
    /// Gibt `DbError::Eindeutigkeit` zurueck wenn die E-Mail bereits
    /// registriert ist.
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord>;

    /// Einen Benutzer anhand seiner ID laden
    async fn get_by_id(&self, id: UserId) -> DbResult<Option<BenutzerRecord>>;

    /// Einen Benutzer anhand seiner E-Mail laden (exakter, case-sensitiver Match)
    async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>>;
}

/// Repository fuer Beitrags-Datenzugriffe
///
/// Erstellen und Aktualisieren gleichen die uebergebenen Tag-Namen innerhalb
/// derselben Transaktion ab, sodass Beitrag, Tags und Verknuepfungen atomar
/// geschrieben werden.
#[allow(async_fn_in_trait)]
pub trait PostRepository: Send + Sync {
    /// Einen neuen Beitrag mit seinen Tags anlegen
    ///
    /// Gibt `DbError::Eindeutigkeit` zurueck wenn der Slug bereits existiert.
    async fn create(&self, data: NeuerBeitrag<'_>, tag_namen: &[String])
        -> DbResult<BeitragRecord>;

    /// Einen Beitrag anhand seiner ID laden
    async fn get_by_id(&self, id: PostId) -> DbResult<Option<BeitragRecord>>;

    /// Einen Beitrag anhand seines Slugs laden
    async fn get_by_slug(&self, slug: &str) -> DbResult<Option<BeitragRecord>>;

    /// Prueft ob ein Slug bereits vergeben ist
    async fn slug_existiert(&self, slug: &str) -> DbResult<bool>;

    /// Beitraege gefiltert auflisten, neueste zuerst
    async fn list(&self, filter: BeitragFilter) -> DbResult<Vec<BeitragRecord>>;

    /// Einen Beitrag aktualisieren
    ///
    /// `tag_namen = Some(..)` ersetzt die komplette Tag-Menge des Beitrags;
    /// `None` laesst die Verknuepfungen unveraendert.
    async fn update(
        &self,
        id: PostId,
        data: BeitragUpdate,
        tag_namen: Option<&[String]>,
    ) -> DbResult<BeitragRecord>;

    /// Einen Beitrag loeschen (Verknuepfungen kaskadieren, Tags bleiben)
    async fn delete(&self, id: PostId) -> DbResult<bool>;
}

/// Repository fuer Tag-Datenzugriffe
#[allow(async_fn_in_trait)]
pub trait TagRepository: Send + Sync {
    /// Gleicht Tag-Namen in Eingabereihenfolge mit der Datenbank ab
    /// (lookup-or-create) – die oeffentliche Abgleich-Schnittstelle mit
    /// eigener Transaktion.
    ///
    /// Doppelte Namen in der Eingabe loesen auf denselben Datensatz auf und
    /// erscheinen einmal pro Vorkommen im Ergebnis.
    async fn get_or_create_many(&self, namen: &[String]) -> DbResult<Vec<TagRecord>>;

    /// Einen Tag anhand seines Namens laden (exakter Match)
    async fn get_by_name(&self, name: &str) -> DbResult<Option<TagRecord>>;
}
