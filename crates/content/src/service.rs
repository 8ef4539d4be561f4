//! Beitrags-Service: CRUD mit Besitzpruefung, Slug-Vergabe und Tag-Abgleich
//!
//! Der Service kennt nur das PostRepository; Transaktionsgrenzen (Beitrag +
//! Tags + Verknuepfungen atomar) liegen in der Repository-Implementierung.

use std::sync::Arc;

use blogwerk_db::{
    models::{BeitragFilter, BeitragRecord, BeitragUpdate, BenutzerRecord, NeuerBeitrag},
    PostRepository,
};

use crate::error::{ContentError, ContentResult};
use crate::slug::slug_erzeugen;
use crate::text::{auszug_erzeugen, lesezeit_berechnen, STANDARD_AUSZUG_LAENGE};

/// Eingabedaten fuer einen neuen Beitrag
#[derive(Debug, Clone)]
pub struct NeuerBeitragDaten {
    pub titel: String,
    pub auszug: Option<String>,
    pub inhalt: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

/// Teilaenderung eines bestehenden Beitrags – `None` laesst das Feld stehen
#[derive(Debug, Clone, Default)]
pub struct BeitragAenderung {
    pub titel: Option<String>,
    pub auszug: Option<String>,
    pub inhalt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
}

/// Prueft ob der Benutzer den Beitrag besitzt
///
/// Reiner Vergleich, zustandslos. Wird vor jeder mutierenden oder
/// loeschenden Operation angewandt, nie vor Lesezugriffen.
pub fn besitz_pruefen(
    beitrag: &BeitragRecord,
    benutzer: &BenutzerRecord,
) -> ContentResult<()> {
    if beitrag.author.id != benutzer.id {
        return Err(ContentError::ZugriffVerweigert(
            "Keine Berechtigung fuer diesen Beitrag".into(),
        ));
    }
    Ok(())
}

/// Beitrags-Service – zentraler Einstiegspunkt fuer alle Beitragsvorgaenge
pub struct BeitragService<P: PostRepository> {
    beitrag_repo: Arc<P>,
}

impl<P: PostRepository> BeitragService<P> {
    /// Erstellt einen neuen BeitragService
    pub fn neu(beitrag_repo: Arc<P>) -> Self {
        Self { beitrag_repo }
    }

    /// Legt einen neuen Beitrag fuer den Benutzer an
    ///
    /// Der Slug wird aus dem Titel abgeleitet; kollidiert er mit einem
    /// bestehenden Beitrag, wird genau einmal die Autor-ID angehaengt.
    /// Kollidiert auch der disambiguierte Slug (derselbe Autor legt den
    /// Titel ein drittes Mal an), schlaegt der Insert mit einem Konflikt
    /// fehl – bekannte Einschraenkung, es gibt keine weitere Schleife.
    pub async fn erstellen(
        &self,
        benutzer: &BenutzerRecord,
        daten: NeuerBeitragDaten,
    ) -> ContentResult<BeitragRecord> {
        let mut slug = slug_erzeugen(&daten.titel);
        if self.beitrag_repo.slug_existiert(&slug).await? {
            slug = format!("{slug}-{}", benutzer.id);
        }

        let lesezeit = lesezeit_berechnen(&daten.inhalt);
        let auszug = match daten.auszug {
            Some(a) if !a.is_empty() => a,
            _ => auszug_erzeugen(&daten.inhalt, STANDARD_AUSZUG_LAENGE),
        };

        let beitrag = self
            .beitrag_repo
            .create(
                NeuerBeitrag {
                    slug: &slug,
                    title: &daten.titel,
                    excerpt: Some(&auszug),
                    content: &daten.inhalt,
                    featured: daten.featured,
                    read_time: &lesezeit,
                    author_id: benutzer.id,
                },
                &daten.tags,
            )
            .await?;

        tracing::info!(
            post_id = %beitrag.id,
            slug = %beitrag.slug,
            autor = %benutzer.id,
            "Beitrag angelegt"
        );

        Ok(beitrag)
    }

    /// Laedt einen Beitrag anhand seines Slugs (oeffentlich)
    pub async fn laden(&self, slug: &str) -> ContentResult<BeitragRecord> {
        self.beitrag_repo
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| ContentError::NichtGefunden(format!("Beitrag '{slug}'")))
    }

    /// Listet Beitraege gefiltert auf, neueste zuerst (oeffentlich)
    pub async fn auflisten(&self, filter: BeitragFilter) -> ContentResult<Vec<BeitragRecord>> {
        Ok(self.beitrag_repo.list(filter).await?)
    }

    /// Aktualisiert einen Beitrag des Benutzers
    ///
    /// Ein neuer Titel leitet den Slug neu ab – ohne Disambiguierung;
    /// kollidiert der neue Slug, wird der Konflikt an den Aufrufer
    /// gereicht. Neuer Inhalt berechnet die Lesezeit neu und erzeugt den
    /// Auszug neu, sofern kein expliziter Auszug mitkommt.
    pub async fn aktualisieren(
        &self,
        benutzer: &BenutzerRecord,
        slug: &str,
        aenderung: BeitragAenderung,
    ) -> ContentResult<BeitragRecord> {
        let beitrag = self.laden(slug).await?;
        besitz_pruefen(&beitrag, benutzer)?;

        let mut update = BeitragUpdate::default();

        if let Some(titel) = aenderung.titel {
            update.slug = Some(slug_erzeugen(&titel));
            update.title = Some(titel);
        }

        if let Some(ref inhalt) = aenderung.inhalt {
            update.read_time = Some(lesezeit_berechnen(inhalt));
            if aenderung.auszug.as_deref().map_or(true, str::is_empty) {
                update.excerpt = Some(auszug_erzeugen(inhalt, STANDARD_AUSZUG_LAENGE));
            }
        }
        update.content = aenderung.inhalt;

        if let Some(auszug) = aenderung.auszug {
            update.excerpt = Some(auszug);
        }
        update.featured = aenderung.featured;

        let aktualisiert = self
            .beitrag_repo
            .update(beitrag.id, update, aenderung.tags.as_deref())
            .await?;

        tracing::info!(
            post_id = %aktualisiert.id,
            slug = %aktualisiert.slug,
            "Beitrag aktualisiert"
        );

        Ok(aktualisiert)
    }

    /// Loescht einen Beitrag des Benutzers
    ///
    /// Verknuepfungen zu Tags kaskadieren; die Tags selbst bleiben bestehen.
    pub async fn loeschen(&self, benutzer: &BenutzerRecord, slug: &str) -> ContentResult<()> {
        let beitrag = self.laden(slug).await?;
        besitz_pruefen(&beitrag, benutzer)?;

        self.beitrag_repo.delete(beitrag.id).await?;

        tracing::info!(post_id = %beitrag.id, slug = %slug, "Beitrag geloescht");
        Ok(())
    }
}
