//! REST-Handler fuer Beitrags-Endpunkte
//!
//! Lesezugriffe sind oeffentlich; Schreiben verlangt eine angemeldete
//! Identitaet ueber den [`AngemeldeterBenutzer`]-Extraktor.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blogwerk_core::{PostId, TagId};
use blogwerk_content::{BeitragAenderung, NeuerBeitragDaten};
use blogwerk_db::models::{BeitragFilter, BeitragRecord, TagRecord};

use crate::error::ApiError;
use crate::extract::AngemeldeterBenutzer;
use crate::handlers::BenutzerAntwort;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TagAntwort {
    pub id: TagId,
    pub name: String,
}

impl From<TagRecord> for TagAntwort {
    fn from(tag: TagRecord) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

/// Vollstaendige Beitrags-Antwort (Detailansicht)
#[derive(Debug, Serialize)]
pub struct BeitragAntwort {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured: bool,
    pub read_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: BenutzerAntwort,
    pub tags: Vec<TagAntwort>,
}

impl From<BeitragRecord> for BeitragAntwort {
    fn from(beitrag: BeitragRecord) -> Self {
        Self {
            id: beitrag.id,
            slug: beitrag.slug,
            title: beitrag.title,
            excerpt: beitrag.excerpt,
            content: beitrag.content,
            featured: beitrag.featured,
            read_time: beitrag.read_time,
            created_at: beitrag.created_at,
            updated_at: beitrag.updated_at,
            author: beitrag.author.into(),
            tags: beitrag.tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Gekuerzte Beitrags-Antwort fuer Listen (ohne Inhalt)
#[derive(Debug, Serialize)]
pub struct BeitragListeAntwort {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub featured: bool,
    pub read_time: String,
    pub created_at: DateTime<Utc>,
    pub author: BenutzerAntwort,
    pub tags: Vec<TagAntwort>,
}

impl From<BeitragRecord> for BeitragListeAntwort {
    fn from(beitrag: BeitragRecord) -> Self {
        Self {
            id: beitrag.id,
            slug: beitrag.slug,
            title: beitrag.title,
            excerpt: beitrag.excerpt,
            featured: beitrag.featured,
            read_time: beitrag.read_time,
            created_at: beitrag.created_at,
            author: beitrag.author.into(),
            tags: beitrag.tags.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListeParams {
    pub featured: Option<bool>,
    pub tag: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BeitragErstellenBody {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Deserialize)]
pub struct BeitragAendernBody {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
}

/// GET /api/posts
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListeParams>,
) -> Result<Json<Vec<BeitragListeAntwort>>, ApiError> {
    let beitraege = state
        .beitraege
        .auflisten(BeitragFilter {
            featured: params.featured,
            tag: params.tag,
        })
        .await?;

    Ok(Json(beitraege.into_iter().map(Into::into).collect()))
}

/// GET /api/posts/:slug
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BeitragAntwort>, ApiError> {
    let beitrag = state.beitraege.laden(&slug).await?;
    Ok(Json(beitrag.into()))
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    AngemeldeterBenutzer(benutzer): AngemeldeterBenutzer,
    Json(body): Json<BeitragErstellenBody>,
) -> Result<(StatusCode, Json<BeitragAntwort>), ApiError> {
    titel_pruefen(&body.title)?;
    if body.content.is_empty() {
        return Err(ApiError::Validierung("Inhalt darf nicht leer sein".into()));
    }

    let beitrag = state
        .beitraege
        .erstellen(
            &benutzer,
            NeuerBeitragDaten {
                titel: body.title,
                auszug: body.excerpt,
                inhalt: body.content,
                tags: body.tags,
                featured: body.featured,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(beitrag.into())))
}

/// PUT /api/posts/:slug
pub async fn update_post(
    State(state): State<AppState>,
    AngemeldeterBenutzer(benutzer): AngemeldeterBenutzer,
    Path(slug): Path<String>,
    Json(body): Json<BeitragAendernBody>,
) -> Result<Json<BeitragAntwort>, ApiError> {
    if let Some(ref titel) = body.title {
        titel_pruefen(titel)?;
    }
    if let Some(ref inhalt) = body.content {
        if inhalt.chars().count() < 10 {
            return Err(ApiError::Validierung(
                "Inhalt muss mindestens 10 Zeichen haben".into(),
            ));
        }
    }

    let beitrag = state
        .beitraege
        .aktualisieren(
            &benutzer,
            &slug,
            BeitragAenderung {
                titel: body.title,
                auszug: body.excerpt,
                inhalt: body.content,
                tags: body.tags,
                featured: body.featured,
            },
        )
        .await?;

    Ok(Json(beitrag.into()))
}

/// DELETE /api/posts/:slug
pub async fn delete_post(
    State(state): State<AppState>,
    AngemeldeterBenutzer(benutzer): AngemeldeterBenutzer,
    Path(slug): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.beitraege.loeschen(&benutzer, &slug).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn titel_pruefen(titel: &str) -> Result<(), ApiError> {
    let laenge = titel.chars().count();
    if !(3..=255).contains(&laenge) {
        return Err(ApiError::Validierung(
            "Titel muss zwischen 3 und 255 Zeichen haben".into(),
        ));
    }
    Ok(())
}
