//! Identitaets-Extraktoren fuer Axum-Handler
//!
//! Zwei Stufen, deklarativ am Handler-Parameter: [`OptionalerBenutzer`]
//! laesst Lese-Endpunkte oeffentlich (anonym ist gueltig),
//! [`AngemeldeterBenutzer`] erzwingt eine Identitaet und beantwortet
//! deren Fehlen einheitlich mit 401.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts, http::HeaderMap};

use blogwerk_db::models::BenutzerRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// Extrahiert Bearer-Token aus dem Authorization-Header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
}

/// Aufgeloeste Identitaet, falls ein gueltiges Token praesentiert wurde
pub struct OptionalerBenutzer(pub Option<BenutzerRecord>);

#[async_trait]
impl FromRequestParts<AppState> for OptionalerBenutzer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers);
        let benutzer = state.identitaet.aufloesen(token).await?;
        Ok(Self(benutzer))
    }
}

/// Verlangte Identitaet – lehnt anonyme Requests mit 401 ab
pub struct AngemeldeterBenutzer(pub BenutzerRecord);

#[async_trait]
impl FromRequestParts<AppState> for AngemeldeterBenutzer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers);
        let benutzer = state.identitaet.verlangen(token).await?;
        Ok(Self(benutzer))
    }
}
