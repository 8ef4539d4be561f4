//! REST-Handler fuer Auth-Endpunkte

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::extract::AngemeldeterBenutzer;
use crate::handlers::BenutzerAntwort;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegistrierenBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AnmeldenBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct OAuthDemoBody {
    pub provider: String,
    pub email: String,
    pub name: String,
}

/// Antwort mit frischem Bearer-Token
#[derive(Debug, Serialize)]
pub struct TokenAntwort {
    pub access_token: String,
    pub token_type: String,
    pub user: BenutzerAntwort,
}

impl TokenAntwort {
    fn aus_anmeldung(anmeldung: blogwerk_auth::Anmeldung) -> Self {
        Self {
            access_token: anmeldung.token,
            token_type: "bearer".into(),
            user: anmeldung.benutzer.into(),
        }
    }
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegistrierenBody>,
) -> Result<(StatusCode, Json<TokenAntwort>), ApiError> {
    name_pruefen(&body.name)?;
    email_pruefen(&body.email)?;
    if body.password.chars().count() < 6 {
        return Err(ApiError::Validierung(
            "Passwort muss mindestens 6 Zeichen haben".into(),
        ));
    }

    let anmeldung = state
        .auth
        .registrieren(&body.email, &body.name, &body.password)
        .await?;

    Ok((StatusCode::CREATED, Json(TokenAntwort::aus_anmeldung(anmeldung))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<AnmeldenBody>,
) -> Result<Json<TokenAntwort>, ApiError> {
    let anmeldung = state.auth.anmelden(&body.email, &body.password).await?;
    Ok(Json(TokenAntwort::aus_anmeldung(anmeldung)))
}

/// POST /api/auth/oauth-demo
///
/// Demo-Fluss ohne echten Provider-Abgleich: der Client wird beim
/// ersten Kontakt angelegt und erhaelt ein regulaeres Token.
pub async fn oauth_demo(
    State(state): State<AppState>,
    Json(body): Json<OAuthDemoBody>,
) -> Result<Json<TokenAntwort>, ApiError> {
    name_pruefen(&body.name)?;
    email_pruefen(&body.email)?;

    let anmeldung = state
        .auth
        .oauth_demo(&body.provider, &body.email, &body.name)
        .await?;

    Ok(Json(TokenAntwort::aus_anmeldung(anmeldung)))
}

/// GET /api/auth/me
pub async fn me(
    AngemeldeterBenutzer(benutzer): AngemeldeterBenutzer,
) -> Json<BenutzerAntwort> {
    Json(benutzer.into())
}

fn name_pruefen(name: &str) -> Result<(), ApiError> {
    let laenge = name.chars().count();
    if !(2..=100).contains(&laenge) {
        return Err(ApiError::Validierung(
            "Name muss zwischen 2 und 100 Zeichen haben".into(),
        ));
    }
    Ok(())
}

fn email_pruefen(email: &str) -> Result<(), ApiError> {
    let plausibel = email.split_once('@').is_some_and(|(lokal, domain)| {
        !lokal.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !email.contains(char::is_whitespace)
    });

    if !plausibel {
        return Err(ApiError::Validierung("Ungueltige E-Mail-Adresse".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pruefung() {
        assert!(email_pruefen("a@b.de").is_ok());
        assert!(email_pruefen("name.nachname@mail.example.com").is_ok());

        assert!(email_pruefen("").is_err());
        assert!(email_pruefen("ohne-at.de").is_err());
        assert!(email_pruefen("@ohne-lokal.de").is_err());
        assert!(email_pruefen("a@ohnepunkt").is_err());
        assert!(email_pruefen("a@.startet-mit-punkt").is_err());
        assert!(email_pruefen("leer zeichen@b.de").is_err());
    }

    #[test]
    fn name_pruefung() {
        assert!(name_pruefen("Ay").is_ok());
        assert!(name_pruefen("A").is_err());
        assert!(name_pruefen(&"x".repeat(101)).is_err());
    }
}
