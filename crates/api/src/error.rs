//! Fehlerabbildung der Fachfehler auf HTTP-Antworten
//!
//! Die Kerne loggen und uebersetzen nichts selbst; erst hier werden
//! typisierte Fehler zu Transport-Antworten. Abgelaufene und ungueltige
//! Tokens sind fuer Aufrufer nicht unterscheidbar – beide enden als 401.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use blogwerk_auth::AuthError;
use blogwerk_content::ContentError;
use blogwerk_db::DbError;

/// Alle Fehler die die REST-Schicht beantworten kann
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Ungueltige Eingabe: {0}")]
    Validierung(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Datenbank(#[from] DbError),
}

impl ApiError {
    /// HTTP-Status fuer diesen Fehler
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Validierung(_) => StatusCode::BAD_REQUEST,

            Self::Auth(AuthError::UngueltigeAnmeldedaten)
            | Self::Auth(AuthError::AnmeldungErforderlich) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::EmailVergeben(_)) => StatusCode::CONFLICT,
            Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,

            Self::Content(ContentError::NichtGefunden(_)) => StatusCode::NOT_FOUND,
            Self::Content(ContentError::ZugriffVerweigert(_)) => StatusCode::FORBIDDEN,
            Self::Content(ContentError::Konflikt(_)) => StatusCode::CONFLICT,
            Self::Content(ContentError::Datenbank(_)) => StatusCode::INTERNAL_SERVER_ERROR,

            Self::Datenbank(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        // Interne Fehler landen im Log, nicht in der Antwort
        let nachricht = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(fehler = %self, "Interner Fehler bei Request-Verarbeitung");
            "Interner Fehler".to_string()
        } else {
            self.to_string()
        };

        (
            status,
            Json(json!({
                "error": {
                    "code": status.as_u16(),
                    "message": nachricht
                }
            })),
        )
            .into_response()
    }
}
