//! Identitaetsaufloesung aus optionalen Bearer-Tokens
//!
//! Zwei Stufen: [`IdentityResolver::aufloesen`] fuer oeffentliche
//! Lese-Endpunkte (anonymer Zugriff ist gueltig und kein Fehler) und
//! [`IdentityResolver::verlangen`] fuer schreibende Endpunkte, die eine
//! angemeldete Identitaet voraussetzen.

use std::sync::Arc;

use chrono::Utc;

use blogwerk_db::{models::BenutzerRecord, UserRepository};

use crate::error::{AuthError, AuthResult};
use crate::token::TokenService;

/// Loest ein optionales Token zum zugehoerigen Benutzer auf
pub struct IdentityResolver<U: UserRepository> {
    user_repo: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> IdentityResolver<U> {
    /// Erstellt einen neuen IdentityResolver
    pub fn neu(user_repo: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// Loest ein optionales Token auf
    ///
    /// `None` in allen drei Abwesenheitsfaellen: kein Token praesentiert,
    /// Token nicht verifizierbar, oder verifizierte Benutzer-ID ohne
    /// passende Zeile in der Datenbank (geloeschter/veralteter Account).
    /// Nur echte Speicherfehler werden als Fehler weitergereicht.
    pub async fn aufloesen(&self, token: Option<&str>) -> AuthResult<Option<BenutzerRecord>> {
        let Some(token) = token else {
            return Ok(None);
        };

        let Some(user_id) = self.token_service.pruefen(token, Utc::now()) else {
            return Ok(None);
        };

        Ok(self.user_repo.get_by_id(user_id).await?)
    }

    /// Wie [`aufloesen`](Self::aufloesen), verlangt aber eine Identitaet
    ///
    /// Fehlende Identitaet wird zu [`AuthError::AnmeldungErforderlich`].
    pub async fn verlangen(&self, token: Option<&str>) -> AuthResult<BenutzerRecord> {
        self.aufloesen(token)
            .await?
            .ok_or(AuthError::AnmeldungErforderlich)
    }
}
