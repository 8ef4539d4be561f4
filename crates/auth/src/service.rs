//! Auth-Service fuer Blogwerk
//!
//! Zentraler Service fuer Registrierung, Login und den OAuth-Demo-Fluss.
//! Nutzt das UserRepository und den TokenService.

use std::sync::Arc;

use chrono::Utc;

use blogwerk_db::{
    models::{BenutzerRecord, NeuerBenutzer},
    UserRepository,
};

use crate::error::{AuthError, AuthResult};
use crate::password::{passwort_hashen, passwort_verifizieren};
use crate::token::TokenService;

/// Ergebnis einer erfolgreichen Anmeldung oder Registrierung
#[derive(Debug, Clone)]
pub struct Anmeldung {
    pub benutzer: BenutzerRecord,
    /// Frisch ausgestelltes Bearer-Token
    pub token: String,
}

/// Auth-Service – zentraler Einstiegspunkt fuer alle Authentifizierungsvorgaenge
pub struct AuthService<U: UserRepository> {
    user_repo: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Erstellt einen neuen AuthService
    pub fn neu(user_repo: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// Registriert einen neuen Benutzer mit E-Mail und Passwort
    ///
    /// Gibt `AuthError::EmailVergeben` zurueck wenn die E-Mail bereits
    /// registriert ist.
    pub async fn registrieren(
        &self,
        email: &str,
        name: &str,
        passwort: &str,
    ) -> AuthResult<Anmeldung> {
        if self.user_repo.get_by_email(email).await?.is_some() {
            return Err(AuthError::EmailVergeben(email.to_string()));
        }

        let passwort_hash = passwort_hashen(passwort)?;

        let benutzer = self
            .user_repo
            .create(NeuerBenutzer {
                email,
                name,
                password_hash: &passwort_hash,
                avatar: None,
                provider: "email",
            })
            .await
            .map_err(|e| {
                // Rennen gegen eine parallele Registrierung derselben E-Mail
                if e.ist_eindeutigkeit() {
                    AuthError::EmailVergeben(email.to_string())
                } else {
                    AuthError::Datenbank(e)
                }
            })?;

        tracing::info!(
            user_id = %benutzer.id,
            email = %benutzer.email,
            "Neuer Benutzer registriert"
        );

        self.anmeldung_ausstellen(benutzer)
    }

    /// Meldet einen Benutzer mit E-Mail und Passwort an
    ///
    /// Unbekannte E-Mail und falsches Passwort kollabieren zu demselben
    /// Fehler, damit Anmeldedaten nicht durchgeraten werden koennen.
    pub async fn anmelden(&self, email: &str, passwort: &str) -> AuthResult<Anmeldung> {
        let benutzer = self
            .user_repo
            .get_by_email(email)
            .await?
            .ok_or(AuthError::UngueltigeAnmeldedaten)?;

        if !passwort_verifizieren(passwort, &benutzer.password_hash) {
            tracing::warn!(email = %email, "Fehlgeschlagener Login-Versuch");
            return Err(AuthError::UngueltigeAnmeldedaten);
        }

        self.anmeldung_ausstellen(benutzer)
    }

    /// OAuth-Demo-Fluss: dem Client vertrauen, Benutzer finden oder anlegen
    ///
    /// Neue Identitaeten werden ohne Passwort angelegt (leerer Hash) und
    /// tragen den angegebenen Provider. Das ausgestellte Token ist ein
    /// regulaeres Bearer-Token.
    pub async fn oauth_demo(
        &self,
        provider: &str,
        email: &str,
        name: &str,
    ) -> AuthResult<Anmeldung> {
        let benutzer = match self.user_repo.get_by_email(email).await? {
            Some(vorhanden) => vorhanden,
            None => {
                let neu = self
                    .user_repo
                    .create(NeuerBenutzer {
                        email,
                        name,
                        password_hash: "",
                        avatar: None,
                        provider,
                    })
                    .await?;

                tracing::info!(
                    user_id = %neu.id,
                    provider = %provider,
                    "OAuth-Demo-Benutzer angelegt"
                );
                neu
            }
        };

        self.anmeldung_ausstellen(benutzer)
    }

    fn anmeldung_ausstellen(&self, benutzer: BenutzerRecord) -> AuthResult<Anmeldung> {
        let token = self.token_service.ausstellen(benutzer.id, Utc::now())?;
        Ok(Anmeldung { benutzer, token })
    }
}
