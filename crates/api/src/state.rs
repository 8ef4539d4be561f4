//! Axum-State fuer die REST-Schicht

use std::sync::Arc;

use blogwerk_auth::{AuthService, IdentityResolver};
use blogwerk_content::BeitragService;
use blogwerk_db::SqliteDb;

/// Gemeinsamer State aller Handler
///
/// Haelt die Services hinter `Arc`s; der State selbst ist billig klonbar.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService<SqliteDb>>,
    pub identitaet: Arc<IdentityResolver<SqliteDb>>,
    pub beitraege: Arc<BeitragService<SqliteDb>>,
    /// Anzeigename der Anwendung (fuer den Health-Endpunkt)
    pub app_name: String,
}

impl AppState {
    pub fn neu(
        auth: Arc<AuthService<SqliteDb>>,
        identitaet: Arc<IdentityResolver<SqliteDb>>,
        beitraege: Arc<BeitragService<SqliteDb>>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            auth,
            identitaet,
            beitraege,
            app_name: app_name.into(),
        }
    }
}
