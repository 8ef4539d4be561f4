//! blogwerk-server – Bibliotheks-Root
//!
//! Deklariert die Server-Module und verdrahtet beim Start alle
//! Subsysteme: Datenbank, Token-Dienst, Services und REST-API.

pub mod config;

use std::sync::Arc;

use anyhow::Result;

use blogwerk_api::{AppState, RestServer, RestServerKonfig};
use blogwerk_auth::{AuthService, IdentityResolver, TokenKonfig, TokenService};
use blogwerk_content::BeitragService;
use blogwerk_db::{DatabaseConfig, SqliteDb};
use config::ServerConfig;

/// Haelt den laufenden Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Startet alle Server-Subsysteme und laeuft bis zum Shutdown-Signal
    ///
    /// Reihenfolge:
    /// 1. Datenbank oeffnen und migrieren
    /// 2. Token-Dienst aus dem Konfigurations-Snapshot konstruieren
    /// 3. Services und REST-State verdrahten
    /// 4. REST-API starten und auf Ctrl-C / SIGTERM warten
    pub async fn starten(self) -> Result<()> {
        tracing::info!(
            app = %self.config.server.name,
            api = %self.config.api_bind_adresse(),
            "Server startet"
        );

        let db = Arc::new(
            SqliteDb::oeffnen(&DatabaseConfig {
                url: self.config.datenbank.url.clone(),
                max_verbindungen: self.config.datenbank.max_verbindungen,
                sqlite_wal: self.config.datenbank.sqlite_wal,
            })
            .await?,
        );

        let token_service = Arc::new(TokenService::neu(&TokenKonfig {
            geheimnis: self.config.auth.geheimnis.clone(),
            algorithmus: self.config.auth.algorithmus.clone(),
            ttl_sekunden: self.config.auth.token_ttl_sekunden,
        })?);

        let state = AppState::neu(
            Arc::new(AuthService::neu(Arc::clone(&db), Arc::clone(&token_service))),
            Arc::new(IdentityResolver::neu(Arc::clone(&db), token_service)),
            Arc::new(BeitragService::neu(Arc::clone(&db))),
            self.config.server.name.clone(),
        );

        let rest = RestServer::neu(RestServerKonfig {
            bind_addr: self.config.api_bind_adresse().parse()?,
            cors_origins: self.config.netzwerk.cors_origins.clone(),
        });

        tokio::select! {
            ergebnis = rest.starten(state) => ergebnis?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown-Signal empfangen, Server wird beendet");
            }
        }

        Ok(())
    }
}
