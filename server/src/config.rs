//! Server-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen und danach nicht mehr
//! veraendert – die Werte wandern als unveraenderliche Snapshots in die
//! Konstruktoren der Komponenten. Alle Felder haben sinnvolle
//! Standardwerte, sodass der Server ohne Konfigurationsdatei lauffaehig ist.

use serde::{Deserialize, Serialize};

use blogwerk_auth::token::STANDARD_TTL_SEKUNDEN;

/// Vollstaendige Server-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Allgemeine Server-Einstellungen
    pub server: ServerEinstellungen,
    /// Netzwerk-Einstellungen
    pub netzwerk: NetzwerkEinstellungen,
    /// Datenbank-Einstellungen
    pub datenbank: DatenbankEinstellungen,
    /// Auth-Einstellungen (Token-Signierung)
    pub auth: AuthEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
}

/// Allgemeine Server-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerEinstellungen {
    /// Anzeigename der Anwendung
    pub name: String,
}

impl Default for ServerEinstellungen {
    fn default() -> Self {
        Self {
            name: "Minimalist Blog".into(),
        }
    }
}

/// Netzwerk-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetzwerkEinstellungen {
    /// Bind-Adresse fuer die REST-API
    pub bind_adresse: String,
    /// Port fuer die REST-API
    pub api_port: u16,
    /// Erlaubte CORS-Origins (leer = alle erlaubt, nur fuer Entwicklung)
    pub cors_origins: Vec<String>,
}

impl Default for NetzwerkEinstellungen {
    fn default() -> Self {
        Self {
            bind_adresse: "0.0.0.0".into(),
            api_port: 8000,
            cors_origins: vec!["http://localhost:3000".into()],
        }
    }
}

/// Datenbank-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatenbankEinstellungen {
    /// Verbindungs-URL
    pub url: String,
    /// Maximale Verbindungspool-Groesse
    pub max_verbindungen: u32,
    /// Ob WAL-Modus aktiviert werden soll
    pub sqlite_wal: bool,
}

impl Default for DatenbankEinstellungen {
    fn default() -> Self {
        Self {
            url: "sqlite://blog.db".into(),
            max_verbindungen: 5,
            sqlite_wal: true,
        }
    }
}

/// Auth-Einstellungen fuer die Token-Signierung
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthEinstellungen {
    /// Gemeinsames Signatur-Geheimnis
    pub geheimnis: String,
    /// Signatur-Algorithmus, z.B. "HS256"
    pub algorithmus: String,
    /// Token-Lebensdauer in Sekunden (Standard: 7 Tage)
    pub token_ttl_sekunden: i64,
}

impl Default for AuthEinstellungen {
    fn default() -> Self {
        Self {
            geheimnis: "change-me-in-production".into(),
            algorithmus: "HS256".into(),
            token_ttl_sekunden: STANDARD_TTL_SEKUNDEN,
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

impl ServerConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> anyhow::Result<Self> {
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => {
                let config: Self = toml::from_str(&inhalt)
                    .map_err(|e| anyhow::anyhow!("Konfigurationsfehler in '{pfad}': {e}"))?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!(
                "Konfigurationsdatei '{pfad}' nicht lesbar: {e}"
            )),
        }
    }

    /// Gibt die Bind-Adresse fuer die REST-API zurueck
    pub fn api_bind_adresse(&self) -> String {
        format!("{}:{}", self.netzwerk.bind_adresse, self.netzwerk.api_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standardwerte_sind_lauffaehig() {
        let config = ServerConfig::default();
        assert_eq!(config.netzwerk.api_port, 8000);
        assert_eq!(config.auth.algorithmus, "HS256");
        assert_eq!(config.auth.token_ttl_sekunden, 604_800);
        assert!(config.datenbank.sqlite_wal);
    }

    #[test]
    fn teilweise_konfiguration_ergaenzt_standardwerte() {
        let config: ServerConfig = toml::from_str(
            r#"
            [auth]
            geheimnis = "super-geheim"

            [netzwerk]
            api_port = 9000
            "#,
        )
        .expect("TOML muss parsen");

        assert_eq!(config.auth.geheimnis, "super-geheim");
        assert_eq!(config.auth.algorithmus, "HS256", "Standardwert bleibt");
        assert_eq!(config.netzwerk.api_port, 9000);
        assert_eq!(config.api_bind_adresse(), "0.0.0.0:9000");
    }
}
