//! Ausstellen und Pruefen signierter Bearer-Tokens
//!
//! Tokens sind zustandslos: drei Punkt-getrennte base64url-Segmente
//! (Header, Claims, Signatur), symmetrisch signiert mit dem konfigurierten
//! Geheimnis. Die Verifikation braucht keinen Session-Store – der Preis
//! dafuer ist, dass ausgestellte Tokens serverseitig nicht widerrufbar sind.
//!
//! Der Claim-Satz ist minimal: `sub` (Benutzer-ID als String) und `exp`.

use std::str::FromStr;

use blogwerk_core::UserId;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{AuthError, AuthResult};

/// Standard-Token-Lebensdauer: 7 Tage
pub const STANDARD_TTL_SEKUNDEN: i64 = 7 * 24 * 60 * 60;

/// Unveraenderliche Token-Konfiguration
///
/// Wird beim Start einmal konstruiert und in den [`TokenService`]
/// injiziert; es gibt keinen prozessweiten Einstellungs-Lookup.
#[derive(Debug, Clone)]
pub struct TokenKonfig {
    /// Gemeinsames Signatur-Geheimnis
    pub geheimnis: String,
    /// Algorithmus-Kennung, z.B. "HS256"
    pub algorithmus: String,
    /// Token-Lebensdauer in Sekunden
    pub ttl_sekunden: i64,
}

impl Default for TokenKonfig {
    fn default() -> Self {
        Self {
            geheimnis: "change-me-in-production".into(),
            algorithmus: "HS256".into(),
            ttl_sekunden: STANDARD_TTL_SEKUNDEN,
        }
    }
}

/// Claim-Satz eines ausgestellten Tokens
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Benutzer-ID in String-Form
    sub: Option<String>,
    /// Ablaufzeitpunkt als Unix-Sekunden
    exp: i64,
}

/// Interner Ablehnungsgrund bei der Token-Pruefung
///
/// Dient ausschliesslich der Diagnose (Debug-Logging). Nach aussen
/// kollabieren alle Varianten zu "keine Identitaet" – Aufrufer koennen
/// abgelaufene und ungueltige Tokens nicht unterscheiden.
#[derive(Debug, Error)]
enum TokenFehler {
    #[error("Token missgebildet")]
    Missgebildet,

    #[error("Signatur ungueltig")]
    SignaturUngueltig,

    #[error("Token abgelaufen")]
    Abgelaufen,

    #[error("sub-Claim fehlt")]
    SubjektFehlt,

    #[error("sub-Claim nicht numerisch")]
    SubjektUngueltig,
}

/// Dienst zum Ausstellen und Pruefen von Tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Erstellt einen neuen TokenService aus der Konfiguration
    ///
    /// Akzeptiert nur HMAC-Algorithmen; das Geheimnis ist ein gemeinsamer
    /// symmetrischer Schluessel.
    pub fn neu(konfig: &TokenKonfig) -> AuthResult<Self> {
        let algorithmus = Algorithm::from_str(&konfig.algorithmus).map_err(|_| {
            AuthError::TokenKonfiguration(format!(
                "Unbekannter Algorithmus '{}'",
                konfig.algorithmus
            ))
        })?;

        if !matches!(
            algorithmus,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(AuthError::TokenKonfiguration(format!(
                "Algorithmus '{}' ist kein HMAC-Verfahren",
                konfig.algorithmus
            )));
        }

        let mut validation = Validation::new(algorithmus);
        // Ablauf wird gegen die uebergebene Uhr geprueft, nicht gegen die
        // Systemzeit der Bibliothek
        validation.validate_exp = false;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(konfig.geheimnis.as_bytes()),
            decoding_key: DecodingKey::from_secret(konfig.geheimnis.as_bytes()),
            header: Header::new(algorithmus),
            validation,
            ttl: Duration::seconds(konfig.ttl_sekunden),
        })
    }

    /// Stellt ein Token fuer den Benutzer aus (konfigurierte Lebensdauer)
    pub fn ausstellen(&self, user_id: UserId, jetzt: DateTime<Utc>) -> AuthResult<String> {
        self.ausstellen_mit_ttl(user_id, jetzt, self.ttl)
    }

    /// Stellt ein Token mit abweichender Lebensdauer aus
    pub fn ausstellen_mit_ttl(
        &self,
        user_id: UserId,
        jetzt: DateTime<Utc>,
        ttl: Duration,
    ) -> AuthResult<String> {
        let claims = Claims {
            sub: Some(user_id.to_string()),
            exp: (jetzt + ttl).timestamp(),
        };

        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenAusstellung(e.to_string()))
    }

    /// Prueft ein Token gegen die uebergebene Uhr
    ///
    /// Alle Fehlschlaege – missgebildetes Token, falsche Signatur, Ablauf,
    /// fehlender oder nicht-numerischer `sub`-Claim – kollabieren zu `None`.
    /// Die Funktion gibt niemals einen Fehler an den Aufrufer weiter.
    pub fn pruefen(&self, token: &str, jetzt: DateTime<Utc>) -> Option<UserId> {
        match self.dekodieren(token, jetzt) {
            Ok(user_id) => Some(user_id),
            Err(grund) => {
                tracing::debug!(grund = %grund, "Token abgelehnt");
                None
            }
        }
    }

    fn dekodieren(&self, token: &str, jetzt: DateTime<Utc>) -> Result<UserId, TokenFehler> {
        let daten = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenFehler::SignaturUngueltig,
                _ => TokenFehler::Missgebildet,
            }
        })?;

        if jetzt.timestamp() >= daten.claims.exp {
            return Err(TokenFehler::Abgelaufen);
        }

        let sub = daten.claims.sub.ok_or(TokenFehler::SubjektFehlt)?;
        sub.parse().map_err(|_| TokenFehler::SubjektUngueltig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

    fn service() -> TokenService {
        TokenService::neu(&TokenKonfig {
            geheimnis: "test-geheimnis".into(),
            ..TokenKonfig::default()
        })
        .expect("TokenService muss sich konstruieren lassen")
    }

    #[test]
    fn ausstellen_und_pruefen_liefert_user_id() {
        let svc = service();
        let jetzt = Utc::now();

        let token = svc.ausstellen(UserId(7), jetzt).unwrap();
        assert_eq!(token.split('.').count(), 3, "kompakte Serialisierung");

        assert_eq!(svc.pruefen(&token, jetzt), Some(UserId(7)));
    }

    #[test]
    fn abgelaufenes_token_wird_abgelehnt() {
        let svc = service();
        let jetzt = Utc::now();

        let token = svc.ausstellen(UserId(3), jetzt).unwrap();

        // Eine Sekunde nach Ablauf der Standard-TTL
        let spaeter = jetzt + Duration::seconds(STANDARD_TTL_SEKUNDEN + 1);
        assert_eq!(svc.pruefen(&token, spaeter), None);

        // Kurz vor Ablauf ist das Token noch gueltig
        let knapp_davor = jetzt + Duration::seconds(STANDARD_TTL_SEKUNDEN - 1);
        assert_eq!(svc.pruefen(&token, knapp_davor), Some(UserId(3)));
    }

    #[test]
    fn abweichende_ttl_wird_beachtet() {
        let svc = service();
        let jetzt = Utc::now();

        let token = svc
            .ausstellen_mit_ttl(UserId(1), jetzt, Duration::seconds(60))
            .unwrap();

        assert_eq!(svc.pruefen(&token, jetzt + Duration::seconds(59)), Some(UserId(1)));
        assert_eq!(svc.pruefen(&token, jetzt + Duration::seconds(61)), None);
    }

    #[test]
    fn falsches_geheimnis_wird_abgelehnt() {
        let svc = service();
        let fremd = TokenService::neu(&TokenKonfig {
            geheimnis: "anderes-geheimnis".into(),
            ..TokenKonfig::default()
        })
        .unwrap();

        let token = fremd.ausstellen(UserId(5), Utc::now()).unwrap();
        assert_eq!(svc.pruefen(&token, Utc::now()), None);
    }

    #[test]
    fn manipulierte_claims_werden_abgelehnt() {
        let svc = service();
        let jetzt = Utc::now();
        let token = svc.ausstellen(UserId(5), jetzt).unwrap();

        // Payload-Segment dekodieren, sub austauschen, mit der alten
        // Signatur wieder zusammensetzen
        let teile: Vec<&str> = token.split('.').collect();
        let payload = URL_SAFE_NO_PAD.decode(teile[1]).unwrap();
        let payload = String::from_utf8(payload).unwrap().replace("\"5\"", "\"6\"");
        let manipuliert = format!(
            "{}.{}.{}",
            teile[0],
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            teile[2]
        );

        assert_eq!(svc.pruefen(&manipuliert, jetzt), None);
    }

    #[test]
    fn missgebildete_tokens_werden_abgelehnt() {
        let svc = service();
        let jetzt = Utc::now();

        assert_eq!(svc.pruefen("", jetzt), None);
        assert_eq!(svc.pruefen("kein-token", jetzt), None);
        assert_eq!(svc.pruefen("a.b.c", jetzt), None);
    }

    #[test]
    fn nicht_numerischer_sub_wird_abgelehnt() {
        let svc = service();
        let jetzt = Utc::now();

        let claims = Claims {
            sub: Some("keine-zahl".into()),
            exp: (jetzt + Duration::seconds(60)).timestamp(),
        };
        let token = encode(&svc.header, &claims, &svc.encoding_key).unwrap();

        assert_eq!(svc.pruefen(&token, jetzt), None);
    }

    #[test]
    fn fehlender_sub_wird_abgelehnt() {
        let svc = service();
        let jetzt = Utc::now();

        let claims = Claims {
            sub: None,
            exp: (jetzt + Duration::seconds(60)).timestamp(),
        };
        let token = encode(&svc.header, &claims, &svc.encoding_key).unwrap();

        assert_eq!(svc.pruefen(&token, jetzt), None);
    }

    #[test]
    fn nicht_hmac_algorithmus_wird_abgelehnt() {
        let fehler = TokenService::neu(&TokenKonfig {
            algorithmus: "RS256".into(),
            ..TokenKonfig::default()
        });
        assert!(fehler.is_err());

        let fehler = TokenService::neu(&TokenKonfig {
            algorithmus: "quatsch".into(),
            ..TokenKonfig::default()
        });
        assert!(fehler.is_err());
    }
}
