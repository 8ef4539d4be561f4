//! Passwort-Hashing mit Argon2id
//!
//! Stellt sichere Passwort-Hashfunktionen mit Argon2id bereit.
//! Argon2id ist der empfohlene Algorithmus gemaess OWASP-Richtlinien.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params, Version,
};

use crate::error::AuthError;

/// Argon2id-Parameter fuer sicheres Passwort-Hashing
///
/// Werte gemaess OWASP-Empfehlungen:
/// - Speicher: 64 MiB
/// - Iterationen: 3
/// - Parallelismus: 1
fn argon2_instanz() -> Argon2<'static> {
    let params = Params::new(
        64 * 1024, // m_cost: 64 MiB
        3,         // t_cost: 3 Iterationen
        1,         // p_cost: 1 Thread
        None,      // output_len: Standard (32 Bytes)
    )
    .expect("Argon2-Parameter ungueltig");

    Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params)
}

/// Hasht ein Passwort mit Argon2id und einem zufaelligen Salt
///
/// Gibt den PHC-String zurueck (inkl. Algorithmus, Parameter und Salt).
/// Zwei Aufrufe mit demselben Passwort liefern verschiedene Hashes.
pub fn passwort_hashen(passwort: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = argon2_instanz();

    argon2
        .hash_password(passwort.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswortHashing(e.to_string()))
}

/// Verifiziert ein Passwort gegen einen gespeicherten PHC-Hash
///
/// Der Vergleich laeuft ueber die zeitkonstante Argon2-Verifikation.
/// Missgebildete oder leere Hash-Strings gelten als Nichtuebereinstimmung –
/// dadurch scheitert ein Passwort-Login fuer OAuth-Demo-Identitaeten (deren
/// gespeicherter Hash der leere String ist) sauber mit `false` statt mit
/// einem Fehler.
pub fn passwort_verifizieren(passwort: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    argon2_instanz()
        .verify_password(passwort.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passwort_hashen_und_verifizieren() {
        let passwort = "sicheres_passwort_123!";
        let hash = passwort_hashen(passwort).expect("Hashing fehlgeschlagen");

        assert!(!hash.is_empty());
        assert!(
            hash.starts_with("$argon2id$"),
            "Hash muss mit $argon2id$ beginnen"
        );

        assert!(
            passwort_verifizieren(passwort, &hash),
            "Passwort muss korrekt verifiziert werden"
        );
    }

    #[test]
    fn falsches_passwort_wird_abgelehnt() {
        let hash = passwort_hashen("richtiges_passwort").expect("Hashing fehlgeschlagen");
        assert!(!passwort_verifizieren("falsches_passwort", &hash));
    }

    #[test]
    fn zwei_hashes_desselben_passworts_sind_verschieden() {
        let hash1 = passwort_hashen("gleiches_passwort").unwrap();
        let hash2 = passwort_hashen("gleiches_passwort").unwrap();
        assert_ne!(hash1, hash2, "Salt muss pro Aufruf zufaellig sein");
    }

    #[test]
    fn leerer_hash_verifiziert_nie() {
        // OAuth-Demo-Benutzer speichern den leeren String als Hash
        assert!(!passwort_verifizieren("beliebig", ""));
        assert!(!passwort_verifizieren("", ""));
    }

    #[test]
    fn missgebildeter_hash_verifiziert_nie() {
        assert!(!passwort_verifizieren("passwort", "kein-phc-string"));
        assert!(!passwort_verifizieren("passwort", "$argon2id$kaputt"));
    }
}
