//! Integration-Tests fuer AuthService und IdentityResolver (In-Memory SQLite)

use std::sync::Arc;

use blogwerk_auth::{AuthError, AuthService, IdentityResolver, TokenKonfig, TokenService};
use blogwerk_db::SqliteDb;

struct TestUmgebung {
    auth: AuthService<SqliteDb>,
    identitaet: IdentityResolver<SqliteDb>,
}

async fn umgebung() -> TestUmgebung {
    let db = Arc::new(
        SqliteDb::in_memory()
            .await
            .expect("In-Memory DB konnte nicht erstellt werden"),
    );

    let token_service = Arc::new(
        TokenService::neu(&TokenKonfig {
            geheimnis: "integrations-test-geheimnis".into(),
            ..TokenKonfig::default()
        })
        .expect("TokenService muss sich konstruieren lassen"),
    );

    TestUmgebung {
        auth: AuthService::neu(Arc::clone(&db), Arc::clone(&token_service)),
        identitaet: IdentityResolver::neu(db, token_service),
    }
}

#[tokio::test]
async fn registrieren_und_anmelden() {
    let umg = umgebung().await;

    let registriert = umg
        .auth
        .registrieren("alice@example.com", "Alice", "geheim123")
        .await
        .expect("Registrierung fehlgeschlagen");

    assert_eq!(registriert.benutzer.provider, "email");
    assert!(!registriert.token.is_empty());
    assert_ne!(
        registriert.benutzer.password_hash, "geheim123",
        "Passwort darf nie im Klartext landen"
    );

    let angemeldet = umg
        .auth
        .anmelden("alice@example.com", "geheim123")
        .await
        .expect("Anmeldung fehlgeschlagen");

    assert_eq!(angemeldet.benutzer.id, registriert.benutzer.id);
}

#[tokio::test]
async fn doppelte_email_wird_abgelehnt() {
    let umg = umgebung().await;

    umg.auth
        .registrieren("bob@example.com", "Bob", "geheim123")
        .await
        .unwrap();

    let fehler = umg
        .auth
        .registrieren("bob@example.com", "Anderer Bob", "geheim456")
        .await;

    assert!(matches!(fehler, Err(AuthError::EmailVergeben(_))));
}

#[tokio::test]
async fn falsches_passwort_und_unbekannte_email_gleicher_fehler() {
    let umg = umgebung().await;

    umg.auth
        .registrieren("carla@example.com", "Carla", "richtig123")
        .await
        .unwrap();

    let falsches_passwort = umg.auth.anmelden("carla@example.com", "falsch123").await;
    let unbekannte_email = umg.auth.anmelden("fremd@example.com", "richtig123").await;

    assert!(matches!(
        falsches_passwort,
        Err(AuthError::UngueltigeAnmeldedaten)
    ));
    assert!(matches!(
        unbekannte_email,
        Err(AuthError::UngueltigeAnmeldedaten)
    ));
}

#[tokio::test]
async fn oauth_demo_legt_einmal_an_und_verwendet_wieder() {
    let umg = umgebung().await;

    let erste = umg
        .auth
        .oauth_demo("google", "demo@example.com", "Demo")
        .await
        .unwrap();

    assert_eq!(erste.benutzer.provider, "google");
    assert_eq!(erste.benutzer.password_hash, "");

    let zweite = umg
        .auth
        .oauth_demo("google", "demo@example.com", "Demo")
        .await
        .unwrap();

    assert_eq!(zweite.benutzer.id, erste.benutzer.id, "kein zweiter Datensatz");
}

#[tokio::test]
async fn oauth_benutzer_kann_sich_nicht_mit_passwort_anmelden() {
    let umg = umgebung().await;

    umg.auth
        .oauth_demo("google", "nur-oauth@example.com", "Nur OAuth")
        .await
        .unwrap();

    // Leerer Hash verifiziert nie – auch nicht gegen das leere Passwort
    let fehler = umg.auth.anmelden("nur-oauth@example.com", "").await;
    assert!(matches!(fehler, Err(AuthError::UngueltigeAnmeldedaten)));
}

#[tokio::test]
async fn identitaet_aus_token_aufloesen() {
    let umg = umgebung().await;

    let anmeldung = umg
        .auth
        .registrieren("dora@example.com", "Dora", "geheim123")
        .await
        .unwrap();

    let aufgeloest = umg
        .identitaet
        .aufloesen(Some(&anmeldung.token))
        .await
        .unwrap()
        .expect("Token sollte zur Benutzerin aufloesen");

    assert_eq!(aufgeloest.id, anmeldung.benutzer.id);
}

#[tokio::test]
async fn fehlendes_oder_kaputtes_token_ist_keine_identitaet() {
    let umg = umgebung().await;

    let ohne = umg.identitaet.aufloesen(None).await.unwrap();
    assert!(ohne.is_none(), "anonymer Zugriff ist gueltig, kein Fehler");

    let kaputt = umg.identitaet.aufloesen(Some("kein.echtes.token")).await.unwrap();
    assert!(kaputt.is_none());
}

#[tokio::test]
async fn verlangen_ohne_identitaet_schlaegt_fehl() {
    let umg = umgebung().await;

    let fehler = umg.identitaet.verlangen(None).await;
    assert!(matches!(fehler, Err(AuthError::AnmeldungErforderlich)));

    let fehler = umg.identitaet.verlangen(Some("unsinn")).await;
    assert!(matches!(fehler, Err(AuthError::AnmeldungErforderlich)));
}

#[tokio::test]
async fn token_fremden_ursprungs_liefert_keine_identitaet() {
    let umg = umgebung().await;

    let anmeldung = umg
        .auth
        .registrieren("erik@example.com", "Erik", "geheim123")
        .await
        .unwrap();

    // Mit anderem Geheimnis signiertes Token fuer dieselbe Benutzer-ID
    let fremder_dienst = TokenService::neu(&TokenKonfig {
        geheimnis: "ein-anderes-geheimnis".into(),
        ..TokenKonfig::default()
    })
    .unwrap();
    let fremdes_token = fremder_dienst
        .ausstellen(anmeldung.benutzer.id, chrono::Utc::now())
        .unwrap();

    let aufgeloest = umg.identitaet.aufloesen(Some(&fremdes_token)).await.unwrap();
    assert!(aufgeloest.is_none());
}
