//! Integration-Tests fuer TagRepository und den Tag-Abgleich (In-Memory SQLite)

use blogwerk_db::{SqliteDb, TagRepository};

async fn db() -> SqliteDb {
    SqliteDb::in_memory()
        .await
        .expect("In-Memory DB konnte nicht erstellt werden")
}

fn namen(liste: &[&str]) -> Vec<String> {
    liste.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn tags_werden_lazy_angelegt() {
    let db = db().await;

    let tags = db
        .get_or_create_many(&namen(&["rust", "backend"]))
        .await
        .expect("Tag-Abgleich fehlgeschlagen");

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].name, "rust");
    assert_eq!(tags[1].name, "backend");

    let geladen = db
        .get_by_name("rust")
        .await
        .unwrap()
        .expect("Tag 'rust' sollte existieren");
    assert_eq!(geladen.id, tags[0].id);
}

#[tokio::test]
async fn abgleich_ist_idempotent() {
    let db = db().await;

    let erste = db.get_or_create_many(&namen(&["X", "Y"])).await.unwrap();
    let zweite = db.get_or_create_many(&namen(&["X", "Y"])).await.unwrap();

    // Zweiter Durchlauf liefert dieselben Identitaeten, keine neuen Zeilen
    assert_eq!(erste[0].id, zweite[0].id);
    assert_eq!(erste[1].id, zweite[1].id);
}

#[tokio::test]
async fn doppelte_namen_in_einer_eingabe() {
    let db = db().await;

    let tags = db
        .get_or_create_many(&namen(&["rust", "rust", "web"]))
        .await
        .unwrap();

    // Ein Eintrag pro Vorkommen, aber dieselbe Identitaet
    assert_eq!(tags.len(), 3);
    assert_eq!(tags[0].id, tags[1].id);
    assert_ne!(tags[0].id, tags[2].id);
}

#[tokio::test]
async fn tag_namen_sind_case_sensitiv() {
    let db = db().await;

    let tags = db.get_or_create_many(&namen(&["Rust", "rust"])).await.unwrap();

    // Keine Normalisierung: unterschiedliche Schreibweisen sind
    // unterschiedliche Tags
    assert_ne!(tags[0].id, tags[1].id);
}

#[tokio::test]
async fn unbekannter_name_liefert_none() {
    let db = db().await;
    let ergebnis = db.get_by_name("gibt-es-nicht").await.unwrap();
    assert!(ergebnis.is_none());
}

#[tokio::test]
async fn leere_eingabe_liefert_leeres_ergebnis() {
    let db = db().await;
    let tags = db.get_or_create_many(&[]).await.unwrap();
    assert!(tags.is_empty());
}
