//! SQLite-Implementierung des TagRepository und der Tag-Abgleichslogik
//!
//! Tags entstehen lazy beim ersten Gebrauch durch irgendeinen Beitrag und
//! werden nie geloescht – verwaiste Tags bleiben bewusst bestehen.

use blogwerk_core::TagId;
use sqlx::SqliteConnection;

use crate::error::{DbError, DbResult};
use crate::models::TagRecord;
use crate::repository::TagRepository;
use crate::sqlite::pool::SqliteDb;

/// Gleicht Tag-Namen in Eingabereihenfolge mit der Datenbank ab.
///
/// Laeuft auf der Transaktion des Aufrufers, damit Beitrag und Tags atomar
/// geschrieben werden. Pro Name: exakter Lookup; bei Miss wird der Tag neu
/// angelegt. Verliert der INSERT ein Rennen gegen einen parallelen Schreiber
/// (UNIQUE-Verletzung auf dem Namen), wird der Lookup genau einmal wiederholt
/// und die ueberlebende Zeile verwendet.
///
/// Doppelte Namen in der Eingabe loesen auf denselben Datensatz auf und
/// erscheinen einmal pro Vorkommen im Ergebnis.
pub(crate) async fn tags_abgleichen(
    conn: &mut SqliteConnection,
    namen: &[String],
) -> DbResult<Vec<TagRecord>> {
    let mut tags = Vec::with_capacity(namen.len());

    for name in namen {
        if let Some(tag) = tag_nach_name(conn, name).await? {
            tags.push(tag);
            continue;
        }

        match sqlx::query("INSERT INTO tags (name) VALUES (?)")
            .bind(name)
            .execute(&mut *conn)
            .await
        {
            Ok(ergebnis) => tags.push(TagRecord {
                id: TagId(ergebnis.last_insert_rowid()),
                name: name.clone(),
            }),
            Err(e) if ist_unique_verletzung(&e) => {
                // Rennen verloren: ein paralleler Schreiber hat den Namen
                // angelegt. Einmaliger erneuter Lookup.
                let tag = tag_nach_name(conn, name).await?.ok_or_else(|| {
                    DbError::intern(format!("Tag '{name}' nach UNIQUE-Konflikt nicht auffindbar"))
                })?;
                tags.push(tag);
            }
            Err(e) => return Err(DbError::Sqlx(e)),
        }
    }

    Ok(tags)
}

async fn tag_nach_name(conn: &mut SqliteConnection, name: &str) -> DbResult<Option<TagRecord>> {
    use sqlx::Row as _;

    let row = sqlx::query("SELECT id, name FROM tags WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

    row.map(|r| {
        Ok(TagRecord {
            id: TagId(r.try_get("id")?),
            name: r.try_get("name")?,
        })
    })
    .transpose()
}

fn ist_unique_verletzung(e: &sqlx::Error) -> bool {
    let msg = e.to_string();
    msg.contains("UNIQUE") || msg.contains("unique")
}

impl TagRepository for SqliteDb {
    async fn get_or_create_many(&self, namen: &[String]) -> DbResult<Vec<TagRecord>> {
        let mut tx = self.pool.begin().await?;
        let tags = tags_abgleichen(&mut tx, namen).await?;
        tx.commit().await?;
        Ok(tags)
    }

    async fn get_by_name(&self, name: &str) -> DbResult<Option<TagRecord>> {
        let mut conn = self.pool.acquire().await?;
        tag_nach_name(&mut conn, name).await
    }
}
