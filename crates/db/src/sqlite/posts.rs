//! SQLite-Implementierung des PostRepository
//!
//! Erstellen und Aktualisieren laufen in einer Transaktion zusammen mit dem
//! Tag-Abgleich, damit Beitrag, Tags und Verknuepfungen atomar landen.

use blogwerk_core::{PostId, TagId, UserId};
use chrono::Utc;

use crate::error::{DbError, DbResult};
use crate::models::{
    BeitragFilter, BeitragRecord, BeitragUpdate, BenutzerRecord, NeuerBeitrag, TagRecord,
};
use crate::repository::PostRepository;
use crate::sqlite::pool::SqliteDb;
use crate::sqlite::tags::tags_abgleichen;

const BEITRAG_SELECT: &str = "SELECT p.id, p.slug, p.title, p.excerpt, p.content, p.featured,
            p.read_time, p.created_at, p.updated_at,
            u.id AS autor_id, u.email AS autor_email, u.name AS autor_name,
            u.password_hash AS autor_password_hash, u.avatar AS autor_avatar,
            u.provider AS autor_provider, u.created_at AS autor_created_at
     FROM posts p
     JOIN users u ON u.id = p.author_id";

impl PostRepository for SqliteDb {
    async fn create(
        &self,
        data: NeuerBeitrag<'_>,
        tag_namen: &[String],
    ) -> DbResult<BeitragRecord> {
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        let mut tx = self.pool.begin().await?;

        let ergebnis = sqlx::query(
            "INSERT INTO posts
             (slug, title, excerpt, content, featured, read_time, created_at, updated_at, author_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(data.slug)
        .bind(data.title)
        .bind(data.excerpt)
        .bind(data.content)
        .bind(data.featured as i64)
        .bind(data.read_time)
        .bind(&now_str)
        .bind(&now_str)
        .bind(data.author_id.inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE") || msg.contains("unique") {
                DbError::Eindeutigkeit(format!("Slug '{}' bereits vergeben", data.slug))
            } else {
                DbError::Sqlx(e)
            }
        })?;

        let post_id = PostId(ergebnis.last_insert_rowid());

        let tags = tags_abgleichen(&mut tx, tag_namen).await?;
        for tag in &tags {
            // OR IGNORE: doppelte Namen in der Eingabe ergeben genau eine
            // Verknuepfungszeile (zusammengesetzter Primaerschluessel)
            sqlx::query("INSERT OR IGNORE INTO post_tags (post_id, tag_id) VALUES (?, ?)")
                .bind(post_id.inner())
                .bind(tag.id.inner())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.get_by_id(post_id)
            .await?
            .ok_or_else(|| DbError::intern("Beitrag nach Insert nicht auffindbar"))
    }

    async fn get_by_id(&self, id: PostId) -> DbResult<Option<BeitragRecord>> {
        let sql = format!("{BEITRAG_SELECT} WHERE p.id = ?");
        let row = sqlx::query(&sql)
            .bind(id.inner())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            None => Ok(None),
            Some(r) => {
                let mut beitrag = row_to_beitrag(&r)?;
                beitrag.tags = self.tags_fuer_beitrag(beitrag.id).await?;
                Ok(Some(beitrag))
            }
        }
    }

    async fn get_by_slug(&self, slug: &str) -> DbResult<Option<BeitragRecord>> {
        let sql = format!("{BEITRAG_SELECT} WHERE p.slug = ?");
        let row = sqlx::query(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            None => Ok(None),
            Some(r) => {
                let mut beitrag = row_to_beitrag(&r)?;
                beitrag.tags = self.tags_fuer_beitrag(beitrag.id).await?;
                Ok(Some(beitrag))
            }
        }
    }

    async fn slug_existiert(&self, slug: &str) -> DbResult<bool> {
        let row = sqlx::query("SELECT 1 FROM posts WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn list(&self, filter: BeitragFilter) -> DbResult<Vec<BeitragRecord>> {
        let mut bedingungen: Vec<&str> = Vec::new();
        if filter.featured.is_some() {
            bedingungen.push("p.featured = ?");
        }
        if filter.tag.is_some() {
            bedingungen.push(
                "EXISTS (SELECT 1 FROM post_tags pt JOIN tags t ON t.id = pt.tag_id
                         WHERE pt.post_id = p.id AND t.name = ?)",
            );
        }

        let mut sql = BEITRAG_SELECT.to_string();
        if !bedingungen.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&bedingungen.join(" AND "));
        }
        sql.push_str(" ORDER BY p.created_at DESC, p.id DESC");

        let mut q = sqlx::query(&sql);
        if let Some(featured) = filter.featured {
            q = q.bind(featured as i64);
        }
        if let Some(ref tag) = filter.tag {
            q = q.bind(tag);
        }

        let rows = q.fetch_all(&self.pool).await?;

        let mut beitraege = Vec::with_capacity(rows.len());
        for r in &rows {
            let mut beitrag = row_to_beitrag(r)?;
            beitrag.tags = self.tags_fuer_beitrag(beitrag.id).await?;
            beitraege.push(beitrag);
        }
        Ok(beitraege)
    }

    async fn update(
        &self,
        id: PostId,
        data: BeitragUpdate,
        tag_namen: Option<&[String]>,
    ) -> DbResult<BeitragRecord> {
        let mut tx = self.pool.begin().await?;

        // Dynamisches UPDATE – nur gesetzte Felder aendern, updated_at immer
        let mut sets: Vec<&str> = Vec::new();
        if data.slug.is_some() {
            sets.push("slug = ?");
        }
        if data.title.is_some() {
            sets.push("title = ?");
        }
        if data.excerpt.is_some() {
            sets.push("excerpt = ?");
        }
        if data.content.is_some() {
            sets.push("content = ?");
        }
        if data.featured.is_some() {
            sets.push("featured = ?");
        }
        if data.read_time.is_some() {
            sets.push("read_time = ?");
        }
        sets.push("updated_at = ?");

        let sql = format!("UPDATE posts SET {} WHERE id = ?", sets.join(", "));
        let mut q = sqlx::query(&sql);

        if let Some(ref v) = data.slug {
            q = q.bind(v);
        }
        if let Some(ref v) = data.title {
            q = q.bind(v);
        }
        if let Some(ref v) = data.excerpt {
            q = q.bind(v);
        }
        if let Some(ref v) = data.content {
            q = q.bind(v);
        }
        if let Some(v) = data.featured {
            q = q.bind(v as i64);
        }
        if let Some(ref v) = data.read_time {
            q = q.bind(v);
        }
        q = q.bind(Utc::now().to_rfc3339());
        q = q.bind(id.inner());

        let affected = q.execute(&mut *tx).await.map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE") || msg.contains("unique") {
                DbError::Eindeutigkeit(format!("Slug fuer Beitrag {id} bereits vergeben"))
            } else {
                DbError::Sqlx(e)
            }
        })?;

        if affected.rows_affected() == 0 {
            return Err(DbError::nicht_gefunden(format!("Beitrag {id}")));
        }

        if let Some(namen) = tag_namen {
            // Komplette Tag-Menge ersetzen; verwaiste Tags bleiben bestehen
            sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
                .bind(id.inner())
                .execute(&mut *tx)
                .await?;

            let tags = tags_abgleichen(&mut tx, namen).await?;
            for tag in &tags {
                sqlx::query("INSERT OR IGNORE INTO post_tags (post_id, tag_id) VALUES (?, ?)")
                    .bind(id.inner())
                    .bind(tag.id.inner())
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::intern("Beitrag nach Update nicht auffindbar"))
    }

    async fn delete(&self, id: PostId) -> DbResult<bool> {
        let affected = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id.inner())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

impl SqliteDb {
    /// Laedt die Tags eines Beitrags (deterministisch nach Tag-ID sortiert)
    async fn tags_fuer_beitrag(&self, id: PostId) -> DbResult<Vec<TagRecord>> {
        use sqlx::Row as _;

        let rows = sqlx::query(
            "SELECT t.id, t.name FROM tags t
             JOIN post_tags pt ON pt.tag_id = t.id
             WHERE pt.post_id = ?
             ORDER BY t.id",
        )
        .bind(id.inner())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| {
                Ok(TagRecord {
                    id: TagId(r.try_get("id")?),
                    name: r.try_get("name")?,
                })
            })
            .collect()
    }
}

fn row_to_beitrag(row: &sqlx::sqlite::SqliteRow) -> DbResult<BeitragRecord> {
    use sqlx::Row as _;

    let created_at_str: String = row.try_get("created_at")?;
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| DbError::intern(format!("Ungueltige created_at '{created_at_str}': {e}")))?
        .with_timezone(&Utc);

    let updated_at_str: String = row.try_get("updated_at")?;
    let updated_at = chrono::DateTime::parse_from_rfc3339(&updated_at_str)
        .map_err(|e| DbError::intern(format!("Ungueltige updated_at '{updated_at_str}': {e}")))?
        .with_timezone(&Utc);

    let autor_created_str: String = row.try_get("autor_created_at")?;
    let autor_created = chrono::DateTime::parse_from_rfc3339(&autor_created_str)
        .map_err(|e| DbError::intern(format!("Ungueltige created_at '{autor_created_str}': {e}")))?
        .with_timezone(&Utc);

    let featured: i64 = row.try_get("featured")?;

    Ok(BeitragRecord {
        id: PostId(row.try_get("id")?),
        slug: row.try_get("slug")?,
        title: row.try_get("title")?,
        excerpt: row.try_get("excerpt")?,
        content: row.try_get("content")?,
        featured: featured != 0,
        read_time: row.try_get("read_time")?,
        created_at,
        updated_at,
        author: BenutzerRecord {
            id: UserId(row.try_get("autor_id")?),
            email: row.try_get("autor_email")?,
            name: row.try_get("autor_name")?,
            password_hash: row.try_get("autor_password_hash")?,
            avatar: row.try_get("autor_avatar")?,
            provider: row.try_get("autor_provider")?,
            created_at: autor_created,
        },
        tags: Vec::new(),
    })
}
