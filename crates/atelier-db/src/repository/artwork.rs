//! # Artwork Repository
//!
//! Database operations for the catalog.
//!
//! ## Storage Shape
//! ```text
//! Artwork (domain)                 artworks (table)
//! ─────────────────                ─────────────────────────────
//! description.en           ──►     description_en
//! description.nl           ──►     description_nl
//! detail_images: Vec       ──►     detail_images  (JSON array text)
//! catalog order            ──►     position
//! ```
//!
//! The catalog is always read whole and in `position` order: filtering
//! happens in memory, never in SQL.

use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use atelier_core::{Artwork, LocalizedText};

const SELECT_COLUMNS: &str = r#"
    SELECT
        id, title, artist,
        description_en, description_nl,
        price_cents, sold, not_for_sale,
        main_image, detail_images,
        dimensions, material
    FROM artworks
"#;

/// One row of the `artworks` table.
#[derive(Debug, FromRow)]
struct ArtworkRow {
    id: i64,
    title: String,
    artist: String,
    description_en: String,
    description_nl: String,
    price_cents: Option<i64>,
    sold: bool,
    not_for_sale: bool,
    main_image: String,
    detail_images: String,
    dimensions: String,
    material: String,
}

impl TryFrom<ArtworkRow> for Artwork {
    type Error = DbError;

    fn try_from(row: ArtworkRow) -> Result<Self, Self::Error> {
        let detail_images: Vec<String> =
            serde_json::from_str(&row.detail_images).map_err(|e| DbError::Corrupt {
                entity: "Artwork".to_string(),
                id: row.id.to_string(),
                column: "detail_images".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Artwork {
            id: row.id,
            title: row.title,
            artist: row.artist,
            description: LocalizedText {
                en: row.description_en,
                nl: row.description_nl,
            },
            price_cents: row.price_cents,
            sold: row.sold,
            not_for_sale: row.not_for_sale,
            main_image: row.main_image,
            detail_images,
            dimensions: row.dimensions,
            material: row.material,
        })
    }
}

/// Repository for catalog database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ArtworkRepository::new(pool);
///
/// let catalog = repo.list().await?;
/// let artwork = repo.get_by_id(3).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ArtworkRepository {
    pool: SqlitePool,
}

impl ArtworkRepository {
    /// Creates a new ArtworkRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ArtworkRepository { pool }
    }

    /// The whole catalog in display order.
    pub async fn list(&self) -> DbResult<Vec<Artwork>> {
        let rows: Vec<ArtworkRow> =
            sqlx::query_as(&format!("{} ORDER BY position, id", SELECT_COLUMNS))
                .fetch_all(&self.pool)
                .await?;

        debug!(count = rows.len(), "Loaded catalog from database");
        rows.into_iter().map(Artwork::try_from).collect()
    }

    /// Gets an artwork by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Artwork))` - Artwork found
    /// * `Ok(None)` - No artwork with this id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Artwork>> {
        let row: Option<ArtworkRow> = sqlx::query_as(&format!("{} WHERE id = ?1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Artwork::try_from).transpose()
    }

    /// Adds one artwork at the given catalog position.
    pub async fn insert(&self, artwork: &Artwork, position: i64) -> DbResult<()> {
        debug!(id = artwork.id, position, "Inserting artwork");
        insert_with(&self.pool, artwork, position).await
    }

    /// Replaces the whole catalog in one transaction, keeping slice order.
    ///
    /// Readers see either the old catalog or the new one, never a mix.
    pub async fn replace_all(&self, artworks: &[Artwork]) -> DbResult<()> {
        debug!(count = artworks.len(), "Replacing catalog");

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM artworks").execute(&mut *tx).await?;

        for (position, artwork) in artworks.iter().enumerate() {
            insert_with(&mut *tx, artwork, position as i64).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Number of catalogued works.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artworks")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

async fn insert_with<'e, E>(executor: E, artwork: &Artwork, position: i64) -> DbResult<()>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let detail_images = serde_json::to_string(&artwork.detail_images)
        .map_err(|e| DbError::Internal(e.to_string()))?;

    sqlx::query(
        r#"
        INSERT INTO artworks (
            id, position, title, artist,
            description_en, description_nl,
            price_cents, sold, not_for_sale,
            main_image, detail_images,
            dimensions, material
        ) VALUES (
            ?1, ?2, ?3, ?4,
            ?5, ?6,
            ?7, ?8, ?9,
            ?10, ?11,
            ?12, ?13
        )
        "#,
    )
    .bind(artwork.id)
    .bind(position)
    .bind(&artwork.title)
    .bind(&artwork.artist)
    .bind(&artwork.description.en)
    .bind(&artwork.description.nl)
    .bind(artwork.price_cents)
    .bind(artwork.sold)
    .bind(artwork.not_for_sale)
    .bind(&artwork.main_image)
    .bind(detail_images)
    .bind(&artwork.dimensions)
    .bind(&artwork.material)
    .execute(executor)
    .await?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use atelier_core::catalog::fallback_catalog;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_replace_all_round_trips_catalog_order() {
        let db = db().await;
        let mut catalog = fallback_catalog();
        catalog.reverse();

        db.artworks().replace_all(&catalog).await.unwrap();

        assert_eq!(db.artworks().count().await.unwrap(), 3);
        assert_eq!(db.artworks().list().await.unwrap(), catalog);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = db().await;
        db.artworks().replace_all(&fallback_catalog()).await.unwrap();

        let artwork = db.artworks().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(artwork.detail_images.len(), 2);
        assert_eq!(artwork.price_cents, Some(15000));

        let unpriced = db.artworks().get_by_id(2).await.unwrap().unwrap();
        assert_eq!(unpriced.price_cents, None);
        assert!(unpriced.not_for_sale);

        assert!(db.artworks().get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let db = db().await;
        let catalog = fallback_catalog();
        db.artworks().insert(&catalog[0], 0).await.unwrap();

        let err = db.artworks().insert(&catalog[0], 1).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_negative_price_violates_check() {
        let db = db().await;
        let mut artwork = fallback_catalog().remove(0);
        artwork.price_cents = Some(-100);

        let err = db.artworks().insert(&artwork, 0).await.unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_failed_replace_keeps_previous_catalog() {
        let db = db().await;
        let catalog = fallback_catalog();
        db.artworks().replace_all(&catalog).await.unwrap();

        let mut broken = fallback_catalog();
        broken[1].id = broken[0].id;
        assert!(db.artworks().replace_all(&broken).await.is_err());

        assert_eq!(db.artworks().list().await.unwrap(), catalog);
    }

    #[tokio::test]
    async fn test_corrupt_detail_images() {
        let db = db().await;
        db.artworks().replace_all(&fallback_catalog()).await.unwrap();
        sqlx::query("UPDATE artworks SET detail_images = 'not json' WHERE id = 3")
            .execute(db.pool())
            .await
            .unwrap();

        let err = db.artworks().list().await.unwrap_err();
        assert!(matches!(err, DbError::Corrupt { .. }));
    }
}
