//! PostgreSQL implementation of ImageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gram_core::entities::Image;
use gram_core::error::DomainError;
use gram_core::rules::image_deltas;
use gram_core::traits::{ImageFilter, ImageRepository, RepoResult};
use gram_core::value_objects::{Snowflake, WriteKind};

use crate::mappers::ImageInsert;
use crate::models::ImageModel;

use super::counters::apply_deltas;
use super::error::{map_db_error, map_foreign_key_violation};

#[derive(Clone)]
pub struct PgImageRepository {
    pool: PgPool,
}

impl PgImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Image>> {
        let result = sqlx::query_as::<_, ImageModel>(
            r"
            SELECT id, creator_id, file, caption, tags, like_count, created_at, updated_at
            FROM images
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Image::from))
    }

    #[instrument(skip(self))]
    async fn find_feed(&self, follower_id: Snowflake) -> RepoResult<Vec<Image>> {
        let results = sqlx::query_as::<_, ImageModel>(
            r"
            SELECT i.id, i.creator_id, i.file, i.caption, i.tags, i.like_count,
                   i.created_at, i.updated_at
            FROM images i
            JOIN creator_followers f ON f.creator_id = i.creator_id
            WHERE f.follower_id = $1
            ORDER BY i.created_at DESC, i.id DESC
            ",
        )
        .bind(follower_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Image::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, filter: &ImageFilter) -> RepoResult<Vec<Image>> {
        let results = sqlx::query_as::<_, ImageModel>(
            r"
            SELECT id, creator_id, file, caption, tags, like_count, created_at, updated_at
            FROM images
            WHERE ($1::BIGINT IS NULL OR id = $1)
              AND ($2::TEXT IS NULL OR caption = $2)
              AND ($3::INTEGER IS NULL OR like_count = $3)
              AND ($4::TEXT IS NULL OR tags = $4)
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(filter.id.map(Snowflake::into_inner))
        .bind(filter.caption.as_deref())
        .bind(filter.like_count)
        .bind(filter.tags.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Image::from).collect())
    }

    #[instrument(skip(self, image), fields(image_id = %image.id))]
    async fn create(&self, image: &Image) -> RepoResult<()> {
        let row = ImageInsert::new(image);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO images (id, creator_id, file, caption, tags, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(row.id)
        .bind(row.creator_id)
        .bind(row.file)
        .bind(row.caption)
        .bind(row.tags)
        .bind(image.created_at)
        .bind(image.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_foreign_key_violation(e, |_| DomainError::CreatorNotFound(image.creator_id)))?;

        apply_deltas(&mut *tx, &image_deltas(WriteKind::Create, image.creator_id))
            .await
            .map_err(map_db_error)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, image), fields(image_id = %image.id))]
    async fn update(&self, image: &Image) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE images
            SET file = $2, caption = $3, tags = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(image.id.into_inner())
        .bind(&image.file)
        .bind(&image.caption)
        .bind(&image.tags)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ImageNotFound(image.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let owner = sqlx::query_scalar::<_, i64>("DELETE FROM images WHERE id = $1 RETURNING creator_id")
            .bind(id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .map(Snowflake::new)
            .ok_or(DomainError::ImageNotFound(id))?;

        apply_deltas(&mut *tx, &image_deltas(WriteKind::Delete, owner))
            .await
            .map_err(map_db_error)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
