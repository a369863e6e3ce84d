//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gram_core::entities::Like;
use gram_core::error::DomainError;
use gram_core::rules::like_deltas;
use gram_core::traits::{LikeRepository, RepoResult};
use gram_core::value_objects::{Snowflake, WriteKind};

use crate::models::LikeModel;

use super::counters::apply_deltas;
use super::error::{map_db_error, map_foreign_key_violation};

/// Postgres' default name for the `creator_id` foreign key
const CREATOR_FKEY: &str = "likes_creator_id_fkey";

#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn find_by_image(&self, image_id: Snowflake) -> RepoResult<Vec<Like>> {
        let results = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT image_id, creator_id, created_at
            FROM likes
            WHERE image_id = $1
            ORDER BY created_at
            ",
        )
        .bind(image_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Like::from).collect())
    }

    #[instrument(skip(self, like), fields(image_id = %like.image_id, creator_id = %like.creator_id))]
    async fn create(&self, like: &Like) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query(
            r"
            INSERT INTO likes (image_id, creator_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (image_id, creator_id) DO NOTHING
            ",
        )
        .bind(like.image_id.into_inner())
        .bind(like.creator_id.into_inner())
        .bind(like.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |constraint| {
                if constraint == Some(CREATOR_FKEY) {
                    DomainError::CreatorNotFound(like.creator_id)
                } else {
                    DomainError::ImageNotFound(like.image_id)
                }
            })
        })?
        .rows_affected()
            == 1;

        if !inserted {
            return Err(DomainError::LikeAlreadyExists);
        }

        apply_deltas(&mut *tx, &like_deltas(WriteKind::Create, like.image_id))
            .await
            .map_err(map_db_error)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, image_id: Snowflake, creator_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM likes WHERE image_id = $1 AND creator_id = $2")
            .bind(image_id.into_inner())
            .bind(creator_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LikeNotFound(image_id));
        }

        apply_deltas(&mut *tx, &like_deltas(WriteKind::Delete, image_id))
            .await
            .map_err(map_db_error)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
