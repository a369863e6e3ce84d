//! PostgreSQL implementation of FollowRepository
//!
//! Edges live in `creator_followers(creator_id, follower_id)`; the primary
//! key makes a second follow of the same pair a no-op.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use gram_core::entities::Creator;
use gram_core::error::DomainError;
use gram_core::rules::follow_deltas;
use gram_core::traits::{FollowRepository, RepoResult};
use gram_core::value_objects::{Snowflake, WriteKind};

use crate::models::CreatorModel;

use super::counters::apply_deltas;
use super::error::{map_db_error, map_foreign_key_violation};

/// Postgres' default name for the `follower_id` foreign key
const FOLLOWER_FKEY: &str = "creator_followers_follower_id_fkey";

#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn follow(&self, creator_id: Snowflake, follower_id: Snowflake) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query(
            r"
            INSERT INTO creator_followers (creator_id, follower_id)
            VALUES ($1, $2)
            ON CONFLICT (creator_id, follower_id) DO NOTHING
            ",
        )
        .bind(creator_id.into_inner())
        .bind(follower_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |constraint| {
                if constraint == Some(FOLLOWER_FKEY) {
                    DomainError::CreatorNotFound(follower_id)
                } else {
                    DomainError::CreatorNotFound(creator_id)
                }
            })
        })?
        .rows_affected()
            == 1;

        if !inserted {
            debug!("Already following");
            return Ok(false);
        }

        apply_deltas(&mut *tx, &follow_deltas(WriteKind::Create, creator_id, follower_id))
            .await
            .map_err(map_db_error)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn unfollow(&self, creator_id: Snowflake, follower_id: Snowflake) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query("DELETE FROM creator_followers WHERE creator_id = $1 AND follower_id = $2")
            .bind(creator_id.into_inner())
            .bind(follower_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected()
            == 1;

        if !removed {
            debug!("Was not following");
            return Ok(false);
        }

        apply_deltas(&mut *tx, &follow_deltas(WriteKind::Delete, creator_id, follower_id))
            .await
            .map_err(map_db_error)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn find_followers(&self, creator_id: Snowflake) -> RepoResult<Vec<Creator>> {
        let results = sqlx::query_as::<_, CreatorModel>(
            r"
            SELECT c.id, c.username, c.name, c.bio, c.website, c.profile_image,
                   c.post_count, c.followers_count, c.following_count, c.created_at, c.updated_at
            FROM creator_followers f
            JOIN creators c ON c.id = f.follower_id
            WHERE f.creator_id = $1
            ORDER BY f.created_at, c.id
            ",
        )
        .bind(creator_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Creator::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_following(&self, follower_id: Snowflake) -> RepoResult<Vec<Creator>> {
        let results = sqlx::query_as::<_, CreatorModel>(
            r"
            SELECT c.id, c.username, c.name, c.bio, c.website, c.profile_image,
                   c.post_count, c.followers_count, c.following_count, c.created_at, c.updated_at
            FROM creator_followers f
            JOIN creators c ON c.id = f.creator_id
            WHERE f.follower_id = $1
            ORDER BY f.created_at, c.id
            ",
        )
        .bind(follower_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Creator::from).collect())
    }
}
