//! PostgreSQL implementation of CreatorRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use gram_core::entities::Creator;
use gram_core::error::DomainError;
use gram_core::rules::creator_removal_deltas;
use gram_core::traits::{CreatorFilter, CreatorRepository, RepoResult};
use gram_core::value_objects::Snowflake;

use crate::mappers::CreatorInsert;
use crate::models::CreatorModel;

use super::counters::apply_deltas;
use super::error::{map_db_error, map_unique_violation};

#[derive(Clone)]
pub struct PgCreatorRepository {
    pool: PgPool,
}

impl PgCreatorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn ids(rows: Vec<i64>) -> Vec<Snowflake> {
    rows.into_iter().map(Snowflake::new).collect()
}

/// Split removed `(creator_id, follower_id)` edges of `id` into its
/// followers and the creators it followed. A self-follow lands in both.
fn split_edges(id: Snowflake, edges: &[(i64, i64)]) -> (Vec<Snowflake>, Vec<Snowflake>) {
    let raw = id.into_inner();
    let followers = edges
        .iter()
        .filter(|(creator, _)| *creator == raw)
        .map(|&(_, follower)| Snowflake::new(follower))
        .collect();
    let following = edges
        .iter()
        .filter(|(_, follower)| *follower == raw)
        .map(|&(creator, _)| Snowflake::new(creator))
        .collect();
    (followers, following)
}

#[async_trait]
impl CreatorRepository for PgCreatorRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Creator>> {
        let result = sqlx::query_as::<_, CreatorModel>(
            r"
            SELECT id, username, name, bio, website, profile_image,
                   post_count, followers_count, following_count, created_at, updated_at
            FROM creators
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Creator::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Creator>> {
        let result = sqlx::query_as::<_, CreatorModel>(
            r"
            SELECT id, username, name, bio, website, profile_image,
                   post_count, followers_count, following_count, created_at, updated_at
            FROM creators
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Creator::from))
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM creators WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Creator>> {
        let results = sqlx::query_as::<_, CreatorModel>(
            r"
            SELECT id, username, name, bio, website, profile_image,
                   post_count, followers_count, following_count, created_at, updated_at
            FROM creators
            ORDER BY created_at, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Creator::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, filter: &CreatorFilter) -> RepoResult<Vec<Creator>> {
        let results = sqlx::query_as::<_, CreatorModel>(
            r"
            SELECT id, username, name, bio, website, profile_image,
                   post_count, followers_count, following_count, created_at, updated_at
            FROM creators
            WHERE ($1::BIGINT IS NULL OR id = $1)
              AND ($2::TEXT IS NULL OR username = $2)
              AND ($3::TEXT IS NULL OR name = $3)
              AND ($4::INTEGER IS NULL OR post_count = $4)
              AND ($5::INTEGER IS NULL OR followers_count = $5)
              AND ($6::INTEGER IS NULL OR following_count = $6)
            ORDER BY created_at, id
            ",
        )
        .bind(filter.id.map(Snowflake::into_inner))
        .bind(filter.username.as_deref())
        .bind(filter.name.as_deref())
        .bind(filter.post_count)
        .bind(filter.followers_count)
        .bind(filter.following_count)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Creator::from).collect())
    }

    #[instrument(skip(self, creator, password_hash), fields(creator_id = %creator.id))]
    async fn create(&self, creator: &Creator, password_hash: &str) -> RepoResult<()> {
        let row = CreatorInsert::new(creator, password_hash);

        sqlx::query(
            r"
            INSERT INTO creators (id, username, password_hash, name, bio, website, profile_image,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(row.id)
        .bind(row.username)
        .bind(row.password_hash)
        .bind(row.name)
        .bind(row.bio)
        .bind(row.website)
        .bind(row.profile_image)
        .bind(creator.created_at)
        .bind(creator.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, creator, password_hash), fields(creator_id = %creator.id))]
    async fn update(&self, creator: &Creator, password_hash: Option<&str>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE creators
            SET username = $2, name = $3, bio = $4, website = $5, profile_image = $6,
                password_hash = COALESCE($7, password_hash),
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(creator.id.into_inner())
        .bind(&creator.username)
        .bind(&creator.name)
        .bind(&creator.bio)
        .bind(&creator.website)
        .bind(creator.profile_image.as_deref())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CreatorNotFound(creator.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM creators WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the row so no new edge or like can reference it mid-delete.
        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM creators WHERE id = $1 FOR UPDATE")
            .bind(id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;
        if exists.is_none() {
            return Err(DomainError::CreatorNotFound(id));
        }

        // Delete the counted rows explicitly so the adjustments come from the
        // rows this transaction removed. A concurrent unlike or unfollow holds
        // the row lock until it commits, after which the row is skipped here.
        let liked_images = sqlx::query_scalar::<_, i64>(
            "DELETE FROM likes WHERE creator_id = $1 RETURNING image_id",
        )
        .bind(id.into_inner())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let edges = sqlx::query_as::<_, (i64, i64)>(
            r"
            DELETE FROM creator_followers
            WHERE creator_id = $1 OR follower_id = $1
            RETURNING creator_id, follower_id
            ",
        )
        .bind(id.into_inner())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let (followers, following) = split_edges(id, &edges);

        let deltas = creator_removal_deltas(id, &followers, &following, &ids(liked_images));
        apply_deltas(&mut *tx, &deltas).await.map_err(map_db_error)?;

        // Images and comments go with it via ON DELETE CASCADE.
        sqlx::query("DELETE FROM creators WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        info!(creator_id = %id, adjusted = deltas.len(), "Creator removed");
        Ok(())
    }
}
