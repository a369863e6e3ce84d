//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gram_core::entities::Comment;
use gram_core::error::DomainError;
use gram_core::traits::{CommentRepository, RepoResult};
use gram_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::{map_db_error, map_foreign_key_violation};

#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, image_id, creator_id, message, created_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_image(&self, image_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, image_id, creator_id, message, created_at
            FROM comments
            WHERE image_id = $1
            ORDER BY created_at, id
            ",
        )
        .bind(image_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, image_ids), fields(images = image_ids.len()))]
    async fn find_by_images(&self, image_ids: &[Snowflake]) -> RepoResult<Vec<Comment>> {
        if image_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = image_ids.iter().map(|id| id.into_inner()).collect();
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, image_id, creator_id, message, created_at
            FROM comments
            WHERE image_id = ANY($1)
            ORDER BY created_at, id
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, image_id, creator_id, message, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.image_id.into_inner())
        .bind(comment.creator_id.into_inner())
        .bind(&comment.message)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, |_| DomainError::ImageNotFound(comment.image_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        Ok(())
    }
}
