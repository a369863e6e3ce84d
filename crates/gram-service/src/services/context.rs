//! Service context - dependency container for services

use std::sync::Arc;

use gram_common::auth::JwtService;
use gram_core::traits::{
    CommentRepository, CreatorRepository, FollowRepository, ImageRepository, LikeRepository,
};
use gram_core::{Snowflake, SnowflakeGenerator};
use gram_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Everything a service needs for one request.
///
/// Cheap to clone: repositories and helpers sit behind `Arc`s and the pool is
/// itself a handle.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    creator_repo: Arc<dyn CreatorRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    image_repo: Arc<dyn ImageRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    like_repo: Arc<dyn LikeRepository>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn creator_repo(&self) -> &dyn CreatorRepository {
        self.creator_repo.as_ref()
    }

    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    pub fn image_repo(&self) -> &dyn ImageRepository {
        self.image_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }

    /// Round-trip to the database; used by the readiness probe
    pub async fn check_database(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for [`ServiceContext`]; every field is required
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    creator_repo: Option<Arc<dyn CreatorRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    image_repo: Option<Arc<dyn ImageRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn creator_repo(mut self, repo: Arc<dyn CreatorRepository>) -> Self {
        self.creator_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn image_repo(mut self, repo: Arc<dyn ImageRepository>) -> Self {
        self.image_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// # Errors
    /// Returns `ServiceError::Validation` naming the first missing dependency
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: required(self.pool, "pool")?,
            creator_repo: required(self.creator_repo, "creator_repo")?,
            follow_repo: required(self.follow_repo, "follow_repo")?,
            image_repo: required(self.image_repo, "image_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            like_repo: required(self.like_repo, "like_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            snowflake_generator: required(self.snowflake_generator, "snowflake_generator")?,
        })
    }
}
