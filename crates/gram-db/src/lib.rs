//! # gram-db
//!
//! PostgreSQL implementations of the repository traits in `gram-core`.
//!
//! - Connection pool management and embedded migrations
//! - Row models with SQLx `FromRow` derives
//! - Row to entity mappers
//! - Repositories that keep the denormalized counters in step with every
//!   insert and delete, inside the same transaction
//!
//! ```rust,ignore
//! use std::path::Path;
//! use gram_db::{create_pool, run_migrations, PgCreatorRepository, PoolConfig, DEFAULT_MIGRATIONS_DIR};
//!
//! let pool = create_pool(&PoolConfig::from(&app_config.database)).await?;
//! run_migrations(&pool, Path::new(DEFAULT_MIGRATIONS_DIR)).await?;
//! let creators = PgCreatorRepository::new(pool.clone());
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{
    create_pool, load_migrations, run_migrations, PgPool, PoolConfig, DEFAULT_MIGRATIONS_DIR,
};
pub use repositories::{
    PgCommentRepository, PgCreatorRepository, PgFollowRepository, PgImageRepository,
    PgLikeRepository,
};
