//! Connection pool and schema migrations

mod postgres;

pub use postgres::{
    create_pool, load_migrations, run_migrations, PoolConfig, DEFAULT_MIGRATIONS_DIR,
};

pub use sqlx::postgres::PgPool;
