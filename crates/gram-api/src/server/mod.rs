//! Server setup and initialization

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use gram_common::{AppConfig, AppError, JwtService};
use gram_core::SnowflakeGenerator;
use gram_db::{
    create_pool, run_migrations, PgCommentRepository, PgCreatorRepository, PgFollowRepository,
    PgImageRepository, PgLikeRepository, PoolConfig, DEFAULT_MIGRATIONS_DIR,
};
use gram_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the application: routes, middleware, state
pub fn create_app(state: AppState) -> Router {
    let cors = state.config().cors.clone();
    let is_production = state.config().app.env.is_production();

    apply_middleware(create_router(), &cors, is_production).with_state(state)
}

/// Connect to the database, run migrations if enabled, and wire services
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        let dir = config
            .database
            .migrations_dir
            .as_deref()
            .unwrap_or(DEFAULT_MIGRATIONS_DIR);
        run_migrations(&pool, Path::new(dir))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    let snowflake_generator = SnowflakeGenerator::new(config.snowflake.worker_id)
        .map_err(|e| AppError::Config(e.to_string()))?;

    let service_context = ServiceContextBuilder::new()
        .creator_repo(Arc::new(PgCreatorRepository::new(pool.clone())))
        .follow_repo(Arc::new(PgFollowRepository::new(pool.clone())))
        .image_repo(Arc::new(PgImageRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .like_repo(Arc::new(PgLikeRepository::new(pool.clone())))
        .pool(pool)
        .jwt_service(jwt_service)
        .snowflake_generator(Arc::new(snowflake_generator))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve until the process is stopped
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    run_server(create_app(state), &addr).await
}
