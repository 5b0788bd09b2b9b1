use axum::{extract::DefaultBodyLimit, middleware::from_fn_with_state, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    docs::ApiDoc,
    error::AppError,
    middleware::cors::{cors_layer, reject_unknown_origin},
    router,
    state::AppState,
};

/// Largest accepted request body; media uploads carry base64 data URIs.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Assembles the full application: API routes, documentation and middleware.
///
/// Layers run outermost first: request tracing, the origin guard, CORS headers, then
/// the body size limit.
pub fn build_app(state: AppState) -> Router {
    router::router()
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(&state.allowed_origins))
        .layer(from_fn_with_state(state.clone(), reject_unknown_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
