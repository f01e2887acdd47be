use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, StatusCode},
};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::AppConfig,
    database,
    error::{AppError, Result},
    routes,
    services::catalog_service,
    utils::extractors::SESSION_HEADER,
};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

/// Routes with state attached and no outer layers.
pub fn router(state: AppState) -> Router {
    routes::create_router().with_state(state)
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    catalog_service::seed_if_empty(&pool).await?;

    let state = AppState { db: pool };

    let mut app = router(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.server.request_timeout,
        ))
        .layer(TraceLayer::new_for_http());

    if !config.cors.allowed_origins.is_empty() {
        let allowed_origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                http::header::CONTENT_TYPE,
                HeaderName::from_static(SESSION_HEADER),
            ])
            .allow_origin(allowed_origins);

        app = app.layer(cors);
    }

    Ok(app)
}
