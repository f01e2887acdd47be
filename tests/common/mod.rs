use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use sqlx::SqlitePool;
use storefront::{
    AppState, app,
    config::DatabaseConfig,
    database,
    models::Product,
    queries::product_queries,
};
use tower::ServiceExt;

pub async fn memory_pool() -> SqlitePool {
    database::create_pool(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    })
    .await
    .expect("in-memory database")
}

pub fn product(id: &str, name: &str, price: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        price: price.to_string(),
        image: format!("https://images.example.com/{}.jpg", id),
        category: "Testing".to_string(),
    }
}

pub async fn app_with(products: &[Product]) -> (Router, SqlitePool) {
    let pool = memory_pool().await;
    product_queries::insert_many(&pool, products)
        .await
        .expect("insert products");
    (app::router(AppState { db: pool.clone() }), pool)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    session: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(session) = session {
        builder = builder.header("x-session-id", session);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}
