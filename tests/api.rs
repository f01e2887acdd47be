mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use common::{app_with, product, send};
use serde_json::{Value, json};
use storefront::services::catalog_service;
use tower::ServiceExt;

#[tokio::test]
async fn checkout_end_to_end() {
    let (app, _pool) = app_with(&[product("prod-1", "Walnut Desk", "100.00")]).await;

    let (status, item) = send(
        &app,
        Method::POST,
        "/api/cart",
        None,
        Some(json!({ "productId": "prod-1", "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["productId"], "prod-1");
    assert_eq!(item["quantity"], 2);

    let (status, cart) = send(&app, Method::GET, "/api/cart", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["total"], "200.00");
    assert_eq!(cart["items"][0]["product"]["name"], "Walnut Desk");

    let (status, receipt) = send(
        &app,
        Method::POST,
        "/api/checkout",
        None,
        Some(json!({ "customerName": "Jane Doe", "customerEmail": "jane@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["total"], "200.00");
    assert_eq!(receipt["customerName"], "Jane Doe");
    assert_eq!(
        receipt["items"],
        json!([{ "productName": "Walnut Desk", "quantity": 2, "price": "200.00" }])
    );
    let id = receipt["id"].as_str().unwrap();
    assert_eq!(
        receipt["orderNumber"],
        id.split('-').next().unwrap().to_uppercase()
    );
    assert!(receipt["timestamp"].as_str().unwrap().ends_with('Z'));

    let (_, cart) = send(&app, Method::GET, "/api/cart", None, None).await;
    assert_eq!(cart, json!({ "items": [], "total": "0.00" }));

    let (status, orders) = send(&app, Method::GET, "/api/orders", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["id"], id);
    assert_eq!(orders[0]["total"], "200.00");

    let lines: Value = serde_json::from_str(orders[0]["items"].as_str().unwrap()).unwrap();
    assert_eq!(
        lines,
        json!([{ "productId": "prod-1", "productName": "Walnut Desk", "quantity": 2, "price": "100.00" }])
    );
}

#[tokio::test]
async fn products_are_listed_and_fetched() {
    let (app, pool) = app_with(&[]).await;
    catalog_service::seed_if_empty(&pool).await.unwrap();

    let (status, products) = send(&app, Method::GET, "/api/products", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products.as_array().unwrap().len(), 10);

    let (status, product) = send(&app, Method::GET, "/api/products/prod-10", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["price"], "2199.99");
    assert_eq!(product["category"], "Display");

    let (status, body) = send(&app, Method::GET, "/api/products/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn cart_add_rejects_bad_input() {
    let (app, _pool) = app_with(&[product("prod-1", "Lamp", "10.00")]).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        None,
        Some(json!({ "productId": "prod-1", "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "quantity");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/cart",
        None,
        Some(json!({ "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/cart",
        None,
        Some(json!({ "productId": "ghost", "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/cart",
        None,
        Some(json!({ "productId": " prod-1", "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/cart")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (_, cart) = send(&app, Method::GET, "/api/cart", None, None).await;
    assert_eq!(cart["items"], json!([]));
}

#[tokio::test]
async fn cart_update_and_delete() {
    let (app, _pool) = app_with(&[product("prod-1", "Lamp", "10.00")]).await;

    let body = json!({ "productId": "prod-1", "quantity": 1 });
    send(&app, Method::POST, "/api/cart", None, Some(body.clone())).await;
    let (_, item) = send(&app, Method::POST, "/api/cart", None, Some(body)).await;
    assert_eq!(item["quantity"], 2);
    let id = item["id"].as_str().unwrap().to_string();

    let uri = format!("/api/cart/{}", id);

    let (status, _) = send(&app, Method::PATCH, &uri, None, Some(json!({ "quantity": 0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PATCH, &uri, None, Some(json!({ "quantity": "many" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = send(&app, Method::PATCH, &uri, None, Some(json!({ "quantity": 7 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["quantity"], 7);

    let (_, cart) = send(&app, Method::GET, "/api/cart", None, None).await;
    assert_eq!(cart["total"], "70.00");

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/cart/missing",
        None,
        Some(json!({ "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn checkout_failures_are_bad_requests() {
    let (app, _pool) = app_with(&[product("prod-1", "Lamp", "10.00")]).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/checkout",
        None,
        Some(json!({ "customerName": "Jane Doe", "customerEmail": "jane@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cart is empty");

    send(
        &app,
        Method::POST,
        "/api/cart",
        None,
        Some(json!({ "productId": "prod-1" })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/checkout",
        None,
        Some(json!({ "customerName": "J", "customerEmail": "jane" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"].as_array().unwrap().len(), 2);

    let (_, orders) = send(&app, Method::GET, "/api/orders", None, None).await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn wishlist_add_is_idempotent() {
    let (app, _pool) = app_with(&[
        product("prod-1", "Lamp", "10.00"),
        product("prod-2", "Chair", "45.50"),
    ])
    .await;

    let (status, first) = send(
        &app,
        Method::POST,
        "/api/wishlist",
        None,
        Some(json!({ "productId": "prod-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, second) = send(
        &app,
        Method::POST,
        "/api/wishlist",
        None,
        Some(json!({ "productId": "prod-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["id"], second["id"]);
    assert_eq!(first["addedAt"], second["addedAt"]);

    send(
        &app,
        Method::POST,
        "/api/wishlist",
        None,
        Some(json!({ "productId": "prod-2" })),
    )
    .await;

    let (status, list) = send(&app, Method::GET, "/api/wishlist", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["product"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Chair", "Lamp"]);

    for missing in ["prod-404", "prod-1 "] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/wishlist",
            None,
            Some(json!({ "productId": missing })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let uri = format!("/api/wishlist/{}", first["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sessions_are_isolated() {
    let (app, _pool) = app_with(&[product("prod-1", "Lamp", "10.00")]).await;

    let body = json!({ "productId": "prod-1", "quantity": 3 });
    send(&app, Method::POST, "/api/cart", Some("alice"), Some(body)).await;

    let (_, alice) = send(&app, Method::GET, "/api/cart", Some("alice"), None).await;
    let (_, shared) = send(&app, Method::GET, "/api/cart", None, None).await;
    assert_eq!(alice["total"], "30.00");
    assert_eq!(shared["total"], "0.00");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/checkout",
        Some("alice"),
        Some(json!({ "customerName": "Alice", "customerEmail": "alice@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, alice_orders) = send(&app, Method::GET, "/api/orders", Some("alice"), None).await;
    let (_, shared_orders) = send(&app, Method::GET, "/api/orders", None, None).await;
    assert_eq!(alice_orders.as_array().unwrap().len(), 1);
    assert_eq!(shared_orders, json!([]));

    let (status, _) = send(&app, Method::GET, "/api/cart", Some("bad session!"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_endpoints() {
    let (app, _pool) = app_with(&[]).await;

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, Method::GET, "/health/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected");
}
