mod cart;
mod health;
mod orders;
mod products;
mod wishlist;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/products", get(products::list_products))
        .route("/api/products/{id}", get(products::get_product))
        .route("/api/cart", get(cart::get_cart).post(cart::add_to_cart))
        .route(
            "/api/cart/{id}",
            patch(cart::update_cart_item).delete(cart::remove_cart_item),
        )
        .route("/api/checkout", post(orders::checkout))
        .route("/api/orders", get(orders::get_orders))
        .route(
            "/api/wishlist",
            get(wishlist::get_wishlist).post(wishlist::add_to_wishlist),
        )
        .route(
            "/api/wishlist/{id}",
            delete(wishlist::remove_wishlist_item),
        )
}
