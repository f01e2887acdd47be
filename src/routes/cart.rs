use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{AddToCartRequest, CartItem, CartResponse, UpdateCartItemRequest},
    services::cart_service,
    utils::extractors::{AppJson, SessionId},
};

pub async fn get_cart(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<Json<CartResponse>> {
    let items = cart_service::list_with_products(&state.db, session.as_str()).await?;
    let total = cart_service::compute_total(&items)?;

    Ok(Json(CartResponse { items, total }))
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    session: SessionId,
    AppJson(payload): AppJson<AddToCartRequest>,
) -> Result<(StatusCode, Json<CartItem>)> {
    let line = payload.validate()?;
    let item = cart_service::add(&state.db, session.as_str(), line).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_cart_item(
    State(state): State<AppState>,
    session: SessionId,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateCartItemRequest>,
) -> Result<Json<CartItem>> {
    let quantity = payload.validate()?;
    let item = cart_service::update_quantity(&state.db, session.as_str(), &id, quantity).await?;

    Ok(Json(item))
}

pub async fn remove_cart_item(
    State(state): State<AppState>,
    session: SessionId,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !cart_service::remove(&state.db, session.as_str(), &id).await? {
        return Err(AppError::NotFound("Cart item not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
