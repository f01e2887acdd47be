use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{AddToWishlistRequest, WishlistItem, WishlistItemWithProduct},
    services::wishlist_service,
    utils::extractors::{AppJson, SessionId},
};

pub async fn get_wishlist(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<Json<Vec<WishlistItemWithProduct>>> {
    let items = wishlist_service::list_with_products(&state.db, session.as_str()).await?;

    Ok(Json(items))
}

pub async fn add_to_wishlist(
    State(state): State<AppState>,
    session: SessionId,
    AppJson(payload): AppJson<AddToWishlistRequest>,
) -> Result<(StatusCode, Json<WishlistItem>)> {
    let product_id = payload.validate()?;
    let item = wishlist_service::add(&state.db, session.as_str(), &product_id).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn remove_wishlist_item(
    State(state): State<AppState>,
    session: SessionId,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if !wishlist_service::remove(&state.db, session.as_str(), &id).await? {
        return Err(AppError::NotFound("Wishlist item not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
