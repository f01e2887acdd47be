use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, error::Result, models::Product, services::catalog_service};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = catalog_service::list_all(&state.db).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = catalog_service::get_by_id(&state.db, &id).await?;

    Ok(Json(product))
}
