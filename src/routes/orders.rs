use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::Result,
    models::{CheckoutRequest, Order, Receipt},
    services::checkout_service,
    utils::extractors::{AppJson, SessionId},
};

pub async fn checkout(
    State(state): State<AppState>,
    session: SessionId,
    AppJson(payload): AppJson<CheckoutRequest>,
) -> Result<(StatusCode, Json<Receipt>)> {
    let receipt = checkout_service::checkout(&state.db, session.as_str(), payload).await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}

pub async fn get_orders(
    State(state): State<AppState>,
    session: SessionId,
) -> Result<Json<Vec<Order>>> {
    let orders = checkout_service::list_orders(&state.db, session.as_str()).await?;

    Ok(Json(orders))
}
