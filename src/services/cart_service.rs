use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::{
    error::{AppError, FieldError, Result},
    models::{CartItem, CartItemWithProduct, MAX_LINE_QUANTITY, NewCartLine},
    queries::{cart_queries, product_queries},
};

/// Renders a money amount with exactly two decimals.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

pub fn line_total(line: &CartItemWithProduct) -> Result<Decimal> {
    Ok(line.product.unit_price()? * Decimal::from(line.item.quantity))
}

pub fn compute_total(lines: &[CartItemWithProduct]) -> Result<String> {
    let mut total = Decimal::ZERO;
    for line in lines {
        total += line_total(line)?;
    }
    Ok(format_amount(total))
}

pub async fn list_with_products(
    pool: &SqlitePool,
    session_id: &str,
) -> Result<Vec<CartItemWithProduct>> {
    cart_queries::find_with_products(pool, session_id).await
}

/// Adds to the cart, merging into the product's existing line if there is one.
pub async fn add(pool: &SqlitePool, session_id: &str, line: NewCartLine) -> Result<CartItem> {
    if product_queries::find_by_id(pool, &line.product_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let id = Uuid::new_v4().to_string();
    let item = cart_queries::upsert_quantity(pool, session_id, &id, &line.product_id, line.quantity)
        .await?
        .ok_or_else(|| {
            AppError::ValidationError(vec![FieldError::new(
                "quantity",
                format!("Cart line quantity must not exceed {}", MAX_LINE_QUANTITY),
            )])
        })?;

    tracing::debug!(
        "Cart {} now holds {} x {}",
        session_id,
        item.quantity,
        item.product_id
    );

    Ok(item)
}

pub async fn update_quantity(
    pool: &SqlitePool,
    session_id: &str,
    id: &str,
    quantity: i64,
) -> Result<CartItem> {
    crate::models::check_quantity(quantity).map_err(|e| AppError::ValidationError(vec![e]))?;

    cart_queries::update_quantity(pool, session_id, id, quantity)
        .await?
        .ok_or_else(|| AppError::NotFound("Cart item not found".to_string()))
}

pub async fn remove(pool: &SqlitePool, session_id: &str, id: &str) -> Result<bool> {
    cart_queries::delete(pool, session_id, id).await
}

pub async fn clear(conn: &mut SqliteConnection, session_id: &str) -> Result<u64> {
    cart_queries::clear(conn, session_id).await
}
