use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{CheckoutRequest, Order, OrderLine, Receipt, ReceiptLine},
    queries::{cart_queries, order_queries},
    services::cart_service,
};

/// Turns the session's cart into an order and receipt.
///
/// The cart is read and totalled first. The order insert then takes the
/// database write lock, the cart is re-read under that lock and must still
/// match what was totalled, and only then is it cleared. Insert and clear
/// commit together, so a failure in either leaves the cart intact and no
/// order behind, and concurrent checkouts of one cart produce one order.
pub async fn checkout(
    pool: &SqlitePool,
    session_id: &str,
    request: CheckoutRequest,
) -> Result<Receipt> {
    let customer = request.validate()?;

    let lines = cart_service::list_with_products(pool, session_id).await?;
    if lines.is_empty() {
        return Err(AppError::InvalidState("Cart is empty".to_string()));
    }

    let total = cart_service::compute_total(&lines)?;

    let mut snapshot = Vec::with_capacity(lines.len());
    let mut receipt_lines = Vec::with_capacity(lines.len());
    for line in &lines {
        snapshot.push(OrderLine {
            product_id: line.product.id.clone(),
            product_name: line.product.name.clone(),
            quantity: line.item.quantity,
            price: line.product.price.clone(),
        });
        receipt_lines.push(ReceiptLine {
            product_name: line.product.name.clone(),
            quantity: line.item.quantity,
            price: cart_service::format_amount(cart_service::line_total(line)?),
        });
    }

    let order = Order {
        id: Uuid::new_v4().to_string(),
        customer_name: customer.name,
        customer_email: customer.email,
        total,
        items: snapshot,
        created_at: Utc::now(),
    };

    // The insert is the transaction's first statement, so it acquires the
    // write lock before the cart is read again.
    let mut tx = pool.begin().await?;
    order_queries::insert(&mut *tx, session_id, &order).await?;

    let current = cart_queries::find_with_products(&mut *tx, session_id).await?;
    if current.is_empty() {
        return Err(AppError::InvalidState("Cart is empty".to_string()));
    }
    let unchanged = current
        .iter()
        .map(|line| &line.item)
        .eq(lines.iter().map(|line| &line.item));
    if !unchanged {
        return Err(AppError::InvalidState(
            "Cart changed during checkout".to_string(),
        ));
    }

    let cleared = cart_service::clear(&mut *tx, session_id).await?;
    tx.commit().await?;

    tracing::info!(
        "Order {} placed: {} lines, total {}",
        order.order_number(),
        cleared,
        order.total
    );

    Ok(Receipt::new(&order, receipt_lines))
}

pub async fn list_orders(pool: &SqlitePool, session_id: &str) -> Result<Vec<Order>> {
    order_queries::find_all(pool, session_id).await
}
