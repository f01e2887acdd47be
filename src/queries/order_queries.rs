use sqlx::{SqliteConnection, SqlitePool};

use crate::{
    error::Result,
    models::{Order, OrderRow},
};

/// Writes the order and its line snapshot. Takes a connection so checkout
/// can run it inside its transaction.
pub async fn insert(conn: &mut SqliteConnection, session_id: &str, order: &Order) -> Result<()> {
    let items = order.items_json()?;

    sqlx::query(
        "INSERT INTO orders (id, session_id, customer_name, customer_email, total, items, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&order.id)
    .bind(session_id)
    .bind(&order.customer_name)
    .bind(&order.customer_email)
    .bind(&order.total)
    .bind(items)
    .bind(order.created_at)
    .execute(conn)
    .await?;

    Ok(())
}

pub async fn find_all(pool: &SqlitePool, session_id: &str) -> Result<Vec<Order>> {
    let rows = sqlx::query_as::<_, OrderRow>(
        "SELECT id, customer_name, customer_email, total, items, created_at
         FROM orders
         WHERE session_id = ?
         ORDER BY created_at DESC, rowid DESC",
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Order::try_from).collect()
}
