use sqlx::{Executor, Sqlite, SqliteConnection, SqlitePool};

use crate::{
    error::Result,
    models::{CartItem, CartItemWithProduct, MAX_LINE_QUANTITY, Product},
};

#[derive(sqlx::FromRow)]
struct CartLineRow {
    id: String,
    product_id: String,
    quantity: i64,
    name: String,
    description: String,
    price: String,
    image: String,
    category: String,
}

impl From<CartLineRow> for CartItemWithProduct {
    fn from(row: CartLineRow) -> Self {
        Self {
            item: CartItem {
                id: row.id,
                product_id: row.product_id.clone(),
                quantity: row.quantity,
            },
            product: Product {
                id: row.product_id,
                name: row.name,
                description: row.description,
                price: row.price,
                image: row.image,
                category: row.category,
            },
        }
    }
}

/// Cart lines joined with their products. The inner join drops lines whose
/// product no longer exists. Runs on the pool or inside a transaction.
pub async fn find_with_products<'e, E>(
    executor: E,
    session_id: &str,
) -> Result<Vec<CartItemWithProduct>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, CartLineRow>(
        "SELECT c.id, c.product_id, c.quantity,
                p.name, p.description, p.price, p.image, p.category
         FROM cart_items c
         JOIN products p ON p.id = c.product_id
         WHERE c.session_id = ?
         ORDER BY c.rowid ASC",
    )
    .bind(session_id)
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(CartItemWithProduct::from).collect())
}

/// Inserts a line or adds `quantity` to the existing line for the product in
/// a single statement. Returns `None` when the merged quantity would exceed
/// [`MAX_LINE_QUANTITY`]; the stored row is then left untouched.
pub async fn upsert_quantity(
    pool: &SqlitePool,
    session_id: &str,
    id: &str,
    product_id: &str,
    quantity: i64,
) -> Result<Option<CartItem>> {
    let item = sqlx::query_as::<_, CartItem>(
        "INSERT INTO cart_items (id, session_id, product_id, quantity)
         VALUES (?, ?, ?, ?)
         ON CONFLICT (session_id, product_id) DO UPDATE
            SET quantity = cart_items.quantity + excluded.quantity
            WHERE cart_items.quantity + excluded.quantity <= ?
         RETURNING id, product_id, quantity",
    )
    .bind(id)
    .bind(session_id)
    .bind(product_id)
    .bind(quantity)
    .bind(MAX_LINE_QUANTITY)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

pub async fn update_quantity(
    pool: &SqlitePool,
    session_id: &str,
    id: &str,
    quantity: i64,
) -> Result<Option<CartItem>> {
    let item = sqlx::query_as::<_, CartItem>(
        "UPDATE cart_items SET quantity = ?
         WHERE id = ? AND session_id = ?
         RETURNING id, product_id, quantity",
    )
    .bind(quantity)
    .bind(id)
    .bind(session_id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

pub async fn delete(pool: &SqlitePool, session_id: &str, id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM cart_items WHERE id = ? AND session_id = ?")
        .bind(id)
        .bind(session_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Takes a connection so checkout can run it inside its transaction.
pub async fn clear(conn: &mut SqliteConnection, session_id: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM cart_items WHERE session_id = ?")
        .bind(session_id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}
