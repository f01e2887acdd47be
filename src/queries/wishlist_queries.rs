use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::{
    error::Result,
    models::{Product, WishlistItem, WishlistItemWithProduct},
};

#[derive(sqlx::FromRow)]
struct WishlistLineRow {
    id: String,
    product_id: String,
    added_at: DateTime<Utc>,
    name: String,
    description: String,
    price: String,
    image: String,
    category: String,
}

impl From<WishlistLineRow> for WishlistItemWithProduct {
    fn from(row: WishlistLineRow) -> Self {
        Self {
            item: WishlistItem {
                id: row.id,
                product_id: row.product_id.clone(),
                added_at: row.added_at,
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

/// Newest first; rowid breaks ties between entries added in the same instant.
pub async fn find_with_products(
    pool: &SqlitePool,
    session_id: &str,
) -> Result<Vec<WishlistItemWithProduct>> {
    let rows = sqlx::query_as::<_, WishlistLineRow>(
        "SELECT w.id, w.product_id, w.added_at,
                p.name, p.description, p.price, p.image, p.category
         FROM wishlist w
         JOIN products p ON p.id = w.product_id
         WHERE w.session_id = ?
         ORDER BY w.added_at DESC, w.rowid DESC",
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(WishlistItemWithProduct::from).collect())
}

pub async fn find_by_product(
    pool: &SqlitePool,
    session_id: &str,
    product_id: &str,
) -> Result<Option<WishlistItem>> {
    let item = sqlx::query_as::<_, WishlistItem>(
        "SELECT id, product_id, added_at FROM wishlist
         WHERE session_id = ? AND product_id = ?",
    )
    .bind(session_id)
    .bind(product_id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

/// Inserts the entry unless the product is already on this session's list.
/// Returns whether a row was written.
pub async fn insert_if_absent(
    pool: &SqlitePool,
    session_id: &str,
    id: &str,
    product_id: &str,
    added_at: DateTime<Utc>,
) -> Result<bool> {
    let result = sqlx::query(
        "INSERT INTO wishlist (id, session_id, product_id, added_at)
         VALUES (?, ?, ?, ?)
         ON CONFLICT (session_id, product_id) DO NOTHING",
    )
    .bind(id)
    .bind(session_id)
    .bind(product_id)
    .bind(added_at)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, session_id: &str, id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM wishlist WHERE id = ? AND session_id = ?")
        .bind(id)
        .bind(session_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
