use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{WishlistItem, WishlistItemWithProduct},
    queries::{product_queries, wishlist_queries},
};

pub async fn list_with_products(
    pool: &SqlitePool,
    session_id: &str,
) -> Result<Vec<WishlistItemWithProduct>> {
    wishlist_queries::find_with_products(pool, session_id).await
}

/// Idempotent: adding a product already on the list returns the existing entry.
pub async fn add(pool: &SqlitePool, session_id: &str, product_id: &str) -> Result<WishlistItem> {
    if product_queries::find_by_id(pool, product_id).await?.is_none() {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let id = Uuid::new_v4().to_string();
    let inserted =
        wishlist_queries::insert_if_absent(pool, session_id, &id, product_id, Utc::now()).await?;
    if inserted {
        tracing::debug!("Wishlist {} saved {}", session_id, product_id);
    }

    wishlist_queries::find_by_product(pool, session_id, product_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Wishlist entry for {} vanished after insert",
                product_id
            ))
        })
}

pub async fn remove(pool: &SqlitePool, session_id: &str, id: &str) -> Result<bool> {
    wishlist_queries::delete(pool, session_id, id).await
}
