use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{error::Result, models::Product};

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, image, category FROM products",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, image, category FROM products WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Inserts every product in one statement inside one transaction.
pub async fn insert_many(pool: &SqlitePool, products: &[Product]) -> Result<u64> {
    if products.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;

    let mut query: QueryBuilder<Sqlite> =
        QueryBuilder::new("INSERT INTO products (id, name, description, price, image, category) ");
    query.push_values(products, |mut row, product| {
        row.push_bind(&product.id)
            .push_bind(&product.name)
            .push_bind(&product.description)
            .push_bind(&product.price)
            .push_bind(&product.image)
            .push_bind(&product.category);
    });

    let result = query.build().execute(&mut *tx).await?;

    tx.commit().await?;
    Ok(result.rows_affected())
}
