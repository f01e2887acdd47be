use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Exact decimal amount kept as text, e.g. `"1299.99"`.
    pub price: String,
    pub image: String,
    pub category: String,
}

impl Product {
    pub fn unit_price(&self) -> Result<Decimal> {
        Decimal::from_str(self.price.trim()).map_err(|e| {
            AppError::InternalError(format!(
                "Product {} has unparseable price {:?}: {}",
                self.id, self.price, e
            ))
        })
    }
}
