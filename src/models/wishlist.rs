use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub product_id: String,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WishlistItemWithProduct {
    #[serde(flatten)]
    pub item: WishlistItem,
    pub product: super::Product,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToWishlistRequest {
    pub product_id: String,
}

impl AddToWishlistRequest {
    pub fn validate(self) -> Result<String, Vec<FieldError>> {
        if self.product_id.trim().is_empty() {
            return Err(vec![FieldError::new("productId", "Product id is required")]);
        }
        Ok(self.product_id)
    }
}
