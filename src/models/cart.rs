use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Upper bound for a single cart line, applied to adds, merges and updates.
pub const MAX_LINE_QUANTITY: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub product_id: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartItemWithProduct {
    #[serde(flatten)]
    pub item: CartItem,
    pub product: super::Product,
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItemWithProduct>,
    pub total: String,
}

// Request types

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i64,
}

/// A cart addition whose fields have passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartLine {
    pub product_id: String,
    pub quantity: i64,
}

impl AddToCartRequest {
    pub fn validate(self) -> Result<NewCartLine, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.product_id.trim().is_empty() {
            errors.push(FieldError::new("productId", "Product id is required"));
        }
        if let Err(error) = check_quantity(self.quantity) {
            errors.push(error);
        }

        if errors.is_empty() {
            Ok(NewCartLine {
                product_id: self.product_id,
                quantity: self.quantity,
            })
        } else {
            Err(errors)
        }
    }
}

impl UpdateCartItemRequest {
    pub fn validate(self) -> Result<i64, Vec<FieldError>> {
        check_quantity(self.quantity)
            .map(|_| self.quantity)
            .map_err(|e| vec![e])
    }
}

pub fn check_quantity(quantity: i64) -> Result<(), FieldError> {
    if quantity < 1 {
        return Err(FieldError::new("quantity", "Quantity must be at least 1"));
    }
    if quantity > MAX_LINE_QUANTITY {
        return Err(FieldError::new(
            "quantity",
            format!("Quantity must not exceed {}", MAX_LINE_QUANTITY),
        ));
    }
    Ok(())
}
