use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::{AppError, FieldError};

// DB models

/// Line captured by value at checkout. `price` is the product's unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total: String,
    #[serde(serialize_with = "lines_as_json_text")]
    pub items: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

/// Raw `orders` row; `items` holds the JSON text of the line snapshot.
#[derive(Debug, sqlx::FromRow)]
pub struct OrderRow {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total: String,
    pub items: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn items_json(&self) -> Result<String, AppError> {
        serde_json::to_string(&self.items)
            .map_err(|e| AppError::InternalError(format!("Failed to encode order items: {}", e)))
    }

    /// Short human-facing code: the first segment of the id, upper-cased.
    pub fn order_number(&self) -> String {
        self.id
            .split('-')
            .next()
            .unwrap_or(&self.id)
            .to_uppercase()
    }
}

impl TryFrom<OrderRow> for Order {
    type Error = AppError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let items = serde_json::from_str(&row.items).map_err(|e| {
            AppError::InternalError(format!("Order {} has corrupt items: {}", row.id, e))
        })?;

        Ok(Self {
            id: row.id,
            customer_name: row.customer_name,
            customer_email: row.customer_email,
            total: row.total,
            items,
            created_at: row.created_at,
        })
    }
}

// The presentation layer parses `items` itself, so it goes out as a string.
fn lines_as_json_text<S>(items: &[OrderLine], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let text = serde_json::to_string(items).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&text)
}

// Request types

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub customer_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
}

const MIN_NAME_LENGTH: usize = 2;

impl CheckoutRequest {
    pub fn validate(self) -> Result<CustomerDetails, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.customer_name.trim();
        if name.chars().count() < MIN_NAME_LENGTH {
            errors.push(FieldError::new(
                "customerName",
                format!("Name must be at least {} characters", MIN_NAME_LENGTH),
            ));
        }

        let email = self.customer_email.trim();
        if !is_email_shaped(email) {
            errors.push(FieldError::new(
                "customerEmail",
                "Please enter a valid email address",
            ));
        }

        if errors.is_empty() {
            Ok(CustomerDetails {
                name: name.to_string(),
                email: email.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

/// `validator`'s HTML-style check, narrowed to a dot-atom local part and a
/// top-level domain of at least two letters.
fn is_email_shaped(value: &str) -> bool {
    if !value.validate_email() {
        return false;
    }

    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    let dot_atom = !local.starts_with('.') && !local.ends_with('.') && !local.contains("..");
    let tld_ok = domain
        .rsplit_once('.')
        .map(|(_, tld)| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false);

    dot_atom && tld_ok
}

// Response types

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub product_name: String,
    pub quantity: i64,
    /// Line total (unit price x quantity), two decimals.
    pub price: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total: String,
    pub items: Vec<ReceiptLine>,
    pub timestamp: String,
}

impl Receipt {
    pub fn new(order: &Order, items: Vec<ReceiptLine>) -> Self {
        Self {
            id: order.id.clone(),
            order_number: order.order_number(),
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            total: order.total.clone(),
            items,
            timestamp: order.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
