use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
}

/// A payment intent. Read-only after creation; payments settle against it.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: String,
    pub merchant_id: Uuid,
    pub amount: i64,
    pub currency: String,
    pub receipt: Option<String>,
    pub notes: Option<serde_json::Value>,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Order {
    pub fn create(
        id: String,
        merchant_id: Uuid,
        amount: i64,
        currency: String,
        receipt: Option<String>,
        notes: Option<serde_json::Value>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            merchant_id,
            amount,
            currency,
            receipt,
            notes,
            status: OrderStatus::Created,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub receipt: Option<String>,
    pub notes: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub merchant_id: String,
    pub amount: i64,
    pub currency: String,
    pub receipt: Option<String>,
    pub notes: Option<serde_json::Value>,
    pub status: OrderStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            merchant_id: order.merchant_id.to_string(),
            amount: order.amount,
            currency: order.currency.clone(),
            receipt: order.receipt.clone(),
            notes: order.notes.clone(),
            status: order.status,
            created_at: format_local(order.created_at),
            updated_at: format_local(order.updated_at),
        }
    }
}

/// Trimmed projection served to the unauthenticated checkout page.
#[derive(Debug, Clone, Serialize)]
pub struct PublicOrderResponse {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: OrderStatus,
    pub created_at: String,
}

impl From<&Order> for PublicOrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            status: order.status,
            created_at: format_local(order.created_at),
        }
    }
}

// Local timestamps without an offset, matching the wire format of the
// rest of the API.
pub(crate) fn format_local(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S").to_string()
}
