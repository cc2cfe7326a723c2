use crate::domain::order::{format_local, Order};
use crate::validation::card::CardNetwork;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Upi,
    Card,
}

impl PaymentMethod {
    /// Strict match on the wire value; anything else is an invalid method.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "upi" => Some(Self::Upi),
            "card" => Some(Self::Card),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Processing,
    Success,
    Failed,
}

/// Validated method-specific details carried into the payment record.
/// Full card numbers and CVVs never reach this type.
#[derive(Debug, Clone)]
pub enum Instrument {
    Upi { vpa: String },
    Card { network: CardNetwork, last4: Option<String> },
}

#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub merchant_id: Uuid,
    pub amount: i64,
    pub currency: String,
    pub method: PaymentMethod,
    pub vpa: Option<String>,
    pub card_network: Option<CardNetwork>,
    pub card_last4: Option<String>,
    pub status: PaymentStatus,
    pub error_code: Option<String>,
    pub error_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Payment {
    /// Builds the initial `processing` record. Amount and currency always
    /// come from the order, never from the request.
    pub fn processing(id: String, order: &Order, instrument: Instrument, now: NaiveDateTime) -> Self {
        let (method, vpa, card_network, card_last4) = match instrument {
            Instrument::Upi { vpa } => (PaymentMethod::Upi, Some(vpa), None, None),
            Instrument::Card { network, last4 } => (PaymentMethod::Card, None, Some(network), last4),
        };

        Self {
            id,
            order_id: order.id.clone(),
            merchant_id: order.merchant_id,
            amount: order.amount,
            currency: order.currency.clone(),
            method,
            vpa,
            card_network,
            card_last4,
            status: PaymentStatus::Processing,
            error_code: None,
            error_description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// One-directional settlement: `processing` moves to `success` or
    /// `failed` exactly once. Terminal records pass through unchanged.
    pub fn settle(mut self, success: bool, now: NaiveDateTime) -> Self {
        if self.status != PaymentStatus::Processing {
            return self;
        }

        if success {
            self.status = PaymentStatus::Success;
        } else {
            self.status = PaymentStatus::Failed;
            self.error_code = Some("PAYMENT_FAILED".to_string());
            self.error_description = Some("Payment processing failed".to_string());
        }
        self.updated_at = now;
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardRequest {
    pub number: Option<String>,
    pub expiry_month: Option<String>,
    pub expiry_year: Option<String>,
    pub cvv: Option<String>,
    pub holder_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentRequest {
    pub order_id: String,
    pub method: String,
    pub vpa: Option<String>,
    pub card: Option<CardRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub id: String,
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_network: Option<CardNetwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_last4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Payment> for PaymentResponse {
    fn from(payment: &Payment) -> Self {
        Self {
            id: payment.id.clone(),
            order_id: payment.order_id.clone(),
            amount: payment.amount,
            currency: payment.currency.clone(),
            method: payment.method,
            status: payment.status,
            vpa: payment.vpa.clone(),
            card_network: payment.card_network,
            card_last4: payment.card_last4.clone(),
            error_code: payment.error_code.clone(),
            error_description: payment.error_description.clone(),
            created_at: format_local(payment.created_at),
            updated_at: format_local(payment.updated_at),
        }
    }
}
