use crate::domain::merchant::Merchant;
use crate::domain::order::Order;
use crate::domain::payment::Payment;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub mod memory;

/// Persistence contract for the gateway. Backends provide per-row atomic
/// reads and writes; the state machine never needs a transaction because a
/// payment is only written by the request that created it.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_merchant(&self, merchant: Merchant) -> Result<()>;
    async fn merchant_by_credentials(
        &self,
        api_key: &str,
        api_secret: &str,
    ) -> Result<Option<Merchant>>;
    async fn merchant_by_email(&self, email: &str) -> Result<Option<Merchant>>;
    async fn merchant_by_id(&self, id: Uuid) -> Result<Option<Merchant>>;
    async fn merchant_count(&self) -> Result<usize>;

    /// Rejects a duplicate order id.
    async fn insert_order(&self, order: Order) -> Result<()>;
    async fn order_by_id(&self, id: &str) -> Result<Option<Order>>;
    async fn order_for_merchant(&self, id: &str, merchant_id: Uuid) -> Result<Option<Order>>;
    async fn orders_for_merchant(&self, merchant_id: Uuid) -> Result<Vec<Order>>;

    /// Rejects a duplicate payment id.
    async fn insert_payment(&self, payment: Payment) -> Result<()>;
    async fn update_payment(&self, payment: Payment) -> Result<()>;
    async fn payment_for_merchant(&self, id: &str, merchant_id: Uuid) -> Result<Option<Payment>>;
    async fn payments_for_merchant(&self, merchant_id: Uuid) -> Result<Vec<Payment>>;
}
