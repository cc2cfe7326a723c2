use crate::domain::merchant::Merchant;
use crate::domain::order::Order;
use crate::domain::payment::Payment;
use crate::store::Store;
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Thread-safe in-memory backend. Listings come back ordered by creation
/// time; duplicate-id inserts are rejected so an id-generator collision
/// surfaces instead of silently overwriting a row.
#[derive(Default, Clone)]
pub struct MemoryStore {
    merchants: Arc<RwLock<HashMap<Uuid, Merchant>>>,
    orders: Arc<RwLock<HashMap<String, Order>>>,
    payments: Arc<RwLock<HashMap<String, Payment>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_merchant(&self, merchant: Merchant) -> Result<()> {
        let mut merchants = self.merchants.write().await;
        if merchants.contains_key(&merchant.id) {
            bail!("duplicate merchant id {}", merchant.id);
        }
        merchants.insert(merchant.id, merchant);
        Ok(())
    }

    async fn merchant_by_credentials(
        &self,
        api_key: &str,
        api_secret: &str,
    ) -> Result<Option<Merchant>> {
        let merchants = self.merchants.read().await;
        Ok(merchants
            .values()
            .find(|m| m.api_key == api_key && m.api_secret == api_secret)
            .cloned())
    }

    async fn merchant_by_email(&self, email: &str) -> Result<Option<Merchant>> {
        let merchants = self.merchants.read().await;
        Ok(merchants.values().find(|m| m.email == email).cloned())
    }

    async fn merchant_by_id(&self, id: Uuid) -> Result<Option<Merchant>> {
        let merchants = self.merchants.read().await;
        Ok(merchants.get(&id).cloned())
    }

    async fn merchant_count(&self) -> Result<usize> {
        let merchants = self.merchants.read().await;
        Ok(merchants.len())
    }

    async fn insert_order(&self, order: Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            bail!("duplicate order id {}", order.id);
        }
        orders.insert(order.id.clone(), order);
        Ok(())
    }

    async fn order_by_id(&self, id: &str) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(id).cloned())
    }

    async fn order_for_merchant(&self, id: &str, merchant_id: Uuid) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .get(id)
            .filter(|o| o.merchant_id == merchant_id)
            .cloned())
    }

    async fn orders_for_merchant(&self, merchant_id: Uuid) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        let mut owned: Vec<Order> = orders
            .values()
            .filter(|o| o.merchant_id == merchant_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn insert_payment(&self, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        if payments.contains_key(&payment.id) {
            bail!("duplicate payment id {}", payment.id);
        }
        payments.insert(payment.id.clone(), payment);
        Ok(())
    }

    async fn update_payment(&self, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        if !payments.contains_key(&payment.id) {
            bail!("unknown payment id {}", payment.id);
        }
        payments.insert(payment.id.clone(), payment);
        Ok(())
    }

    async fn payment_for_merchant(&self, id: &str, merchant_id: Uuid) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments
            .get(id)
            .filter(|p| p.merchant_id == merchant_id)
            .cloned())
    }

    async fn payments_for_merchant(&self, merchant_id: Uuid) -> Result<Vec<Payment>> {
        let payments = self.payments.read().await;
        let mut owned: Vec<Payment> = payments
            .values()
            .filter(|p| p.merchant_id == merchant_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }
}
