use crate::domain::merchant::Merchant;
use crate::domain::order::{CreateOrderRequest, Order};
use crate::error::GatewayError;
use crate::ids::IdGenerator;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderService {
    pub store: Arc<dyn Store>,
    pub ids: IdGenerator,
}

impl OrderService {
    pub async fn create_order(
        &self,
        merchant: &Merchant,
        request: CreateOrderRequest,
    ) -> Result<Order, GatewayError> {
        let amount = match request.amount {
            Some(amount) if amount >= 100 => amount,
            _ => return Err(GatewayError::validation("amount must be at least 100")),
        };
        let currency = request.currency.unwrap_or_else(|| "INR".to_string());

        let order = Order::create(
            self.ids.order_id(),
            merchant.id,
            amount,
            currency,
            request.receipt,
            request.notes,
            chrono::Local::now().naive_local(),
        );
        self.store
            .insert_order(order.clone())
            .await
            .map_err(GatewayError::Storage)?;

        tracing::info!(order_id = %order.id, amount, "order created");
        Ok(order)
    }

    /// An order owned by a different merchant is indistinguishable from a
    /// nonexistent one.
    pub async fn get_order(
        &self,
        merchant: &Merchant,
        order_id: &str,
    ) -> Result<Order, GatewayError> {
        self.store
            .order_for_merchant(order_id, merchant.id)
            .await
            .map_err(GatewayError::Storage)?
            .ok_or_else(|| GatewayError::not_found("Order not found"))
    }

    pub async fn list_orders(&self, merchant: &Merchant) -> Result<Vec<Order>, GatewayError> {
        self.store
            .orders_for_merchant(merchant.id)
            .await
            .map_err(GatewayError::Storage)
    }
}
