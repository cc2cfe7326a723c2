use crate::domain::merchant::Merchant;
use crate::domain::payment::{CreatePaymentRequest, Instrument, Payment};
use crate::error::GatewayError;
use crate::ids::IdGenerator;
use crate::simulator::OutcomePolicy;
use crate::store::Store;
use crate::validation::card::{clean_card_number, detect_card_network, validate_card_number};
use crate::validation::expiry::validate_expiry_date;
use crate::validation::vpa::validate_vpa;
use std::sync::Arc;

#[derive(Clone)]
pub struct PaymentService {
    pub store: Arc<dyn Store>,
    pub ids: IdGenerator,
    pub policy: OutcomePolicy,
}

impl PaymentService {
    /// Validates the request against its order, persists a `processing`
    /// record, suspends for the simulated delay, and settles exactly once.
    pub async fn create_payment(
        &self,
        merchant: &Merchant,
        request: CreatePaymentRequest,
    ) -> Result<Payment, GatewayError> {
        let order = self
            .store
            .order_by_id(&request.order_id)
            .await
            .map_err(GatewayError::Storage)?
            .filter(|o| o.merchant_id == merchant.id)
            .ok_or_else(|| GatewayError::not_found("Order not found"))?;

        let instrument = validate_instrument(&request)?;

        let payment = Payment::processing(
            self.ids.payment_id(),
            &order,
            instrument,
            chrono::Local::now().naive_local(),
        );
        // Persisted up front so a poller observes `processing` mid-flight.
        // Nothing serializes concurrent payments against the same order;
        // two in-flight requests can both settle successfully.
        self.store
            .insert_payment(payment.clone())
            .await
            .map_err(GatewayError::Storage)?;

        let outcome = self.policy.decide(payment.method);
        tokio::time::sleep(outcome.delay).await;

        let payment = payment.settle(outcome.success, chrono::Local::now().naive_local());
        self.store
            .update_payment(payment.clone())
            .await
            .map_err(GatewayError::Storage)?;

        tracing::info!(
            payment_id = %payment.id,
            order_id = %payment.order_id,
            status = ?payment.status,
            "payment settled"
        );
        Ok(payment)
    }

    pub async fn get_payment(
        &self,
        merchant: &Merchant,
        payment_id: &str,
    ) -> Result<Payment, GatewayError> {
        self.store
            .payment_for_merchant(payment_id, merchant.id)
            .await
            .map_err(GatewayError::Storage)?
            .ok_or_else(|| GatewayError::not_found("Payment not found"))
    }

    pub async fn list_payments(&self, merchant: &Merchant) -> Result<Vec<Payment>, GatewayError> {
        self.store
            .payments_for_merchant(merchant.id)
            .await
            .map_err(GatewayError::Storage)
    }
}

/// Method dispatch plus the method-specific field checks, in the fixed
/// order callers rely on for error messages.
fn validate_instrument(request: &CreatePaymentRequest) -> Result<Instrument, GatewayError> {
    match request.method.as_str() {
        "upi" => {
            let vpa = request
                .vpa
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| GatewayError::validation("VPA is required for UPI payments"))?;
            if !validate_vpa(vpa) {
                return Err(GatewayError::validation("Invalid VPA format"));
            }
            Ok(Instrument::Upi {
                vpa: vpa.to_string(),
            })
        }
        "card" => {
            let card = request.card.as_ref().ok_or_else(|| {
                GatewayError::validation("Card details are required for card payments")
            })?;

            let number = require(&card.number, "Card number is required")?;
            let expiry_month = require(&card.expiry_month, "Expiry month is required")?;
            let expiry_year = require(&card.expiry_year, "Expiry year is required")?;
            let cvv = require(&card.cvv, "CVV is required")?;
            require(&card.holder_name, "Card holder name is required")?;

            if !validate_card_number(number) {
                return Err(GatewayError::validation("Invalid card number"));
            }
            if !validate_expiry_date(expiry_month, expiry_year) {
                return Err(GatewayError::validation("Invalid expiry date"));
            }
            if !(3..=4).contains(&cvv.len()) || !cvv.bytes().all(|b| b.is_ascii_digit()) {
                return Err(GatewayError::validation("Invalid CVV format"));
            }

            let cleaned = clean_card_number(number);
            let last4 = (cleaned.len() >= 4).then(|| cleaned[cleaned.len() - 4..].to_string());
            Ok(Instrument::Card {
                network: detect_card_network(number),
                last4,
            })
        }
        _ => Err(GatewayError::validation("Invalid payment method")),
    }
}

fn require<'a>(field: &'a Option<String>, message: &str) -> Result<&'a str, GatewayError> {
    field
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| GatewayError::validation(message))
}
