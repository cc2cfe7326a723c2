use payment_sandbox::config::SimulationConfig;
use payment_sandbox::domain::merchant::Merchant;
use payment_sandbox::domain::order::CreateOrderRequest;
use payment_sandbox::domain::payment::{
    CardRequest, CreatePaymentRequest, PaymentMethod, PaymentStatus,
};
use payment_sandbox::error::GatewayError;
use payment_sandbox::ids::IdGenerator;
use payment_sandbox::rng::{RandomSource, ThreadRandom};
use payment_sandbox::service::auth::AuthService;
use payment_sandbox::service::order_service::OrderService;
use payment_sandbox::service::payment_service::PaymentService;
use payment_sandbox::simulator::OutcomePolicy;
use payment_sandbox::store::memory::MemoryStore;
use payment_sandbox::store::Store;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Replays scripted draws so production-mode sampling settles
/// deterministically without the test-mode flag.
struct Scripted {
    floats: Mutex<Vec<f64>>,
    ints: Mutex<Vec<u64>>,
}

impl RandomSource for Scripted {
    fn next_f64(&self) -> f64 {
        self.floats.lock().unwrap().remove(0)
    }

    fn next_in_range(&self, lo: u64, hi: u64) -> u64 {
        self.ints.lock().unwrap().remove(0).clamp(lo, hi)
    }
}

struct Gateway {
    store: Arc<MemoryStore>,
    auth: AuthService,
    orders: OrderService,
    payments: PaymentService,
}

fn simulation(test_payment_success: bool) -> SimulationConfig {
    SimulationConfig {
        test_mode: true,
        test_payment_success,
        test_processing_delay_ms: 5,
        processing_delay_min_ms: 10,
        processing_delay_max_ms: 20,
        upi_success_rate: 0.90,
        card_success_rate: 0.95,
    }
}

fn gateway_with(config: SimulationConfig, random: Arc<dyn RandomSource>) -> Gateway {
    let store = Arc::new(MemoryStore::new());
    let dyn_store: Arc<dyn Store> = store.clone();
    let ids = IdGenerator {
        random: Arc::new(ThreadRandom),
    };
    Gateway {
        store,
        auth: AuthService {
            store: dyn_store.clone(),
        },
        orders: OrderService {
            store: dyn_store.clone(),
            ids: ids.clone(),
        },
        payments: PaymentService {
            store: dyn_store,
            ids,
            policy: OutcomePolicy { config, random },
        },
    }
}

fn gateway(test_payment_success: bool) -> Gateway {
    gateway_with(simulation(test_payment_success), Arc::new(ThreadRandom))
}

async fn seed_merchant(store: &MemoryStore, email: &str, key: &str) -> Merchant {
    let merchant = Merchant {
        id: Uuid::new_v4(),
        name: "Test Merchant".to_string(),
        email: email.to_string(),
        api_key: key.to_string(),
        api_secret: format!("secret_{key}"),
    };
    store.insert_merchant(merchant.clone()).await.unwrap();
    merchant
}

fn order_request(amount: i64) -> CreateOrderRequest {
    CreateOrderRequest {
        amount: Some(amount),
        currency: None,
        receipt: None,
        notes: None,
    }
}

fn upi_request(order_id: &str, vpa: &str) -> CreatePaymentRequest {
    CreatePaymentRequest {
        order_id: order_id.to_string(),
        method: "upi".to_string(),
        vpa: Some(vpa.to_string()),
        card: None,
    }
}

#[tokio::test]
async fn authentication_resolves_only_exact_credentials() {
    let gw = gateway(true);
    let merchant = seed_merchant(&gw.store, "a@example.com", "key_a").await;

    let resolved = gw.auth.authenticate("key_a", "secret_key_a").await.unwrap();
    assert_eq!(resolved.id, merchant.id);

    let err = gw.auth.authenticate("key_a", "wrong").await.unwrap_err();
    assert!(matches!(err, GatewayError::Authentication));
    let err = gw.auth.authenticate("", "").await.unwrap_err();
    assert!(matches!(err, GatewayError::Authentication));
}

#[tokio::test]
async fn order_amount_floor_is_inclusive() {
    let gw = gateway(true);
    let merchant = seed_merchant(&gw.store, "a@example.com", "key_a").await;

    let err = gw
        .orders
        .create_order(&merchant, order_request(99))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Validation(_)));
    assert_eq!(err.to_string(), "amount must be at least 100");

    let err = gw
        .orders
        .create_order(
            &merchant,
            CreateOrderRequest {
                amount: None,
                currency: None,
                receipt: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "amount must be at least 100");

    let order = gw
        .orders
        .create_order(&merchant, order_request(100))
        .await
        .unwrap();
    assert_eq!(order.amount, 100);
    assert_eq!(order.currency, "INR");
}

#[tokio::test]
async fn created_order_round_trips_through_get() {
    let gw = gateway(true);
    let merchant = seed_merchant(&gw.store, "a@example.com", "key_a").await;

    let created = gw
        .orders
        .create_order(
            &merchant,
            CreateOrderRequest {
                amount: Some(500),
                currency: Some("USD".to_string()),
                receipt: Some("rcpt-42".to_string()),
                notes: Some(serde_json::json!({"plan": "gold"})),
            },
        )
        .await
        .unwrap();

    let fetched = gw.orders.get_order(&merchant, &created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.amount, 500);
    assert_eq!(fetched.currency, "USD");
    assert_eq!(fetched.receipt.as_deref(), Some("rcpt-42"));
    assert_eq!(fetched.notes, created.notes);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn orders_are_invisible_across_merchants() {
    let gw = gateway(true);
    let a = seed_merchant(&gw.store, "a@example.com", "key_a").await;
    let b = seed_merchant(&gw.store, "b@example.com", "key_b").await;

    let order = gw.orders.create_order(&a, order_request(500)).await.unwrap();

    let err = gw.orders.get_order(&b, &order.id).await.unwrap_err();
    assert!(matches!(err, GatewayError::NotFound(_)));
    assert_eq!(err.to_string(), "Order not found");

    assert!(gw.orders.list_orders(&b).await.unwrap().is_empty());
    assert_eq!(gw.orders.list_orders(&a).await.unwrap().len(), 1);
}

#[tokio::test]
async fn upi_payment_settles_successfully_in_test_mode() {
    let gw = gateway(true);
    let merchant = seed_merchant(&gw.store, "a@example.com", "key_a").await;
    let order = gw.orders.create_order(&merchant, order_request(500)).await.unwrap();

    let payment = gw
        .payments
        .create_payment(&merchant, upi_request(&order.id, "user.name@bank"))
        .await
        .unwrap();

    assert_eq!(payment.status, PaymentStatus::Success);
    assert_eq!(payment.method, PaymentMethod::Upi);
    assert_eq!(payment.amount, order.amount);
    assert_eq!(payment.currency, order.currency);
    assert_eq!(payment.vpa.as_deref(), Some("user.name@bank"));
    assert!(payment.error_code.is_none());
    assert!(payment.error_description.is_none());
    assert!(payment.id.starts_with("pay_"));
}

#[tokio::test]
async fn forced_failure_attaches_the_fixed_error_pair() {
    let gw = gateway(false);
    let merchant = seed_merchant(&gw.store, "a@example.com", "key_a").await;
    let order = gw.orders.create_order(&merchant, order_request(500)).await.unwrap();

    let payment = gw
        .payments
        .create_payment(&merchant, upi_request(&order.id, "user@bank"))
        .await
        .unwrap();

    assert_eq!(payment.status, PaymentStatus::Failed);
    assert_eq!(payment.error_code.as_deref(), Some("PAYMENT_FAILED"));
    assert_eq!(
        payment.error_description.as_deref(),
        Some("Payment processing failed")
    );
}

#[tokio::test]
async fn card_payment_carries_network_and_last4() {
    let gw = gateway(true);
    let merchant = seed_merchant(&gw.store, "a@example.com", "key_a").await;
    let order = gw.orders.create_order(&merchant, order_request(750)).await.unwrap();

    let payment = gw
        .payments
        .create_payment(
            &merchant,
            CreatePaymentRequest {
                order_id: order.id.clone(),
                method: "card".to_string(),
                vpa: None,
                card: Some(CardRequest {
                    number: Some("4111 1111 1111 1111".to_string()),
                    expiry_month: Some("12".to_string()),
                    expiry_year: Some("2099".to_string()),
                    cvv: Some("123".to_string()),
                    holder_name: Some("Asha Rao".to_string()),
                }),
            },
        )
        .await
        .unwrap();

    assert_eq!(payment.method, PaymentMethod::Card);
    assert_eq!(payment.card_last4.as_deref(), Some("1111"));
    assert!(payment.vpa.is_none());
    assert_eq!(payment.status, PaymentStatus::Success);
}

#[tokio::test]
async fn payment_against_foreign_order_reads_as_not_found() {
    let gw = gateway(true);
    let a = seed_merchant(&gw.store, "a@example.com", "key_a").await;
    let b = seed_merchant(&gw.store, "b@example.com", "key_b").await;
    let order = gw.orders.create_order(&a, order_request(500)).await.unwrap();

    let err = gw
        .payments
        .create_payment(&b, upi_request(&order.id, "user@bank"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::NotFound(_)));
    assert_eq!(err.to_string(), "Order not found");

    let err = gw
        .payments
        .create_payment(&a, upi_request("order_missing", "user@bank"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Order not found");
}

#[tokio::test]
async fn settled_payment_is_scoped_to_its_merchant() {
    let gw = gateway(true);
    let a = seed_merchant(&gw.store, "a@example.com", "key_a").await;
    let b = seed_merchant(&gw.store, "b@example.com", "key_b").await;
    let order = gw.orders.create_order(&a, order_request(500)).await.unwrap();
    let payment = gw
        .payments
        .create_payment(&a, upi_request(&order.id, "user@bank"))
        .await
        .unwrap();

    let fetched = gw.payments.get_payment(&a, &payment.id).await.unwrap();
    assert_eq!(fetched.id, payment.id);
    assert_eq!(fetched.status, payment.status);
    assert_eq!(fetched.vpa, payment.vpa);

    let err = gw.payments.get_payment(&b, &payment.id).await.unwrap_err();
    assert!(matches!(err, GatewayError::NotFound(_)));
    assert_eq!(err.to_string(), "Payment not found");

    assert!(gw.payments.list_payments(&b).await.unwrap().is_empty());
    assert_eq!(gw.payments.list_payments(&a).await.unwrap().len(), 1);
}

#[tokio::test]
async fn validation_failures_never_persist_a_payment() {
    let gw = gateway(true);
    let merchant = seed_merchant(&gw.store, "a@example.com", "key_a").await;
    let order = gw.orders.create_order(&merchant, order_request(500)).await.unwrap();

    let err = gw
        .payments
        .create_payment(&merchant, upi_request(&order.id, "not-a-vpa"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid VPA format");

    let err = gw
        .payments
        .create_payment(
            &merchant,
            CreatePaymentRequest {
                order_id: order.id.clone(),
                method: "wallet".to_string(),
                vpa: None,
                card: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid payment method");

    assert!(gw.payments.list_payments(&merchant).await.unwrap().is_empty());
}

#[tokio::test]
async fn production_mode_settles_by_scripted_draws() {
    // Delay draw 10ms, then an outcome draw of 0.95 which fails UPI (0.90).
    let random = Arc::new(Scripted {
        floats: Mutex::new(vec![0.95, 0.10]),
        ints: Mutex::new(vec![10, 10]),
    });
    let mut config = simulation(true);
    config.test_mode = false;
    config.processing_delay_min_ms = 10;
    config.processing_delay_max_ms = 10;
    let gw = gateway_with(config, random);

    let merchant = seed_merchant(&gw.store, "a@example.com", "key_a").await;
    let order = gw.orders.create_order(&merchant, order_request(500)).await.unwrap();

    let failed = gw
        .payments
        .create_payment(&merchant, upi_request(&order.id, "user@bank"))
        .await
        .unwrap();
    assert_eq!(failed.status, PaymentStatus::Failed);

    // Second draw of 0.10 is under the rate and succeeds.
    let succeeded = gw
        .payments
        .create_payment(&merchant, upi_request(&order.id, "user@bank"))
        .await
        .unwrap();
    assert_eq!(succeeded.status, PaymentStatus::Success);
}
