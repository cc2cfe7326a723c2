use payment_sandbox::config::AppConfig;
use payment_sandbox::domain::merchant::Merchant;
use payment_sandbox::http::router::build_router;
use payment_sandbox::ids::IdGenerator;
use payment_sandbox::rng::ThreadRandom;
use payment_sandbox::service::auth::AuthService;
use payment_sandbox::service::order_service::OrderService;
use payment_sandbox::service::payment_service::PaymentService;
use payment_sandbox::simulator::OutcomePolicy;
use payment_sandbox::store::memory::MemoryStore;
use payment_sandbox::store::Store;
use payment_sandbox::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    seed_test_merchant(store.as_ref(), &cfg).await?;

    let random = Arc::new(ThreadRandom);
    let ids = IdGenerator {
        random: random.clone(),
    };
    let policy = OutcomePolicy {
        config: cfg.simulation.clone(),
        random,
    };

    let state = AppState {
        auth: AuthService {
            store: store.clone(),
        },
        orders: OrderService {
            store: store.clone(),
            ids: ids.clone(),
        },
        payments: PaymentService {
            store: store.clone(),
            ids,
            policy,
        },
        store,
        config: cfg.clone(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Seeds the well-known test merchant on first boot so integration clients
/// have working credentials. Subsequent boots leave the existing row alone.
async fn seed_test_merchant(store: &dyn Store, cfg: &AppConfig) -> anyhow::Result<()> {
    if store
        .merchant_by_email(&cfg.test_merchant_email)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let merchant = Merchant {
        id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000")?,
        name: "Test Merchant".to_string(),
        email: cfg.test_merchant_email.clone(),
        api_key: cfg.test_api_key.clone(),
        api_secret: cfg.test_api_secret.clone(),
    };
    store.insert_merchant(merchant).await?;
    tracing::info!(email = %cfg.test_merchant_email, "seeded test merchant");
    Ok(())
}
