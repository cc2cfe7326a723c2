pub mod config;
pub mod domain {
    pub mod merchant;
    pub mod order;
    pub mod payment;
}
pub mod error;
pub mod http {
    pub mod auth;
    pub mod handlers {
        pub mod ops;
        pub mod orders;
        pub mod payments;
        pub mod public;
    }
    pub mod router;
}
pub mod ids;
pub mod rng;
pub mod service {
    pub mod auth;
    pub mod order_service;
    pub mod payment_service;
}
pub mod simulator;
pub mod store;
pub mod validation {
    pub mod card;
    pub mod expiry;
    pub mod vpa;
}

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub auth: service::auth::AuthService,
    pub orders: service::order_service::OrderService,
    pub payments: service::payment_service::PaymentService,
    pub store: Arc<dyn store::Store>,
    pub config: config::AppConfig,
}
