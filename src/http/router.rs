use crate::http::handlers::{ops, orders, payments, public};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;

/// The full route table, built in one place so tests can drive the router
/// without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/api/v1/test/merchant", get(ops::test_merchant))
        .route(
            "/api/v1/orders",
            post(orders::create_order).get(orders::list_orders),
        )
        .route("/api/v1/orders/:order_id", get(orders::get_order))
        .route(
            "/api/v1/orders/:order_id/public",
            get(public::get_public_order),
        )
        .route(
            "/api/v1/payments",
            post(payments::create_payment).get(payments::list_payments),
        )
        .route("/api/v1/payments/public", post(public::create_public_payment))
        .route("/api/v1/payments/:payment_id", get(payments::get_payment))
        .with_state(state)
}
