//! Unauthenticated checkout endpoints. The order id acts as the
//! capability: resolving it (and its owning merchant) stands in for
//! credentials.

use crate::domain::order::PublicOrderResponse;
use crate::domain::payment::{CreatePaymentRequest, PaymentResponse};
use crate::error::GatewayError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_public_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let order = state
        .store
        .order_by_id(&order_id)
        .await
        .map_err(GatewayError::Storage)?
        .ok_or_else(|| GatewayError::not_found("Order not found"))?;

    // An order whose merchant has vanished is served as nonexistent.
    state
        .store
        .merchant_by_id(order.merchant_id)
        .await
        .map_err(GatewayError::Storage)?
        .ok_or_else(|| GatewayError::not_found("Order not found"))?;

    Ok(Json(PublicOrderResponse::from(&order)))
}

pub async fn create_public_payment(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let order = state
        .store
        .order_by_id(&request.order_id)
        .await
        .map_err(GatewayError::Storage)?
        .ok_or_else(|| GatewayError::not_found("Order not found"))?;

    let merchant = state
        .store
        .merchant_by_id(order.merchant_id)
        .await
        .map_err(GatewayError::Storage)?
        .ok_or_else(|| GatewayError::not_found("Order not found"))?;

    let payment = state.payments.create_payment(&merchant, request).await?;
    Ok((StatusCode::CREATED, Json(PaymentResponse::from(&payment))))
}
