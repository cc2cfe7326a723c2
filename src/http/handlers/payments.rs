use crate::domain::payment::{CreatePaymentRequest, PaymentResponse};
use crate::error::GatewayError;
use crate::http::auth;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let merchant = auth::authenticate(&state, &headers).await?;
    let payment = state.payments.create_payment(&merchant, request).await?;
    Ok((StatusCode::CREATED, Json(PaymentResponse::from(&payment))))
}

pub async fn get_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let merchant = auth::authenticate(&state, &headers).await?;
    let payment = state.payments.get_payment(&merchant, &payment_id).await?;
    Ok(Json(PaymentResponse::from(&payment)))
}

pub async fn list_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    let merchant = auth::authenticate(&state, &headers).await?;
    let payments = state.payments.list_payments(&merchant).await?;
    let responses: Vec<PaymentResponse> = payments.iter().map(PaymentResponse::from).collect();
    Ok(Json(responses))
}
