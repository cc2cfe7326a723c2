use crate::domain::order::{CreateOrderRequest, OrderResponse};
use crate::error::GatewayError;
use crate::http::auth;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let merchant = auth::authenticate(&state, &headers).await?;
    let order = state.orders.create_order(&merchant, request).await?;
    Ok((StatusCode::CREATED, Json(OrderResponse::from(&order))))
}

pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let merchant = auth::authenticate(&state, &headers).await?;
    let order = state.orders.get_order(&merchant, &order_id).await?;
    Ok(Json(OrderResponse::from(&order)))
}

pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    let merchant = auth::authenticate(&state, &headers).await?;
    let orders = state.orders.list_orders(&merchant).await?;
    let responses: Vec<OrderResponse> = orders.iter().map(OrderResponse::from).collect();
    Ok(Json(responses))
}
