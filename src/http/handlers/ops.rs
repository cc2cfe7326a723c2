use crate::domain::order::format_local;
use crate::error::GatewayError;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

/// Store reachability probe. Always 200; the body says whether the store
/// answered.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let (status, database) = match state.store.merchant_count().await {
        Ok(_) => ("healthy", "connected"),
        Err(err) => {
            tracing::error!("health probe failed: {err:#}");
            ("unhealthy", "disconnected")
        }
    };

    Json(serde_json::json!({
        "status": status,
        "database": database,
        "timestamp": format_local(chrono::Local::now().naive_local()),
    }))
}

/// Exposes the seeded test merchant so integration clients can bootstrap
/// credentials without a database shell.
pub async fn test_merchant(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let merchant = state
        .store
        .merchant_by_email(&state.config.test_merchant_email)
        .await
        .map_err(GatewayError::Storage)?
        .ok_or_else(|| GatewayError::not_found("Test merchant not found"))?;

    Ok(Json(serde_json::json!({
        "id": merchant.id.to_string(),
        "email": merchant.email,
        "api_key": merchant.api_key,
        "seeded": true,
    })))
}
