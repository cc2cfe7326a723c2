use crate::domain::merchant::Merchant;
use crate::error::GatewayError;
use crate::AppState;
use axum::http::HeaderMap;

/// Runs the authentication gate against the credential headers. A missing
/// header authenticates as empty credentials and fails like any mismatch.
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Merchant, GatewayError> {
    let api_key = header_value(headers, "X-Api-Key");
    let api_secret = header_value(headers, "X-Api-Secret");
    state.auth.authenticate(api_key, api_secret).await
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
