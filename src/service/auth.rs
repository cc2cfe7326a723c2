use crate::domain::merchant::Merchant;
use crate::error::GatewayError;
use crate::store::Store;
use std::sync::Arc;

/// Resolves an API key/secret pair to a merchant. Any mismatch collapses
/// into the same generic failure so a caller cannot probe which credential
/// was wrong.
#[derive(Clone)]
pub struct AuthService {
    pub store: Arc<dyn Store>,
}

impl AuthService {
    pub async fn authenticate(
        &self,
        api_key: &str,
        api_secret: &str,
    ) -> Result<Merchant, GatewayError> {
        self.store
            .merchant_by_credentials(api_key, api_secret)
            .await
            .map_err(GatewayError::Storage)?
            .ok_or(GatewayError::Authentication)
    }
}
