use std::sync::Arc;

use crate::error::AppResult;
use domain::auth::AuthPrincipal;

/// Issues and verifies account credentials. Failures carry the provider's
/// own message in `AppError::ProviderError`.
#[async_trait::async_trait]
pub trait IdentityProviderPort: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthPrincipal>;
    async fn create_account(&self, email: &str, password: &str) -> AppResult<AuthPrincipal>;
}

pub type DynIdentityProviderPort = Arc<dyn IdentityProviderPort>;
