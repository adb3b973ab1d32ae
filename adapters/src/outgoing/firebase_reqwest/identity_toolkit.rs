use std::sync::Arc;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use chat_auth_application::{
    error::{AppError, AppResult},
    infrastructure_config::FirebaseConfig,
    ports::outgoing::identity_provider::IdentityProviderPort,
};
use domain::auth::{AuthPrincipal, UserId};

use super::error_message;
use super::session::FirebaseSession;

const SIGN_IN_ENDPOINT: &str = "signInWithPassword";
const SIGN_UP_ENDPOINT: &str = "signUp";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: Option<String>,
    id_token: Option<String>,
}

/// Email/password accounts through the Identity Toolkit REST API.
pub struct FirebaseIdentityAdapter {
    client: Client,
    base_url: String,
    api_key: SecretString,
    session: Arc<FirebaseSession>,
}

impl FirebaseIdentityAdapter {
    pub fn new(client: Client, config: &FirebaseConfig, session: Arc<FirebaseSession>) -> Self {
        Self {
            client,
            base_url: config.identity_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            session,
        }
    }

    async fn password_call(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> AppResult<AuthPrincipal> {
        let url = format!("{}/v1/accounts:{}", self.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&PasswordRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| AppError::ProviderError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ProviderError {
                message: error_message(status, &body),
            });
        }

        let account: AccountResponse =
            response.json().await.map_err(|e| AppError::ProviderError {
                message: format!("Malformed identity response: {e}"),
            })?;

        if let Some(token) = account.id_token {
            self.session.set_id_token(token);
        }

        debug!(user_id = %account.local_id, "Identity call succeeded");

        let principal = AuthPrincipal::new(UserId::parse(account.local_id)?);
        Ok(match account.email {
            Some(email) => principal.with_email(email),
            None => principal,
        })
    }
}

#[async_trait::async_trait]
impl IdentityProviderPort for FirebaseIdentityAdapter {
    #[instrument(skip(self, password))]
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthPrincipal> {
        self.password_call(SIGN_IN_ENDPOINT, email, password).await
    }

    #[instrument(skip(self, password))]
    async fn create_account(&self, email: &str, password: &str) -> AppResult<AuthPrincipal> {
        self.password_call(SIGN_UP_ENDPOINT, email, password).await
    }
}
