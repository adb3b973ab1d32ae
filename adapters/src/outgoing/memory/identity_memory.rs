use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::task::spawn_blocking;
use tracing::{debug, instrument};
use uuid::Uuid;

use chat_auth_application::{
    error::{AppError, AppResult},
    ports::outgoing::identity_provider::IdentityProviderPort,
};
use domain::auth::{AuthPrincipal, UserId};

use crate::outgoing::json_file::snapshot::JsonSnapshot;
use crate::outgoing::passwords::argon2::Argon2PasswordHasher;

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone, Serialize, Deserialize)]
struct Account {
    uid: UserId,
    email: String,
    password_hash: String,
}

struct Accounts {
    by_email: DashMap<String, Account>,
    hasher: Argon2PasswordHasher,
    snapshot: Option<JsonSnapshot>,
}

/// Local stand-in for the identity provider. Errors use the same codes the
/// hosted provider returns, so screens show identical messages.
///
/// Hashing runs on tokio's blocking pool. With a snapshot file the accounts
/// survive restarts.
pub struct MemoryIdentityAdapter {
    accounts: Arc<Accounts>,
}

impl MemoryIdentityAdapter {
    pub fn new(hasher: Argon2PasswordHasher) -> Self {
        Self::with_snapshot(hasher, DashMap::new(), None)
    }

    /// Loads accounts from `path` and writes every new account back to it.
    pub fn persistent(hasher: Argon2PasswordHasher, path: &Path) -> AppResult<Self> {
        let snapshot = JsonSnapshot::new(path);
        let stored: BTreeMap<String, Account> = snapshot.load()?;
        debug!(accounts = stored.len(), "Emulator accounts loaded");

        Ok(Self::with_snapshot(
            hasher,
            stored.into_iter().collect(),
            Some(snapshot),
        ))
    }

    fn with_snapshot(
        hasher: Argon2PasswordHasher,
        by_email: DashMap<String, Account>,
        snapshot: Option<JsonSnapshot>,
    ) -> Self {
        Self {
            accounts: Arc::new(Accounts {
                by_email,
                hasher,
                snapshot,
            }),
        }
    }

    async fn run_blocking<T, F>(&self, job: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Accounts) -> AppResult<T> + Send + 'static,
    {
        let accounts = Arc::clone(&self.accounts);
        spawn_blocking(move || job(&accounts))
            .await
            .map_err(|e| AppError::TaskError {
                message: format!("identity emulator task failed: {e}"),
            })?
    }
}

impl Accounts {
    fn provider_error(code: &str) -> AppError {
        AppError::ProviderError {
            message: code.to_string(),
        }
    }

    fn key(email: &str) -> String {
        email.to_lowercase()
    }

    fn authenticate(&self, email: &str, password: &SecretString) -> AppResult<AuthPrincipal> {
        let account = self
            .by_email
            .get(&Self::key(email))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Self::provider_error("EMAIL_NOT_FOUND"))?;

        if !self
            .hasher
            .verify(password.expose_secret(), &account.password_hash)?
        {
            return Err(Self::provider_error("INVALID_PASSWORD"));
        }

        debug!(user_id = %account.uid, "Authenticated");
        Ok(AuthPrincipal::new(account.uid).with_email(account.email))
    }

    fn create_account(&self, email: &str, password: &SecretString) -> AppResult<AuthPrincipal> {
        if password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(Self::provider_error(
                "WEAK_PASSWORD : Password should be at least 6 characters",
            ));
        }

        let password_hash = self.hasher.hash(password.expose_secret())?;
        let uid = UserId::parse(Uuid::new_v4().simple().to_string())?;

        match self.by_email.entry(Self::key(email)) {
            Entry::Occupied(_) => return Err(Self::provider_error("EMAIL_EXISTS")),
            Entry::Vacant(slot) => {
                slot.insert(Account {
                    uid: uid.clone(),
                    email: email.to_string(),
                    password_hash,
                });
            }
        }

        self.persist()?;
        debug!(user_id = %uid, "Account created");
        Ok(AuthPrincipal::new(uid).with_email(email))
    }

    fn persist(&self) -> AppResult<()> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(());
        };
        snapshot.write_with(|| {
            self.by_email
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().clone()))
                .collect::<BTreeMap<_, _>>()
        })
    }
}

#[async_trait::async_trait]
impl IdentityProviderPort for MemoryIdentityAdapter {
    #[instrument(skip(self, password))]
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthPrincipal> {
        let email = email.to_string();
        let password = SecretString::from(password);
        self.run_blocking(move |accounts| accounts.authenticate(&email, &password))
            .await
    }

    #[instrument(skip(self, password))]
    async fn create_account(&self, email: &str, password: &str) -> AppResult<AuthPrincipal> {
        let email = email.to_string();
        let password = SecretString::from(password);
        self.run_blocking(move |accounts| accounts.create_account(&email, &password))
            .await
    }
}
