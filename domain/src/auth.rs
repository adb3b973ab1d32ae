use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Opaque account identifier assigned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::InvalidUserId(
                "user id cannot be empty".to_string(),
            ));
        }
        if raw.contains('/') {
            return Err(DomainError::InvalidUserId(format!(
                "user id '{raw}' cannot contain '/'"
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The account the identity provider vouched for after a successful
/// authenticate or create-account call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPrincipal {
    pub uid: UserId,
    pub email: Option<String>,
}

impl AuthPrincipal {
    pub fn new(uid: UserId) -> Self {
        Self { uid, email: None }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
