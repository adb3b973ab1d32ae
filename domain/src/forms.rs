use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{DomainError, DomainResult};

/// Base64 text of a JPEG-encoded profile picture.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn new(encoded: impl Into<String>) -> DomainResult<Self> {
        let encoded = encoded.into();
        if encoded.is_empty() {
            return Err(DomainError::InvalidEncodedImage(
                "encoded image cannot be empty".to_string(),
            ));
        }
        Ok(Self(encoded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedImage({} chars)", self.0.len())
    }
}

/// Email and password as typed into the sign-in screen.
///
/// Every field is trimmed on construction, passwords included.
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub email: String,
    pub password: SecretString,
}

impl SignInForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: SecretString::from(password.trim()),
        }
    }

    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub avatar: Option<EncodedImage>,
}

impl SignUpForm {
    pub fn new(name: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: SecretString::from(password.trim()),
            confirm_password: SecretString::from(confirm_password.trim()),
            avatar: None,
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: Option<EncodedImage>) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    pub fn confirm_password(&self) -> &str {
        self.confirm_password.expose_secret()
    }
}
