use std::io;
use thiserror::Error;

use domain::error::DomainError;
use domain::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Identity provider error: {message}")]
    ProviderError { message: String },

    #[error("Unable to sign in: {message}")]
    SignInFailed { message: String },

    #[error("Sign Up Failed: {message}")]
    SignUpFailed { message: String },

    #[error("Document store error: {message}")]
    StoreError { message: String },

    #[error("Failed to fetch user data.")]
    ProfileFetchFailed { message: String },

    #[error("Failed to save user data: {message}")]
    ProfileSaveFailed { message: String },

    #[error("Unable to open image: {message}")]
    ResourceError { message: String },

    #[error("Codec error: {message}")]
    CodecError { message: String },

    #[error("Task error: {message}")]
    TaskError { message: String },

    #[error("Preferences error: {message}")]
    PreferencesError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl AppError {
    /// The collaborator's own message, without the flow prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::ProviderError { message }
            | Self::SignInFailed { message }
            | Self::SignUpFailed { message }
            | Self::StoreError { message }
            | Self::ProfileFetchFailed { message }
            | Self::ProfileSaveFailed { message }
            | Self::ResourceError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
