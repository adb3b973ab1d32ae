use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    #[error("Invalid encoded image: {0}")]
    InvalidEncodedImage(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
