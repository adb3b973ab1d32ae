use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::Error as HashError,
};
use chat_auth_application::error::{AppError, AppResult};
use password_hash::{SaltString, rand_core::OsRng};

/// Password hashing for the in-memory identity emulator, so it never keeps
/// plaintext passwords around.
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        let argon2 = Argon2::default();
        Self { argon2 }
    }

    pub fn with_custom_params(
        memory_cost: u32,
        time_cost: u32,
        parallelism: u32,
    ) -> AppResult<Self> {
        let params = Params::new(memory_cost, time_cost, parallelism, Some(32)).map_err(|e| {
            AppError::ConfigError {
                message: format!("Invalid Argon2 parameters: {}", e),
            }
        })?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        Ok(Self { argon2 })
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::ProviderError {
                message: format!("Failed to hash password: {}", e),
            })?;

        Ok(password_hash.to_string())
    }

    pub fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(password_hash).map_err(|e| AppError::ProviderError {
            message: format!("Invalid password hash format: {}", e),
        })?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AppError::ProviderError {
                message: format!("Password verification failed: {}", e),
            }),
        }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
