use async_trait::async_trait;

use crate::auth::application::domain::policies::{check_password, AccountPolicyError};

//
// ──────────────────────────────────────────────────────────
// Request
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Failed to send reset email: {0}")]
    EmailDeliveryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RequestPasswordResetUseCase: Send + Sync {
    /// Unknown emails succeed silently so callers cannot probe for accounts.
    async fn execute(&self, email: &str) -> Result<(), RequestPasswordResetError>;
}

//
// ──────────────────────────────────────────────────────────
// Confirm
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ConfirmPasswordResetCommand {
    token: String,
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfirmPasswordResetCommandError {
    #[error("Token is required")]
    EmptyToken,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error(transparent)]
    Policy(#[from] AccountPolicyError),
}

impl ConfirmPasswordResetCommand {
    pub fn new(
        token: String,
        new_password: String,
        confirm_password: String,
    ) -> Result<Self, ConfirmPasswordResetCommandError> {
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(ConfirmPasswordResetCommandError::EmptyToken);
        }
        if new_password != confirm_password {
            return Err(ConfirmPasswordResetCommandError::PasswordMismatch);
        }
        check_password(&new_password)?;

        Ok(Self {
            token,
            new_password,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfirmPasswordResetError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ConfirmPasswordResetUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ConfirmPasswordResetCommand,
    ) -> Result<(), ConfirmPasswordResetError>;
}
