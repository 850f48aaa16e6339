use async_trait::async_trait;

use crate::auth::application::domain::policies::{normalize_email, AccountPolicyError};

#[derive(Debug, Clone)]
pub struct VerifyEmailCommand {
    email: String,
    code: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyEmailCommandError {
    #[error(transparent)]
    Policy(#[from] AccountPolicyError),

    #[error("Verification code is required")]
    EmptyCode,
}

impl VerifyEmailCommand {
    pub fn new(email: String, code: String) -> Result<Self, VerifyEmailCommandError> {
        let email = normalize_email(&email)?;
        let code = code.trim().to_string();
        if code.is_empty() {
            return Err(VerifyEmailCommandError::EmptyCode);
        }

        Ok(Self { email, code })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyEmailError {
    /// Nothing stored for this email: never issued or past its TTL.
    #[error("Code expired or invalid")]
    CodeExpired,

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("User not found")]
    UserNotFound,

    #[error("Code store error: {0}")]
    CodeStoreError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait VerifyEmailUseCase: Send + Sync {
    async fn execute(&self, command: VerifyEmailCommand) -> Result<(), VerifyEmailError>;
}
