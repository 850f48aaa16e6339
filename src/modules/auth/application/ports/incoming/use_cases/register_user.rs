use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policies::{
    check_password, normalize_email, normalize_name, AccountPolicyError,
};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error(transparent)]
    Policy(#[from] AccountPolicyError),

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl RegisterUserCommand {
    pub fn new(
        name: String,
        email: String,
        password: String,
        confirm_password: String,
    ) -> Result<Self, RegisterUserCommandError> {
        let name = normalize_name(&name)?;
        let email = normalize_email(&email)?;
        check_password(&password)?;

        if password != confirm_password {
            return Err(RegisterUserCommandError::PasswordMismatch);
        }

        Ok(Self {
            name,
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Output / errors
// ──────────────────────────────────────────────────────────
//

/// The freshly created (unverified) account and the code to mail to it.
#[derive(Debug, Clone)]
pub struct RegisteredUser {
    pub user_id: Uuid,
    pub email: String,
    pub verification_code: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Verification code could not be stored: {0}")]
    CodeStoreError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<RegisteredUser, RegisterUserError>;
}
