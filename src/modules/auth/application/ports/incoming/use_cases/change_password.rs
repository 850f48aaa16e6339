use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::policies::{check_password, AccountPolicyError};

#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
    old_password: String,
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChangePasswordCommandError {
    #[error("Old password is required")]
    EmptyOldPassword,

    #[error(transparent)]
    Policy(#[from] AccountPolicyError),
}

impl ChangePasswordCommand {
    pub fn new(
        old_password: String,
        new_password: String,
    ) -> Result<Self, ChangePasswordCommandError> {
        if old_password.is_empty() {
            return Err(ChangePasswordCommandError::EmptyOldPassword);
        }
        check_password(&new_password)?;

        Ok(Self {
            old_password,
            new_password,
        })
    }

    pub fn old_password(&self) -> &str {
        &self.old_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Old password is incorrect")]
    InvalidOldPassword,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError>;
}
