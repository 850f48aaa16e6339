use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccountView, UserId};
use crate::auth::application::domain::policies::{
    normalize_email, normalize_name, AccountPolicyError,
};

//
// ──────────────────────────────────────────────────────────
// Fetch
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<AccountView, FetchProfileError>;
}

//
// ──────────────────────────────────────────────────────────
// Update
// ──────────────────────────────────────────────────────────
//

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    name: Option<String>,
    email: Option<String>,
}

impl UpdateProfileCommand {
    pub fn new(name: Option<String>, email: Option<String>) -> Result<Self, AccountPolicyError> {
        let name = name.map(|n| normalize_name(&n)).transpose()?;
        let email = email.map(|e| normalize_email(&e)).transpose()?;

        Ok(Self { name, email })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        (self.name, self.email)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<AccountView, UpdateProfileError>;
}

//
// ──────────────────────────────────────────────────────────
// Delete
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAccountUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteAccountError>;
}
