use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::AccountView;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileData {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserResult {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_verified: bool,
}

impl From<UserResult> for AccountView {
    fn from(user: UserResult) -> Self {
        AccountView {
            id: user.id,
            name: user.name,
            email: user.email,
            is_verified: user.is_verified,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<UserResult, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn mark_verified(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    /// Hard delete; dependent rows go with it through FK cascades.
    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
