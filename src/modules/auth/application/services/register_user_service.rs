use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase, RegisteredUser,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
    VerificationCodeStore,
};

use super::secrets;
use super::VERIFICATION_CODE_TTL;

pub struct RegisterUserService<Q, R, C>
where
    Q: UserQuery,
    R: UserRepository,
    C: VerificationCodeStore,
{
    query: Q,
    repository: R,
    codes: C,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R, C> RegisterUserService<Q, R, C>
where
    Q: UserQuery,
    R: UserRepository,
    C: VerificationCodeStore,
{
    pub fn new(
        query: Q,
        repository: R,
        codes: C,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            codes,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R, C> RegisterUserUseCase for RegisterUserService<Q, R, C>
where
    Q: UserQuery,
    R: UserRepository,
    C: VerificationCodeStore,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError> {
        let existing = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                name: command.name().to_string(),
                email: command.email().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let code = secrets::verification_code();
        self.codes
            .store_code(&user.email, &code, VERIFICATION_CODE_TTL)
            .await
            .map_err(|e| RegisterUserError::CodeStoreError(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User account created");

        Ok(RegisteredUser {
            user_id: user.id,
            email: user.email,
            verification_code: code,
        })
    }
}
