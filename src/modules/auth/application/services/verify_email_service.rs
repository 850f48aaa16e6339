use async_trait::async_trait;

use crate::auth::application::ports::incoming::use_cases::{
    VerifyEmailCommand, VerifyEmailError, VerifyEmailUseCase,
};
use crate::auth::application::ports::outgoing::{
    UserQuery, UserRepository, UserRepositoryError, VerificationCodeStore,
};

pub struct VerifyEmailService<Q, R, C>
where
    Q: UserQuery,
    R: UserRepository,
    C: VerificationCodeStore,
{
    query: Q,
    repository: R,
    codes: C,
}

impl<Q, R, C> VerifyEmailService<Q, R, C>
where
    Q: UserQuery,
    R: UserRepository,
    C: VerificationCodeStore,
{
    pub fn new(query: Q, repository: R, codes: C) -> Self {
        Self {
            query,
            repository,
            codes,
        }
    }
}

#[async_trait]
impl<Q, R, C> VerifyEmailUseCase for VerifyEmailService<Q, R, C>
where
    Q: UserQuery,
    R: UserRepository,
    C: VerificationCodeStore,
{
    async fn execute(&self, command: VerifyEmailCommand) -> Result<(), VerifyEmailError> {
        let stored = self
            .codes
            .get_code(command.email())
            .await
            .map_err(|e| VerifyEmailError::CodeStoreError(e.to_string()))?
            .ok_or(VerifyEmailError::CodeExpired)?;

        if stored != command.code() {
            return Err(VerifyEmailError::InvalidCode);
        }

        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| VerifyEmailError::RepositoryError(e.to_string()))?
            .ok_or(VerifyEmailError::UserNotFound)?;

        self.repository
            .mark_verified(user.id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => VerifyEmailError::UserNotFound,
                other => VerifyEmailError::RepositoryError(other.to_string()),
            })?;

        // a leftover code still expires with its TTL
        if let Err(e) = self.codes.delete_code(command.email()).await {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to delete verification code");
        }

        tracing::info!(user_id = %user.id, "Email verified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::account_fakes::{InMemoryCodes, InMemoryUsers};

    fn command(code: &str) -> VerifyEmailCommand {
        VerifyEmailCommand::new("jane@example.com".to_string(), code.to_string()).unwrap()
    }

    #[tokio::test]
    async fn correct_code_verifies_and_is_consumed() {
        let users = InMemoryUsers::new();
        let id = users.seed("jane@example.com", "hashed:x", false);
        let codes = InMemoryCodes::new();
        codes.insert("jane@example.com", "AB12CD");
        let service = VerifyEmailService::new(users.clone(), users.clone(), codes.clone());

        service.execute(command("AB12CD")).await.unwrap();

        assert!(users.get(id).unwrap().is_verified);
        assert!(codes.code_for("jane@example.com").is_none());
    }

    #[tokio::test]
    async fn wrong_code_is_rejected_and_kept() {
        let users = InMemoryUsers::new();
        let id = users.seed("jane@example.com", "hashed:x", false);
        let codes = InMemoryCodes::new();
        codes.insert("jane@example.com", "AB12CD");
        let service = VerifyEmailService::new(users.clone(), users.clone(), codes.clone());

        let result = service.execute(command("ZZZZZZ")).await;

        assert!(matches!(result, Err(VerifyEmailError::InvalidCode)));
        assert!(!users.get(id).unwrap().is_verified);
        assert_eq!(
            codes.code_for("jane@example.com").as_deref(),
            Some("AB12CD")
        );
    }

    #[tokio::test]
    async fn missing_code_means_expired() {
        let users = InMemoryUsers::new();
        users.seed("jane@example.com", "hashed:x", false);
        let service =
            VerifyEmailService::new(users.clone(), users.clone(), InMemoryCodes::new());

        let result = service.execute(command("AB12CD")).await;

        assert!(matches!(result, Err(VerifyEmailError::CodeExpired)));
    }

    #[tokio::test]
    async fn code_for_deleted_user_is_not_found() {
        let users = InMemoryUsers::new();
        let codes = InMemoryCodes::new();
        codes.insert("jane@example.com", "AB12CD");
        let service = VerifyEmailService::new(users.clone(), users, codes);

        let result = service.execute(command("AB12CD")).await;

        assert!(matches!(result, Err(VerifyEmailError::UserNotFound)));
    }
}
