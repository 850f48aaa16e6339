use async_trait::async_trait;

use crate::auth::application::ports::incoming::use_cases::{CheckEmailError, CheckEmailUseCase};
use crate::auth::application::ports::outgoing::UserQuery;

pub struct CheckEmailService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> CheckEmailService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> CheckEmailUseCase for CheckEmailService<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, email: &str) -> Result<bool, CheckEmailError> {
        self.query
            .find_by_email(email)
            .await
            .map(|user| user.is_some())
            .map_err(|e| CheckEmailError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::account_fakes::InMemoryUsers;

    #[tokio::test]
    async fn reports_existence() {
        let users = InMemoryUsers::new();
        users.seed("jane@example.com", "hashed:x", false);
        let service = CheckEmailService::new(users);

        assert!(service.execute("jane@example.com").await.unwrap());
        assert!(!service.execute("john@example.com").await.unwrap());
    }
}
