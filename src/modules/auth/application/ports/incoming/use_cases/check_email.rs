use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckEmailError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait CheckEmailUseCase: Send + Sync {
    /// `email` must already be normalized.
    async fn execute(&self, email: &str) -> Result<bool, CheckEmailError>;
}
