use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::catalog::application::domain::entities::{Review, VoteDirection};

#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub product_id: Uuid,
    pub user_id: UserId,
    pub rating: i16,
    pub comment: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewRepositoryError {
    #[error("Review not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Newest first.
    async fn list_for_product(&self, product_id: Uuid)
        -> Result<Vec<Review>, ReviewRepositoryError>;

    async fn create(&self, review: NewReview) -> Result<Review, ReviewRepositoryError>;

    /// Increments the matching counter in a single UPDATE.
    async fn vote(
        &self,
        review_id: Uuid,
        direction: VoteDirection,
    ) -> Result<Review, ReviewRepositoryError>;
}
