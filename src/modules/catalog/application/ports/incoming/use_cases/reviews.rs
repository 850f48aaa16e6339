use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::catalog::application::domain::entities::{Review, VoteDirection};
use crate::catalog::application::domain::policies::{check_review_rating, CatalogPolicyError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateReviewCommandError {
    #[error(transparent)]
    InvalidRating(#[from] CatalogPolicyError),

    #[error("Comment must not be empty")]
    EmptyComment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateReviewCommand {
    rating: i16,
    comment: String,
}

impl CreateReviewCommand {
    pub fn new(rating: i64, comment: String) -> Result<Self, CreateReviewCommandError> {
        let rating = check_review_rating(rating)?;
        let comment = comment.trim().to_string();
        if comment.is_empty() {
            return Err(CreateReviewCommandError::EmptyComment);
        }
        Ok(Self { rating, comment })
    }

    pub fn rating(&self) -> i16 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Review not found")]
    ReviewNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListReviewsUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<Vec<Review>, ReviewError>;
}

#[async_trait]
pub trait CreateReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserId,
        product_id: Uuid,
        command: CreateReviewCommand,
    ) -> Result<Review, ReviewError>;
}

#[async_trait]
pub trait VoteReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        review_id: Uuid,
        direction: VoteDirection,
    ) -> Result<Review, ReviewError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_is_trimmed() {
        let command = CreateReviewCommand::new(4, "  Crisp and sweet ".to_string()).unwrap();
        assert_eq!(command.comment(), "Crisp and sweet");
        assert_eq!(command.rating(), 4);
    }

    #[test]
    fn blank_comment_is_rejected() {
        assert_eq!(
            CreateReviewCommand::new(3, "   ".to_string()),
            Err(CreateReviewCommandError::EmptyComment)
        );
    }

    #[test]
    fn rating_outside_one_to_five_is_rejected() {
        assert_eq!(
            CreateReviewCommand::new(0, "ok".to_string()),
            Err(CreateReviewCommandError::InvalidRating(
                CatalogPolicyError::ReviewRatingOutOfRange
            ))
        );
    }
}
