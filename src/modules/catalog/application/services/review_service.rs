use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::catalog::application::domain::entities::{Review, VoteDirection};
use crate::catalog::application::ports::incoming::use_cases::{
    CreateReviewCommand, CreateReviewUseCase, ListReviewsUseCase, ReviewError, VoteReviewUseCase,
};
use crate::catalog::application::ports::outgoing::{
    CatalogQuery, NewReview, ReviewRepository, ReviewRepositoryError,
};

pub struct ReviewService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    query: Q,
    reviews: R,
}

impl<Q, R> ReviewService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    pub fn new(query: Q, reviews: R) -> Self {
        Self { query, reviews }
    }

    async fn ensure_product(&self, product_id: Uuid) -> Result<(), ReviewError> {
        match self.query.find_product(product_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ReviewError::ProductNotFound),
            Err(e) => Err(ReviewError::RepositoryError(e.to_string())),
        }
    }
}

fn map_err(e: ReviewRepositoryError) -> ReviewError {
    match e {
        ReviewRepositoryError::NotFound => ReviewError::ReviewNotFound,
        ReviewRepositoryError::DatabaseError(msg) => ReviewError::RepositoryError(msg),
    }
}

#[async_trait]
impl<Q, R> ListReviewsUseCase for ReviewService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    async fn execute(&self, product_id: Uuid) -> Result<Vec<Review>, ReviewError> {
        self.ensure_product(product_id).await?;
        self.reviews
            .list_for_product(product_id)
            .await
            .map_err(map_err)
    }
}

#[async_trait]
impl<Q, R> CreateReviewUseCase for ReviewService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    async fn execute(
        &self,
        author: UserId,
        product_id: Uuid,
        command: CreateReviewCommand,
    ) -> Result<Review, ReviewError> {
        self.ensure_product(product_id).await?;

        let review = self
            .reviews
            .create(NewReview {
                product_id,
                user_id: author,
                rating: command.rating(),
                comment: command.comment().to_string(),
            })
            .await
            .map_err(map_err)?;

        tracing::info!(
            user_id = %author,
            product_id = %product_id,
            review_id = %review.id,
            "Review created"
        );
        Ok(review)
    }
}

#[async_trait]
impl<Q, R> VoteReviewUseCase for ReviewService<Q, R>
where
    Q: CatalogQuery,
    R: ReviewRepository,
{
    async fn execute(
        &self,
        review_id: Uuid,
        direction: VoteDirection,
    ) -> Result<Review, ReviewError> {
        self.reviews
            .vote(review_id, direction)
            .await
            .map_err(map_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::application::services::fakes::{
        product, review, InMemoryCatalog, InMemoryReviews,
    };

    fn command() -> CreateReviewCommand {
        CreateReviewCommand::new(4, "Fresh every time".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_review_for_existing_product() {
        let apple = product("Apple", None);
        let apple_id = apple.product.id;
        let reviews = InMemoryReviews::default();
        let svc = ReviewService::new(
            InMemoryCatalog::with(vec![], vec![apple]),
            reviews.clone(),
        );

        let created = CreateReviewUseCase::execute(
            &svc,
            UserId::from(Uuid::new_v4()),
            apple_id,
            command(),
        )
        .await
        .unwrap();

        assert_eq!(created.rating, 4);
        assert_eq!(created.helpfulness(), 0);
        assert_eq!(reviews.all().len(), 1);
    }

    #[tokio::test]
    async fn test_create_review_for_missing_product() {
        let reviews = InMemoryReviews::default();
        let svc = ReviewService::new(InMemoryCatalog::default(), reviews.clone());

        let result = CreateReviewUseCase::execute(
            &svc,
            UserId::from(Uuid::new_v4()),
            Uuid::new_v4(),
            command(),
        )
        .await;

        assert!(matches!(result, Err(ReviewError::ProductNotFound)));
        assert!(reviews.all().is_empty());
    }

    #[tokio::test]
    async fn test_list_reviews_for_missing_product() {
        let svc = ReviewService::new(InMemoryCatalog::default(), InMemoryReviews::default());

        let result = ListReviewsUseCase::execute(&svc, Uuid::new_v4()).await;

        assert!(matches!(result, Err(ReviewError::ProductNotFound)));
    }

    #[tokio::test]
    async fn test_votes_accumulate() {
        let apple = product("Apple", None);
        let reviews = InMemoryReviews::default();
        let existing = review(apple.product.id, "Good");
        reviews.insert(existing.clone());
        let svc = ReviewService::new(InMemoryCatalog::with(vec![], vec![apple]), reviews);

        VoteReviewUseCase::execute(&svc, existing.id, VoteDirection::Up)
            .await
            .unwrap();
        VoteReviewUseCase::execute(&svc, existing.id, VoteDirection::Up)
            .await
            .unwrap();
        let after = VoteReviewUseCase::execute(&svc, existing.id, VoteDirection::Down)
            .await
            .unwrap();

        assert_eq!((after.upvotes, after.downvotes), (2, 1));
        assert_eq!(after.helpfulness(), 1);
    }

    #[tokio::test]
    async fn test_vote_on_unknown_review() {
        let svc = ReviewService::new(InMemoryCatalog::default(), InMemoryReviews::default());

        let result = VoteReviewUseCase::execute(&svc, Uuid::new_v4(), VoteDirection::Down).await;

        assert!(matches!(result, Err(ReviewError::ReviewNotFound)));
    }
}
