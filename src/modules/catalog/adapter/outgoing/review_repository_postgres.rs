use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Entity as UserEntity, Model as UserModel,
};
use crate::catalog::application::domain::entities::{Review, VoteDirection};
use crate::catalog::application::ports::outgoing::{
    NewReview, ReviewRepository, ReviewRepositoryError,
};

use super::sea_orm_entity::reviews::{
    ActiveModel as ReviewActiveModel, Column as ReviewColumn, Entity as ReviewEntity,
    Model as ReviewModel,
};

#[derive(Clone)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ReviewRepositoryError {
        ReviewRepositoryError::DatabaseError(e.to_string())
    }

    fn with_author((review, user): (ReviewModel, Option<UserModel>)) -> Review {
        review.to_review(user.map(|u| u.name).unwrap_or_default())
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn list_for_product(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<Review>, ReviewRepositoryError> {
        let rows = ReviewEntity::find()
            .filter(ReviewColumn::ProductId.eq(product_id))
            .order_by_desc(ReviewColumn::CreatedAt)
            .find_also_related(UserEntity)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(Self::with_author).collect())
    }

    async fn create(&self, review: NewReview) -> Result<Review, ReviewRepositoryError> {
        let active = ReviewActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(review.product_id),
            user_id: Set(review.user_id.value()),
            rating: Set(review.rating),
            comment: Set(review.comment),
            upvotes: Set(0),
            downvotes: Set(0),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        let author = UserEntity::find_by_id(inserted.user_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Self::with_author((inserted, author)))
    }

    async fn vote(
        &self,
        review_id: Uuid,
        direction: VoteDirection,
    ) -> Result<Review, ReviewRepositoryError> {
        let column = match direction {
            VoteDirection::Up => ReviewColumn::Upvotes,
            VoteDirection::Down => ReviewColumn::Downvotes,
        };

        let result = ReviewEntity::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(ReviewColumn::Id.eq(review_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ReviewRepositoryError::NotFound);
        }

        ReviewEntity::find_by_id(review_id)
            .find_also_related(UserEntity)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(Self::with_author)
            .ok_or(ReviewRepositoryError::NotFound)
    }
}
