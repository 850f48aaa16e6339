use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::catalog::application::domain::entities::VoteDirection;
use crate::catalog::application::ports::incoming::use_cases::{CreateReviewCommand, ReviewError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::ReviewResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    #[schema(example = 5)]
    pub rating: i64,
    #[schema(example = "Sweet and crunchy")]
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    #[schema(example = "up")]
    pub direction: String,
}

fn review_error_response(e: ReviewError) -> HttpResponse {
    match e {
        ReviewError::ProductNotFound => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        ReviewError::ReviewNotFound => ApiResponse::not_found("REVIEW_NOT_FOUND", "Review not found"),
        ReviewError::RepositoryError(ref msg) => {
            error!(error = %msg, "Review repository failure");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/reviews",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Reviews, newest first", body = inline(SuccessResponse<Vec<ReviewResponse>>)),
        (status = 404, description = "Missing or retired product", body = ErrorResponse),
    )
)]
#[get("/api/products/{id}/reviews")]
pub async fn list_reviews_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.list_reviews.execute(path.into_inner()).await {
        Ok(reviews) => ApiResponse::success(
            reviews
                .into_iter()
                .map(ReviewResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => review_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/reviews",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Product id")),
    request_body = CreateReviewRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Review created", body = inline(SuccessResponse<ReviewResponse>)),
        (status = 400, description = "Rating outside 1..5 or empty comment", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Missing or retired product", body = ErrorResponse),
    )
)]
#[post("/api/products/{id}/reviews")]
pub async fn create_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateReviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match CreateReviewCommand::new(req.rating, req.comment) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .catalog
        .create_review
        .execute(user.user_id, path.into_inner(), command)
        .await
    {
        Ok(review) => ApiResponse::created(ReviewResponse::from(review)),
        Err(e) => review_error_response(e),
    }
}

/// Up- or down-vote a review
#[utoipa::path(
    post,
    path = "/api/reviews/{id}/vote",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Review id")),
    request_body = VoteRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated counters", body = inline(SuccessResponse<ReviewResponse>)),
        (status = 400, description = "Direction is not up or down", body = ErrorResponse),
        (status = 404, description = "Unknown review", body = ErrorResponse),
    )
)]
#[post("/api/reviews/{id}/vote")]
pub async fn vote_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<VoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let direction: VoteDirection = match req.direction.parse() {
        Ok(direction) => direction,
        Err(e) => return ApiResponse::bad_request("INVALID_DIRECTION", &e.to_string()),
    };
    let review_id = path.into_inner();

    match data.catalog.vote_review.execute(review_id, direction).await {
        Ok(review) => {
            info!(user_id = %user.user_id, review_id = %review_id, ?direction, "Review voted");
            ApiResponse::success(ReviewResponse::from(review))
        }
        Err(e) => review_error_response(e),
    }
}
