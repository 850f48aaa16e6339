use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::AccountView;
use crate::auth::application::ports::incoming::use_cases::{
    DeleteAccountError, FetchProfileError, UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, route, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "Jane Shopper")]
    name: String,

    #[schema(example = "jane@example.com")]
    email: String,

    #[schema(example = true)]
    is_verified: bool,
}

impl From<AccountView> for ProfileResponse {
    fn from(view: AccountView) -> Self {
        Self {
            id: view.id.to_string(),
            name: view.name,
            email: view.email,
            is_verified: view.is_verified,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "Jane Q. Shopper")]
    pub name: Option<String>,

    #[schema(example = "jane.q@example.com")]
    pub email: Option<String>,
}

/// Fetch the caller's profile
#[utoipa::path(
    get,
    path = "/api/auth/account",
    tag = "account",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/api/auth/account")]
pub async fn get_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.fetch_profile.execute(user.user_id).await {
        Ok(view) => ApiResponse::success(ProfileResponse::from(view)),

        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchProfileError::QueryError(ref e)) => {
            error!(error = %e, "Profile lookup failed");
            ApiResponse::internal_error()
        }
    }
}

/// Update the caller's name and/or email
#[utoipa::path(
    put,
    path = "/api/auth/account",
    tag = "account",
    request_body = UpdateProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 400, description = "Validation failed or email taken", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[route("/api/auth/account", method = "PUT", method = "PATCH")]
pub async fn update_account_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match UpdateProfileCommand::new(dto.name, dto.email) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.account.update_profile.execute(user.user_id, command).await {
        Ok(view) => {
            info!(user_id = %user.user_id, "Profile updated");
            ApiResponse::success(ProfileResponse::from(view))
        }

        Err(UpdateProfileError::EmailAlreadyExists) => {
            ApiResponse::bad_request("EMAIL_ALREADY_EXISTS", "Email already exists")
        }

        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

/// Permanently delete the caller's account and everything it owns
#[utoipa::path(
    delete,
    path = "/api/auth/account",
    tag = "account",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[delete("/api/auth/account")]
pub async fn delete_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.delete_account.execute(user.user_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteAccountError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteAccountError::RepositoryError(ref e)) => {
            error!(error = %e, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}
