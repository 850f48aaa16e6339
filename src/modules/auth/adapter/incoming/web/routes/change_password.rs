use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    #[schema(example = "password123")]
    pub old_password: String,

    #[schema(example = "a-much-better-one")]
    pub new_password: String,
}

/// Change the caller's password
#[utoipa::path(
    post,
    path = "/api/auth/account/change-password",
    tag = "account",
    request_body = ChangePasswordRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Password changed", body = inline(SuccessResponse<MessageResponse>)),
        (
            status = 400,
            description = "Wrong old password or weak new password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_OLD_PASSWORD", "message": "Old password is incorrect" }
            })
        ),
    )
)]
#[post("/api/auth/account/change-password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match ChangePasswordCommand::new(dto.old_password, dto.new_password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .account
        .change_password
        .execute(user.user_id, command)
        .await
    {
        Ok(()) => {
            info!(user_id = %user.user_id, "Password changed");
            ApiResponse::success(MessageResponse::new("Password changed successfully"))
        }

        Err(ChangePasswordError::InvalidOldPassword) => {
            warn!(user_id = %user.user_id, "Password change with wrong old password");
            ApiResponse::bad_request("INVALID_OLD_PASSWORD", "Old password is incorrect")
        }

        Err(ChangePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ChangePasswordError::HashingFailed(ref e))
        | Err(ChangePasswordError::RepositoryError(ref e)) => {
            error!(error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}
