use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LogoutRequestDto {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

/// Revoke the caller's refresh token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Invalid refresh token", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    req: web::Json<LogoutRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .account
        .logout
        .execute(user.user_id, &req.refresh_token)
        .await
    {
        Ok(()) => {
            info!(user_id = %user.user_id, "User logged out");
            ApiResponse::success(MessageResponse::new("Logged out successfully"))
        }

        Err(LogoutError::InvalidToken) => {
            warn!(user_id = %user.user_id, "Logout with an invalid refresh token");
            ApiResponse::bad_request("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(LogoutError::RepositoryError(ref e)) => {
            error!(error = %e, "Token revocation failed");
            ApiResponse::internal_error()
        }
    }
}
