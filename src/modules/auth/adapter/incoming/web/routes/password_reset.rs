use super::verify_email::EmailRequest;
use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::application::domain::policies::normalize_email;
use crate::auth::application::ports::incoming::use_cases::{
    ConfirmPasswordResetCommand, ConfirmPasswordResetCommandError, ConfirmPasswordResetError,
    RequestPasswordResetError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

const RESET_REQUESTED: &str = "If the email exists, a reset link has been sent.";

#[derive(Deserialize, ToSchema)]
pub struct ConfirmPasswordResetRequest {
    #[schema(example = "Zp3kQ8...")]
    pub token: String,

    #[schema(example = "a-much-better-one")]
    pub new_password: String,

    #[schema(example = "a-much-better-one")]
    pub confirm_password: String,
}

/// Ask for a password reset link
///
/// Answers the same way whether or not the email is registered.
#[utoipa::path(
    post,
    path = "/api/auth/reset-password-request",
    tag = "auth",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Request accepted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 500, description = "Mail delivery failed", body = ErrorResponse),
    )
)]
#[post("/api/auth/reset-password-request")]
pub async fn request_password_reset_handler(
    req: web::Json<EmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = match normalize_email(&req.email) {
        Ok(email) => email,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.account.request_password_reset.execute(&email).await {
        Ok(()) => ApiResponse::success(MessageResponse::new(RESET_REQUESTED)),

        Err(RequestPasswordResetError::EmailDeliveryFailed(ref e)) => {
            error!(error = %e, "Password reset mail delivery failed");
            ApiResponse::internal_error_with_message("EMAIL_DELIVERY_FAILED", e)
        }

        Err(RequestPasswordResetError::RepositoryError(ref e)) => {
            error!(error = %e, "Password reset request failed");
            ApiResponse::internal_error()
        }
    }
}

/// Set a new password with a reset token
#[utoipa::path(
    post,
    path = "/api/auth/reset-password-confirm",
    tag = "auth",
    request_body = ConfirmPasswordResetRequest,
    responses(
        (status = 200, description = "Password reset", body = inline(SuccessResponse<MessageResponse>)),
        (
            status = 400,
            description = "Mismatch, weak password, or unusable token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_TOKEN", "message": "Invalid or expired token" }
            })
        ),
    )
)]
#[post("/api/auth/reset-password-confirm")]
pub async fn confirm_password_reset_handler(
    req: web::Json<ConfirmPasswordResetRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match ConfirmPasswordResetCommand::new(
        dto.token,
        dto.new_password,
        dto.confirm_password,
    ) {
        Ok(cmd) => cmd,
        Err(ConfirmPasswordResetCommandError::PasswordMismatch) => {
            return ApiResponse::bad_request("PASSWORD_MISMATCH", "Passwords do not match");
        }
        Err(ConfirmPasswordResetCommandError::EmptyToken) => {
            return ApiResponse::bad_request("INVALID_TOKEN", "Invalid or expired token");
        }
        Err(ConfirmPasswordResetCommandError::Policy(e)) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.account.confirm_password_reset.execute(command).await {
        Ok(()) => {
            info!("Password reset completed");
            ApiResponse::success(MessageResponse::new("Password has been reset successfully"))
        }

        Err(ConfirmPasswordResetError::InvalidToken) => {
            warn!("Password reset with an unusable token");
            ApiResponse::bad_request("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(ConfirmPasswordResetError::HashingFailed(ref e))
        | Err(ConfirmPasswordResetError::RepositoryError(ref e)) => {
            error!(error = %e, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}
