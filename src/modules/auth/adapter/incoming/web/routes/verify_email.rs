use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::application::domain::policies::normalize_email;
use crate::auth::application::ports::incoming::use_cases::{
    ResendVerificationError, VerifyEmailCommand, VerifyEmailError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyEmailRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[serde(alias = "verificationCode")]
    #[schema(example = "A1B2C3")]
    pub verification_code: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EmailRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,
}

/// Verify an email address with the mailed code
#[utoipa::path(
    post,
    path = "/api/auth/verify-email",
    tag = "auth",
    request_body = VerifyEmailRequest,
    responses(
        (status = 200, description = "Email verified", body = inline(SuccessResponse<MessageResponse>)),
        (
            status = 400,
            description = "Code expired or wrong",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "CODE_EXPIRED", "message": "Code expired or invalid" }
            })
        ),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[post("/api/auth/verify-email")]
pub async fn verify_email_handler(
    req: web::Json<VerifyEmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match VerifyEmailCommand::new(dto.email, dto.verification_code) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.account.verify_email.execute(command).await {
        Ok(()) => ApiResponse::success(MessageResponse::new("Email verified successfully")),

        Err(VerifyEmailError::CodeExpired) => {
            ApiResponse::bad_request("CODE_EXPIRED", "Code expired or invalid")
        }

        Err(VerifyEmailError::InvalidCode) => {
            warn!("Email verification rejected: wrong code");
            ApiResponse::bad_request("INVALID_CODE", "Invalid verification code")
        }

        Err(VerifyEmailError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(VerifyEmailError::CodeStoreError(ref e))
        | Err(VerifyEmailError::RepositoryError(ref e)) => {
            error!(error = %e, "Email verification failed");
            ApiResponse::internal_error()
        }
    }
}

/// Send a fresh verification code
#[utoipa::path(
    post,
    path = "/api/auth/resend-verification-email",
    tag = "auth",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Code sent", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Already verified", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Mail delivery failed", body = ErrorResponse),
    )
)]
#[post("/api/auth/resend-verification-email")]
pub async fn resend_verification_handler(
    req: web::Json<EmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = match normalize_email(&req.email) {
        Ok(email) => email,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.account.resend_verification.execute(&email).await {
        Ok(()) => {
            info!("Verification code re-sent");
            ApiResponse::success(MessageResponse::new("Verification email sent"))
        }

        Err(ResendVerificationError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ResendVerificationError::AlreadyVerified) => {
            ApiResponse::bad_request("ALREADY_VERIFIED", "Email is already verified")
        }

        Err(ResendVerificationError::EmailDeliveryFailed(ref e)) => {
            error!(error = %e, "Verification mail delivery failed");
            ApiResponse::internal_error_with_message("EMAIL_DELIVERY_FAILED", e)
        }

        Err(ResendVerificationError::CodeStoreError(ref e))
        | Err(ResendVerificationError::QueryError(ref e)) => {
            error!(error = %e, "Resend verification failed");
            ApiResponse::internal_error()
        }
    }
}
