use super::verify_email::EmailRequest;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::policies::normalize_email;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct CheckEmailResponse {
    #[schema(example = false)]
    exists: bool,
}

/// Check whether an email address is already registered
#[utoipa::path(
    post,
    path = "/api/auth/check-email",
    tag = "auth",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Lookup result", body = inline(SuccessResponse<CheckEmailResponse>)),
        (status = 400, description = "Malformed email", body = ErrorResponse),
    )
)]
#[post("/api/auth/check-email")]
pub async fn check_email_handler(
    req: web::Json<EmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = match normalize_email(&req.email) {
        Ok(email) => email,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.account.check_email.execute(&email).await {
        Ok(exists) => ApiResponse::success(CheckEmailResponse { exists }),
        Err(e) => {
            error!(error = %e, "Email lookup failed");
            ApiResponse::internal_error()
        }
    }
}
