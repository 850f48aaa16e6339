use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[serde(default)]
    #[schema(example = "Jane Shopper")]
    pub name: String,

    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "password123")]
    pub password: String,

    #[schema(example = "password123")]
    pub confirm_password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    #[schema(example = "Registration successful. Please check your email for the verification code.")]
    pub message: String,

    #[schema(example = "jane@example.com")]
    pub email: String,
}

/// Register a new customer account
///
/// Creates an unverified account and mails a six character verification code.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<SignupResponse>)),
        (
            status = 400,
            description = "Validation failed or email taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMAIL_ALREADY_EXISTS", "message": "Email already exists" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/signup")]
pub async fn signup_handler(
    req: web::Json<SignupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command =
        match RegisterUserCommand::new(dto.name, dto.email, dto.password, dto.confirm_password) {
            Ok(cmd) => cmd,
            Err(RegisterUserCommandError::PasswordMismatch) => {
                return ApiResponse::bad_request("PASSWORD_MISMATCH", "Passwords do not match");
            }
            Err(RegisterUserCommandError::Policy(e)) => {
                return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
            }
        };

    match data.account.register.register(command).await {
        Ok(output) => {
            info!(user_id = %output.user_id, "User registered");
            ApiResponse::created(SignupResponse {
                message: output.message,
                email: output.email,
            })
        }

        Err(RegisterUserError::EmailAlreadyExists) => {
            warn!("Registration rejected: email already exists");
            ApiResponse::bad_request("EMAIL_ALREADY_EXISTS", "Email already exists")
        }

        Err(RegisterUserError::HashingFailed(ref e))
        | Err(RegisterUserError::CodeStoreError(ref e))
        | Err(RegisterUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
