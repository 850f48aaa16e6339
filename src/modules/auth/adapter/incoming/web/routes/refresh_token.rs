use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/token/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshTokenResponseBody>)),
        (status = 401, description = "Invalid, expired or revoked refresh token", body = ErrorResponse),
    )
)]
#[post("/api/auth/token/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.refresh_token.execute(&req.refresh_token).await {
        Ok(access_token) => ApiResponse::success(RefreshTokenResponseBody { access_token }),

        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }

        Err(RefreshTokenError::TokenRevoked) => {
            warn!("Refresh attempted with a revoked token");
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }

        Err(RefreshTokenError::InvalidToken) => {
            warn!("Refresh attempted with an invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e))
        | Err(RefreshTokenError::RepositoryError(ref e)) => {
            error!(error = %e, "Token refresh failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::RefreshTokenUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockRefresh(Result<String, RefreshTokenError>);

    #[async_trait]
    impl RefreshTokenUseCase for MockRefresh {
        async fn execute(&self, _refresh_token: &str) -> Result<String, RefreshTokenError> {
            self.0.clone()
        }
    }

    async fn post_refresh(mock: MockRefresh) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default().with_refresh_token(mock).build();
        let app =
            test::init_service(App::new().app_data(state).service(refresh_token_handler)).await;
        let req = test::TestRequest::post()
            .uri("/api/auth/token/refresh")
            .set_json(serde_json::json!({ "refresh_token": "some-refresh-token" }))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn refresh_returns_new_access_token() {
        let resp = post_refresh(MockRefresh(Ok("new-access".to_string()))).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["access_token"], "new-access");
    }

    #[actix_web::test]
    async fn revoked_token_is_unauthorized() {
        let resp = post_refresh(MockRefresh(Err(RefreshTokenError::TokenRevoked))).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "TOKEN_REVOKED");
    }

    #[actix_web::test]
    async fn expired_and_invalid_tokens_are_unauthorized() {
        let resp = post_refresh(MockRefresh(Err(RefreshTokenError::TokenExpired))).await;
        assert_eq!(resp.status(), 401);

        let resp = post_refresh(MockRefresh(Err(RefreshTokenError::InvalidToken))).await;
        assert_eq!(resp.status(), 401);
    }
}
