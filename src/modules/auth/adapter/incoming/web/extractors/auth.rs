use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{TokenProvider, ACCESS_TOKEN};
use crate::shared::api::ApiResponse;

/// Caller identified by a valid access token (verified or not).
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub is_verified: bool,
    pub is_staff: bool,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let tokens = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;

    let claims = tokens.verify_token(&token).map_err(|_| {
        create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))
    })?;

    if claims.token_type != ACCESS_TOKEN {
        return Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        )));
    }

    Ok(AuthenticatedUser {
        user_id: UserId::from(claims.sub),
        is_verified: claims.is_verified,
        is_staff: claims.is_staff,
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// Authenticated caller with the staff flag.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub user_id: UserId,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).and_then(|user| {
            if !user.is_staff {
                return Err(create_api_error(ApiResponse::forbidden(
                    "FORBIDDEN",
                    "Staff access required",
                )));
            }
            Ok(AdminUser {
                user_id: user.user_id,
            })
        }))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::{bearer, EchoTokenProvider, StubTokenProvider};
    use actix_web::{get, test, App, HttpResponse, Responder};
    use uuid::Uuid;

    #[get("/me")]
    async fn me(user: AuthenticatedUser) -> impl Responder {
        HttpResponse::Ok().json(serde_json::json!({
            "user_id": user.user_id,
            "is_staff": user.is_staff,
        }))
    }

    #[get("/admin")]
    async fn admin(user: AdminUser) -> impl Responder {
        HttpResponse::Ok().json(serde_json::json!({ "user_id": user.user_id }))
    }

    fn echo_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(EchoTokenProvider);
        web::Data::new(provider)
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .app_data(StubTokenProvider::customer(Uuid::new_v4()).into_data())
                .service(me),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn refresh_token_is_not_accepted_as_access() {
        let app = test::init_service(App::new().app_data(echo_data()).service(me)).await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer refresh:{}", Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN_TYPE");
    }

    #[actix_web::test]
    async fn expired_token_is_unauthorized() {
        let app = test::init_service(App::new().app_data(echo_data()).service(me)).await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", "Bearer expired"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn valid_access_token_yields_user() {
        let user_id = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(StubTokenProvider::customer(user_id).into_data())
                .service(me),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["user_id"], user_id.to_string());
        assert_eq!(body["is_staff"], false);
    }

    #[actix_web::test]
    async fn admin_requires_staff_flag() {
        let customer = test::init_service(
            App::new()
                .app_data(StubTokenProvider::customer(Uuid::new_v4()).into_data())
                .service(admin),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(bearer())
            .to_request();
        assert_eq!(test::call_service(&customer, req).await.status(), 403);

        let staff = test::init_service(
            App::new()
                .app_data(StubTokenProvider::staff(Uuid::new_v4()).into_data())
                .service(admin),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(bearer())
            .to_request();
        assert_eq!(test::call_service(&staff, req).await.status(), 200);
    }
}
