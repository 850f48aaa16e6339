use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Spending summary for the caller
///
/// Order count, total spent, the five most recent orders and spend per month.
#[utoipa::path(
    get,
    path = "/api/auth/dashboard",
    tag = "account",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    )
)]
#[get("/api/auth/dashboard")]
pub async fn dashboard_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.dashboard.execute(user.user_id).await {
        Ok(dashboard) => ApiResponse::success(dashboard),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Dashboard query failed");
            ApiResponse::internal_error()
        }
    }
}
