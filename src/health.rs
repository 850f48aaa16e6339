use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

fn label(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "unhealthy"
    }
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn database_ok(db: &DatabaseConnection) -> bool {
    match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "Readiness: database check failed");
            false
        }
    }
}

async fn redis_ok(pool: &Pool) -> bool {
    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!(error = %e, "Readiness: redis pool unavailable");
            return false;
        }
    };

    match deadpool_redis::redis::cmd("PING")
        .query_async::<String>(&mut conn)
        .await
    {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "Readiness: redis PING failed");
            false
        }
    }
}

/// READINESS PROBE
/// - Checks the database and Redis
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let database = database_ok(&db).await;
    let cache = redis_ok(&redis).await;

    let body = ReadinessResponse {
        status: label(database && cache),
        database: label(database),
        redis: label(cache),
    };

    if database && cache {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
