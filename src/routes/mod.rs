//! 서비스별 라우트 구성
//!
//! 바이너리마다 자신의 라우트 그룹과 `/health`만 등록합니다.
//!
//! | 바이너리 | 라우트 그룹 |
//! |----------|-------------|
//! | `account_service` | `/api/v1/accounts` |
//! | `auth_service` | `/api/v1/auth` |
//! | `authz_service` | `/api/v1/authz` |
//! | `identity_gateway` | `/identity-cell/*`, `/metrics` |

use actix_web::{HttpResponse, middleware::from_fn, web};
use serde_json::json;

use crate::{handlers, middlewares::metrics::record_metrics};

pub fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/accounts")
            .service(handlers::accounts::register)
            .service(handlers::accounts::verify)
            .service(handlers::accounts::forgot_password)
            .service(handlers::accounts::reset_password),
    );
}

pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::refresh_token),
    );
}

pub fn configure_authz_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/authz").service(handlers::authz::validate));
}

/// 프록시 스코프와 `GET /metrics`
///
/// `/metrics`는 `web::Data<PrometheusHandle>`가 등록되어 있어야 합니다.
pub fn configure_gateway_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(handlers::metrics::metrics))
        .service(
            web::scope("/identity-cell")
                .wrap(from_fn(record_metrics))
                .default_service(web::to(handlers::gateway::forward)),
        );
}

/// `GET /health` 등록
pub fn configure_health(cfg: &mut web::ServiceConfig, service_name: &'static str) {
    cfg.route(
        "/health",
        web::get().to(move || async move { health_check(service_name) }),
    );
}

fn health_check(service_name: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": service_name,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
