//! 토큰 검증 서비스

use actix_web::web;
use log::info;

use identity_cell_backend::config::JwtConfig;
use identity_cell_backend::routes::configure_authz_routes;
use identity_cell_backend::server::{bootstrap, run_http_server, startup_error};
use identity_cell_backend::services::auth::TokenService;
use identity_cell_backend::services::authz::ValidateService;

const SERVICE_NAME: &str = "authz_service";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    bootstrap(SERVICE_NAME);

    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("JWT 설정 실패", e))?;
    info!("🔑 JWT 설정 로드됨: {:?}", jwt_config);

    let validate_service = web::Data::new(ValidateService::new(TokenService::new(jwt_config)));

    run_http_server(SERVICE_NAME, 8083, move |cfg| {
        cfg.app_data(validate_service.clone());
        configure_authz_routes(cfg);
    })
    .await
}
