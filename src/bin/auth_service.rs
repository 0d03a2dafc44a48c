//! 인증 서비스 (로그인, 액세스 토큰 갱신)

use std::sync::Arc;

use actix_web::web;
use log::info;

use identity_cell_backend::config::JwtConfig;
use identity_cell_backend::db::Database;
use identity_cell_backend::repositories::tokens::RefreshTokenRepository;
use identity_cell_backend::repositories::users::UserRepository;
use identity_cell_backend::routes::configure_auth_routes;
use identity_cell_backend::server::{bootstrap, run_http_server, startup_error};
use identity_cell_backend::services::auth::{AuthService, TokenService};
use identity_cell_backend::services::users::PasswordHasher;

const SERVICE_NAME: &str = "auth_service";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    bootstrap(SERVICE_NAME);

    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("JWT 설정 실패", e))?;
    info!("🔑 JWT 설정 로드됨: {:?}", jwt_config);

    info!("📡 데이터베이스 연결 중...");
    let database = Database::new(SERVICE_NAME)
        .await
        .map_err(|e| startup_error("데이터베이스 연결 실패", e))?;

    let refresh_token_repo = RefreshTokenRepository::new(&database);
    refresh_token_repo
        .create_indexes()
        .await
        .map_err(|e| startup_error("인덱스 생성 실패", e))?;

    let auth_service = web::Data::new(AuthService::new(
        Arc::new(UserRepository::new(&database)),
        Arc::new(refresh_token_repo),
        PasswordHasher::from_env(),
        TokenService::new(jwt_config),
    ));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    run_http_server(SERVICE_NAME, 8082, move |cfg| {
        cfg.app_data(auth_service.clone());
        configure_auth_routes(cfg);
    })
    .await
}
