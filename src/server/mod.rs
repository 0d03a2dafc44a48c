//! 서비스 공통 부트스트랩
//!
//! 네 개의 바이너리가 같은 방식으로 환경 파일을 읽고, 로깅을 초기화하고,
//! 같은 미들웨어 스택으로 HTTP 서버를 띄웁니다.
//!
//! 미들웨어 순서 (바깥 → 안):
//!
//! ```text
//! NormalizePath::trim → Logger → CORS → Governor(rate limit) → routes
//! ```

use std::io;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;
use log::{error, info};

use crate::config::ServerConfig;
use crate::handlers::json_config;
use crate::routes::configure_health;

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = Self {
            per_second,
            burst_size,
        };

        info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// `PROFILE`에 따라 `.env.prod` / `.env.dev` / `.env`를 로드합니다.
pub fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv::dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

pub fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 환경 파일 로드와 로깅 초기화를 한 번에 수행합니다.
///
/// `RUST_LOG`도 환경 파일에서 읽을 수 있도록 환경 파일을 먼저 로드합니다.
pub fn bootstrap(service_name: &str) {
    load_env_file();
    init_logging();

    info!("🚀 {} 시작중... (profile: {})",
        service_name,
        std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string())
    );
}

pub fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

/// 공통 미들웨어와 `/health`를 붙여 HTTP 서버를 실행합니다.
///
/// `configure`는 워커마다 호출되며 서비스 데이터와 라우트를 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let data = web::Data::new(ValidateService::new(token_service));
/// run_http_server("authz_service", 8083, move |cfg| {
///     cfg.app_data(data.clone());
///     configure_authz_routes(cfg);
/// })
/// .await
/// ```
pub async fn run_http_server<F>(
    service_name: &'static str,
    default_port: u16,
    configure: F,
) -> io::Result<()>
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let host = ServerConfig::host();
    let port = ServerConfig::port(default_port);

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate limit 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );
    info!("🌐 {}가 http://{}:{} 에서 실행중입니다", service_name, host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(json_config())
            .configure(|cfg| configure_health(cfg, service_name))
            .configure(configure.clone())
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

/// 시작 단계 에러를 `main`의 반환 타입으로 변환합니다.
pub fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    error!("❌ {}: {}", context, err);
    io::Error::other(format!("{}: {}", context, err))
}
