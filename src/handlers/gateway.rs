//! Identity Gateway Proxy Handler
//!
//! 공개 경로를 내부 서비스 경로로 바꿔 업스트림에 그대로 전달합니다.
//!
//! | 공개 경로 | 업스트림 |
//! |-----------|----------|
//! | `/identity-cell/auth/**` | `{AUTH_SERVICE_URL}/api/v1/auth/**` |
//! | `/identity-cell/accounts/**` | `{ACCOUNT_SERVICE_URL}/api/v1/accounts/**` |
//!
//! 메서드, 쿼리 문자열, 헤더(hop-by-hop 제외), 본문은 양방향으로 그대로 전달됩니다.

use std::time::Duration;

use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};
use log::{debug, error};

use crate::{
    config::GatewayConfig,
    core::errors::{AppError, AppResult},
};

/// 전달하지 않는 연결 단위 헤더
const HOP_BY_HOP_HEADERS: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "trailers",
    "transfer-encoding",
    "upgrade",
];

/// 프록시 라우트 한 개
#[derive(Debug, Clone)]
pub struct ProxyRoute {
    pub public_prefix: String,
    pub upstream: String,
    pub internal_prefix: String,
}

impl ProxyRoute {
    pub fn new(public_prefix: &str, upstream: &str, internal_prefix: &str) -> Self {
        Self {
            public_prefix: public_prefix.to_string(),
            upstream: upstream.trim_end_matches('/').to_string(),
            internal_prefix: internal_prefix.to_string(),
        }
    }
}

/// 게이트웨이 프록시
pub struct GatewayProxy {
    client: reqwest::Client,
    routes: Vec<ProxyRoute>,
}

impl GatewayProxy {
    pub fn new(config: &GatewayConfig) -> AppResult<Self> {
        let routes = vec![
            ProxyRoute::new("/identity-cell/auth", &config.auth_service_url, "/api/v1/auth"),
            ProxyRoute::new(
                "/identity-cell/accounts",
                &config.account_service_url,
                "/api/v1/accounts",
            ),
        ];

        Self::with_routes(routes)
    }

    pub fn with_routes(routes: Vec<ProxyRoute>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { client, routes })
    }

    /// 공개 경로와 쿼리 문자열로 업스트림 URL을 계산합니다.
    pub fn resolve(&self, path: &str, query: &str) -> Option<String> {
        self.routes.iter().find_map(|route| {
            rewrite_path(path, &route.public_prefix, &route.internal_prefix).map(|internal| {
                if query.is_empty() {
                    format!("{}{}", route.upstream, internal)
                } else {
                    format!("{}{}?{}", route.upstream, internal, query)
                }
            })
        })
    }
}

/// `public_prefix`로 시작하는 경로를 `internal_prefix` 기준으로 바꿉니다.
///
/// 접두사는 경로 세그먼트 단위로만 일치합니다 (`/identity-cell/authx`는 불일치).
pub fn rewrite_path(path: &str, public_prefix: &str, internal_prefix: &str) -> Option<String> {
    let rest = path.strip_prefix(public_prefix)?;

    if rest.is_empty() || rest.starts_with('/') {
        Some(format!("{}{}", internal_prefix, rest))
    } else {
        None
    }
}

fn is_forwardable(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    !HOP_BY_HOP_HEADERS.contains(&name.as_str()) && name != "host" && name != "content-length"
}

/// 프록시 핸들러
///
/// 업스트림에 연결할 수 없으면 `ExternalServiceError`(500)를 반환합니다.
pub async fn forward(
    proxy: web::Data<GatewayProxy>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let target = proxy
        .resolve(req.path(), req.query_string())
        .ok_or_else(|| AppError::NotFound(format!("No route for {}", req.path())))?;

    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|e| AppError::BadRequest(format!("Unsupported method: {}", e)))?;

    debug!("프록시 전달: {} {} -> {}", req.method(), req.path(), target);

    let mut upstream_request = proxy.client.request(method, &target);
    for (name, value) in req.headers() {
        if !is_forwardable(name.as_str()) {
            continue;
        }
        if let Ok(value) = value.to_str() {
            upstream_request = upstream_request.header(name.as_str(), value);
        }
    }

    let upstream_response = upstream_request
        .body(body.to_vec())
        .send()
        .await
        .map_err(|e| {
            error!("업스트림 요청 실패: {} - {}", target, e);
            AppError::ExternalServiceError(format!("Upstream request failed: {}", e))
        })?;

    let status = StatusCode::from_u16(upstream_response.status().as_u16())
        .map_err(|e| AppError::ExternalServiceError(format!("Invalid upstream status: {}", e)))?;

    let mut response = HttpResponse::build(status);
    for (name, value) in upstream_response.headers() {
        if !is_forwardable(name.as_str()) {
            continue;
        }
        if let Ok(value) = value.to_str() {
            response.append_header((name.as_str(), value));
        }
    }

    let payload = upstream_response
        .bytes()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("Upstream body read failed: {}", e)))?;

    Ok(response.body(payload))
}
