//! 요청 메트릭 미들웨어
//!
//! 게이트웨이를 지나는 요청마다 라우트별 카운터와 지연 시간 히스토그램을 기록합니다.
//! 수집된 값은 `GET /metrics`에서 Prometheus 텍스트 형식으로 노출됩니다.
//!
//! | 메트릭 | 종류 | 레이블 |
//! |--------|------|--------|
//! | `gateway_http_requests_total` | counter | method, route, status |
//! | `gateway_http_request_duration_seconds` | histogram | method, route, status |

use std::sync::OnceLock;
use std::time::Instant;

use actix_web::{
    Error,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};
use log::info;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::core::errors::{AppError, AppResult};

pub const HTTP_REQUESTS_TOTAL: &str = "gateway_http_requests_total";
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "gateway_http_request_duration_seconds";

// 전역 레코더는 프로세스당 한 번만 설치할 수 있음
static PROMETHEUS_HANDLE: OnceLock<Result<PrometheusHandle, String>> = OnceLock::new();

/// Prometheus 레코더를 설치하고 렌더링 핸들을 반환합니다.
///
/// 두 번째 호출부터는 이미 설치된 레코더의 핸들을 돌려줍니다.
///
/// # Errors
///
/// * `AppError::InternalError` - 다른 전역 레코더가 이미 설치되어 있음
pub fn init_metrics() -> AppResult<PrometheusHandle> {
    PROMETHEUS_HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .map_err(|e| e.to_string())?;
            info!("📈 Prometheus 메트릭 레코더 설치 완료");
            Ok(handle)
        })
        .clone()
        .map_err(|e| AppError::InternalError(format!("메트릭 레코더 설치 실패: {}", e)))
}

/// 요청 처리 시간과 결과 상태를 기록하는 미들웨어
///
/// ```rust,ignore
/// web::scope("/identity-cell").wrap(middleware::from_fn(record_metrics))
/// ```
pub async fn record_metrics(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let start = Instant::now();
    let method = req.method().to_string();
    let route = route_label(req.path());

    let response = next.call(req).await?;

    record_http_request(&method, &route, response.status().as_u16(), start.elapsed().as_secs_f64());
    Ok(response)
}

pub fn record_http_request(method: &str, route: &str, status: u16, duration_seconds: f64) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];

    counter!(HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_seconds);
}

/// 경로의 앞 두 세그먼트만 레이블로 사용합니다.
///
/// `/identity-cell/auth/login`과 `/identity-cell/auth/refresh-token`은 같은
/// `/identity-cell/auth` 레이블로 묶입니다.
pub fn route_label(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .take(2)
        .collect();

    format!("/{}", segments.join("/"))
}
