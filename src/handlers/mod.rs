//! # HTTP Request Handlers Module
//!
//! 서비스별 HTTP 엔드포인트 핸들러입니다.
//! 핸들러는 요청 검증 후 `web::Data`로 주입된 서비스에 위임하고,
//! 에러는 [`AppError`]의 `ResponseError` 구현을 통해 일관된 JSON으로 변환됩니다.
//!
//! ```text
//! Client ──▶ Handlers (이 모듈) ──▶ Services ──▶ Repositories / Mail / Events
//! ```

use actix_web::{HttpResponse, error::JsonPayloadError, web};
use log::debug;

use crate::core::errors::AppError;

pub mod accounts;
pub mod auth;
pub mod authz;
pub mod gateway;
pub mod metrics;

/// JSON 본문 추출 설정
///
/// 역직렬화 실패(형식 오류, 잘못된 role 등)는 400 `ValidationError`로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("JSON 본문 파싱 실패: {}", err);

        let message = match &err {
            JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
            JsonPayloadError::Deserialize(e) => format!("Malformed request body: {}", e),
            other => format!("Malformed request body: {}", other),
        };

        AppError::ValidationError(message).into()
    })
}

/// `text/plain` 성공 응답
pub(crate) fn plain_text(message: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(message)
}
