//! # Application Error Handling System
//!
//! 아이덴티티 셀 서비스 전체가 공유하는 통합 에러 처리 시스템입니다.
//! 서비스 계층은 `AppError`만 반환하고, HTTP 계층은 `ResponseError` 구현을 통해
//! 상태 코드와 표준 에러 바디로 자동 변환합니다.
//!
//! ## 에러 응답 형식
//!
//! 모든 에러는 동일한 JSON 구조로 응답됩니다.
//!
//! ```json
//! {
//!   "status": 404,
//!   "message": "User not found",
//!   "error": "Not Found",
//!   "timestamp": "2026-01-01T00:00:00+00:00"
//! }
//! ```
//!
//! 필드 단위 검증 실패는 `errors` 객체(필드 → 메시지)가 추가됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 JSON, 형식 오류 |
//! | `FieldValidationError` | 400 Bad Request | DTO 필드 검증 실패 |
//! | `BadRequest` | 400 Bad Request | 잘못된 인증 코드, 만료된 재설정 토큰 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자/리프레시 토큰 |
//! | `ConflictError` | 409 Conflict | 중복 이메일 |
//! | `AuthenticationError` | 401 Unauthorized | 자격 증명 불일치, 유효하지 않은 토큰 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 이벤트 버스 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | SMTP, 업스트림 서비스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use std::collections::BTreeMap;

use actix_web::ResponseError;
use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 세 서비스(account, auth, authz)와 게이트웨이에서 발생할 수 있는 모든 에러를
/// 포괄합니다. `thiserror`로 `Error` trait을 구현하고,
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(doc! { "email": email }).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // Redis 에러 변환
/// conn.publish::<_, _, i64>(channel, payload).await
///     .map_err(|e| AppError::RedisError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// 연결 타임아웃, 쿼리 실패 등 MongoDB 연산 중 발생하는 오류입니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 이벤트 버스(Redis) 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    ///
    /// 요청 바디를 해석할 수 없거나 형식이 잘못된 경우입니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 검증 에러
    ///
    /// `validator`가 보고한 필드별 메시지를 그대로 보존합니다.
    /// 응답 바디의 `errors` 객체로 직렬화됩니다.
    #[error("Validation failed: {0:?}")]
    FieldValidationError(BTreeMap<String, String>),

    /// 비즈니스 규칙 위반 (잘못된 요청)
    ///
    /// 입력 형식은 올바르지만 현재 상태와 맞지 않는 요청입니다.
    ///
    /// # 발생 시나리오
    /// - 인증 코드 불일치 또는 이미 사용된 코드
    /// - 알 수 없는 비밀번호 재설정 토큰
    /// - 만료된 비밀번호 재설정 토큰
    /// - Authorization 헤더 누락
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// # 예제
    /// ```rust,ignore
    /// let user = users.find_by_email(email).await?
    ///     .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 이메일 유니크 인덱스 위반이 유일한 발생 경로입니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// # 발생 시나리오
    /// - 잘못된 로그인 정보
    /// - 만료된 리프레시 토큰
    /// - 서명이 맞지 않거나 만료된 JWT
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (SMTP 서버, 업스트림 HTTP 서비스)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 표준 에러 응답 바디
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub error: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl AppError {
    /// 클라이언트에게 노출할 메시지를 반환합니다.
    ///
    /// 5xx 에러는 내부 정보를 숨기고 일반 메시지로 대체합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg) => msg.clone(),
            AppError::FieldValidationError(_) => "Validation failed".to_string(),
            _ => "An internal server error occurred. Please try again later.".to_string(),
        }
    }

    /// 에러 응답 바디를 생성합니다.
    pub fn to_error_response(&self) -> ErrorResponse {
        let status = self.status_code();

        ErrorResponse {
            status: status.as_u16(),
            message: self.client_message(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            errors: match self {
                AppError::FieldValidationError(fields) => Some(fields.clone()),
                _ => None,
            },
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::FieldValidationError(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러의 경우 서버 로그에 원본 에러를 기록하고,
    /// 클라이언트에는 일반화된 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 서버 오류 발생: {}", self);
        }

        actix_web::HttpResponse::build(status).json(self.to_error_response())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.to_string(), message)
            })
            .collect();

        AppError::FieldValidationError(fields)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let secret = STANDARD.decode(raw).context("JWT_SECRET base64 디코딩 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
