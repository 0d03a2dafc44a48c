//! 게이트웨이 업스트림 설정

use std::env;

use crate::core::errors::{AppError, AppResult};

/// 게이트웨이가 요청을 전달할 내부 서비스 주소
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub account_service_url: String,
    pub auth_service_url: String,
}

impl GatewayConfig {
    /// `ACCOUNT_SERVICE_URL`, `AUTH_SERVICE_URL`은 필수입니다.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            account_service_url: required("ACCOUNT_SERVICE_URL")?,
            auth_service_url: required("AUTH_SERVICE_URL")?,
        })
    }
}

fn required(key: &str) -> AppResult<String> {
    env::var(key)
        .map(|url| url.trim_end_matches('/').to_string())
        .map_err(|_| AppError::InternalError(format!("{} 환경 변수가 설정되지 않았습니다", key)))
}
