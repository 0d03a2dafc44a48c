//! 계정 서비스 설정
//!
//! 비밀번호 재설정 링크, SMTP 메일 발송, 계정 이벤트 발행 설정을 관리합니다.

use std::env;

/// 계정 워크플로 설정
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// 재설정 링크의 기본 URL. 토큰은 `?token=` 쿼리로 붙습니다.
    pub reset_url_base: String,
}

impl AccountConfig {
    /// `APP_RESET_URL_BASE` (기본값: "http://localhost:3000/reset-password")
    pub fn from_env() -> Self {
        Self {
            reset_url_base: env::var("APP_RESET_URL_BASE")
                .unwrap_or_else(|_| "http://localhost:3000/reset-password".to_string()),
        }
    }
}

/// SMTP 메일 발송 설정
///
/// # 환경 변수
///
/// ```bash
/// SMTP_HOST=smtp.gmail.com
/// SMTP_PORT=587
/// SMTP_USERNAME=no-reply@udeajobs.com
/// SMTP_PASSWORD=app-password
/// MAIL_FROM=no-reply@udeajobs.com   # 생략 시 SMTP_USERNAME
/// ```
#[derive(Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

impl MailConfig {
    /// 환경 변수에서 SMTP 설정을 로드합니다.
    ///
    /// `SMTP_HOST`가 없으면 `None`을 반환하며, 이 경우 메일은 로그로만 기록됩니다.
    pub fn from_env() -> Option<Self> {
        let host = env::var("SMTP_HOST").ok().filter(|h| !h.trim().is_empty())?;
        let username = env::var("SMTP_USERNAME").unwrap_or_default();

        Some(Self {
            host,
            port: env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            password: env::var("SMTP_PASSWORD").unwrap_or_default(),
            from: env::var("MAIL_FROM").unwrap_or_else(|_| username.clone()),
            username,
        })
    }
}

/// 계정 이벤트 발행 설정
#[derive(Debug, Clone)]
pub struct EventConfig {
    pub redis_url: String,
    pub exchange: String,
    pub routing_key: String,
}

impl EventConfig {
    /// `REDIS_URL`, `EVENT_EXCHANGE`, `EVENT_ROUTING_KEY`를 읽습니다.
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            exchange: env::var("EVENT_EXCHANGE").unwrap_or_else(|_| "account.exchange".to_string()),
            routing_key: env::var("EVENT_ROUTING_KEY").unwrap_or_else(|_| "user.verified".to_string()),
        }
    }

    /// 이벤트가 발행될 채널 이름 (`{exchange}.{routing_key}`)
    pub fn channel(&self) -> String {
        format!("{}.{}", self.exchange, self.routing_key)
    }
}
