//! 메일 발송 서비스 모듈
//!
//! 계정 서비스는 [`MailSender`] trait에만 의존합니다.
//! SMTP가 설정된 환경에서는 [`SmtpMailSender`]가, 그렇지 않은 개발 환경에서는
//! [`LoggingMailSender`]가 주입됩니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;

pub mod templates;
pub mod smtp_sender;
pub mod logging_sender;

pub use logging_sender::LoggingMailSender;
pub use smtp_sender::SmtpMailSender;
pub use templates::*;

/// 발송할 HTML 메일
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// 메일 발송 포트
#[async_trait]
pub trait MailSender: Send + Sync {
    /// 메일을 발송합니다. 실패 시 `AppError::ExternalServiceError`를 반환합니다.
    async fn send(&self, mail: OutgoingMail) -> AppResult<()>;
}
