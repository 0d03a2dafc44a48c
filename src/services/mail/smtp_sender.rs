//! lettre 기반 SMTP 메일 발송
//!
//! STARTTLS 릴레이와 계정 인증을 사용합니다.
//! 전송 계층은 [`Mailer`] trait 뒤에 두어 메시지 구성 로직을 네트워크 없이 테스트합니다.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use log::{error, info};

use super::{MailSender, OutgoingMail};
use crate::{
    config::MailConfig,
    core::errors::{AppError, AppResult},
};

/// 완성된 메시지를 실제로 전송하는 계층
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, message: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn deliver(&self, message: Message) -> Result<(), String> {
        AsyncTransport::send(self, message)
            .await
            .map(|_response| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpMailSender {
    mailer: Box<dyn Mailer>,
    from: String,
}

impl SmtpMailSender {
    /// SMTP 설정으로 발송기를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 릴레이 호스트 설정 실패
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AppError::InternalError(format!("SMTP 릴레이 설정 실패: {}", e)))?
            .port(config.port)
            .credentials(credentials)
            .build();

        info!("✅ SMTP 메일 발송기 초기화: {}:{}", config.host, config.port);

        Ok(Self::with_mailer(Box::new(transport), &config.from))
    }

    pub fn with_mailer(mailer: Box<dyn Mailer>, from: &str) -> Self {
        Self {
            mailer,
            from: from.to_string(),
        }
    }

    fn build_message(&self, mail: &OutgoingMail) -> AppResult<Message> {
        let from = self.from.parse::<Mailbox>().map_err(|e| {
            AppError::InternalError(format!("발신 주소 형식 오류: {}", e))
        })?;
        let to = mail.to.parse::<Mailbox>().map_err(|e| {
            AppError::ExternalServiceError(format!("수신 주소 형식 오류: {}", e))
        })?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(mail.html_body.clone())
            .map_err(|e| AppError::InternalError(format!("메일 메시지 생성 실패: {}", e)))
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
        info!("메일 발송 시작: {} ({})", mail.to, mail.subject);

        let message = self.build_message(&mail)?;

        self.mailer.deliver(message).await.map_err(|e| {
            error!("메일 발송 실패: {} - {}", mail.to, e);
            AppError::ExternalServiceError(format!("Error sending email: {}", e))
        })?;

        info!("메일 발송 완료: {}", mail.to);
        Ok(())
    }
}
