//! SMTP 미설정 환경용 메일 발송기
//!
//! 실제로 메일을 보내지 않고 수신자와 제목만 로그로 남깁니다.
//! 본문에는 인증 코드나 재설정 토큰이 들어 있으므로 기록하지 않습니다.

use async_trait::async_trait;
use log::info;

use super::{MailSender, OutgoingMail};
use crate::core::errors::AppResult;

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMailSender;

#[async_trait]
impl MailSender for LoggingMailSender {
    async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
        info!("📧 [dev] 메일 발송 생략: {} ({})", mail.to, mail.subject);
        Ok(())
    }
}
