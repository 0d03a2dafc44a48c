//! 계정 메일 템플릿
//!
//! 인증 코드 메일과 비밀번호 재설정 메일을 askama 템플릿(`templates/*.html`)으로 렌더링합니다.
//! `.html` 템플릿의 변수는 자동으로 HTML 이스케이프됩니다.

use askama::Template;

use super::OutgoingMail;
use crate::core::errors::{AppError, AppResult};

pub const VERIFICATION_SUBJECT: &str = "Verificación de cuenta - UdeAJobs";
pub const PASSWORD_RESET_SUBJECT: &str = "Recuperación de Contraseña - UdeAJobs";

#[derive(Template)]
#[template(path = "verification-email.html")]
struct VerificationEmailTemplate<'a> {
    username: &'a str,
    verification_code: &'a str,
}

#[derive(Template)]
#[template(path = "password-reset-link.html")]
struct PasswordResetLinkTemplate<'a> {
    username: &'a str,
    reset_url: &'a str,
}

/// 계정 인증 코드 메일
pub fn verification_email(
    to: &str,
    username: &str,
    verification_code: &str,
) -> AppResult<OutgoingMail> {
    let html_body = render(&VerificationEmailTemplate {
        username,
        verification_code,
    })?;

    Ok(OutgoingMail {
        to: to.to_string(),
        subject: VERIFICATION_SUBJECT.to_string(),
        html_body,
    })
}

/// 비밀번호 재설정 링크 메일
pub fn password_reset_email(to: &str, username: &str, reset_url: &str) -> AppResult<OutgoingMail> {
    let html_body = render(&PasswordResetLinkTemplate {
        username,
        reset_url,
    })?;

    Ok(OutgoingMail {
        to: to.to_string(),
        subject: PASSWORD_RESET_SUBJECT.to_string(),
        html_body,
    })
}

fn render(template: &impl Template) -> AppResult<String> {
    template
        .render()
        .map_err(|e| AppError::InternalError(format!("메일 템플릿 렌더링 실패: {}", e)))
}
