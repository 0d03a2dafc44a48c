//! Account HTTP Handlers
//!
//! 회원 가입, 이메일 인증, 비밀번호 재설정 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/accounts/register` | 회원 가입 | 201 Created |
//! | `POST` | `/api/v1/accounts/verify` | 이메일 인증 | 200 OK |
//! | `POST` | `/api/v1/accounts/forgot-password` | 재설정 메일 요청 | 200 OK |
//! | `POST` | `/api/v1/accounts/reset-password` | 비밀번호 재설정 | 200 OK |

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use super::plain_text;
use crate::{
    core::errors::AppError,
    domain::dto::users::{
        request::{ForgotPasswordRequest, RegistrationRequest, ResetPasswordRequest, VerificationRequest},
        response::UserResponse,
    },
    services::accounts::AccountService,
};

/// 회원 가입 핸들러
///
/// 응답에는 비밀번호 해시와 인증 코드가 포함되지 않습니다.
///
/// # Endpoint
/// `POST /api/v1/accounts/register`
#[post("/register")]
pub async fn register(
    service: web::Data<AccountService>,
    payload: web::Json<RegistrationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// # Endpoint
/// `POST /api/v1/accounts/verify`
#[post("/verify")]
pub async fn verify(
    service: web::Data<AccountService>,
    payload: web::Json<VerificationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    service.verify(&payload.email, &payload.code).await?;

    Ok(plain_text("User verified successfully"))
}

/// # Endpoint
/// `POST /api/v1/accounts/forgot-password`
#[post("/forgot-password")]
pub async fn forgot_password(
    service: web::Data<AccountService>,
    payload: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    service.forgot_password(&payload.email).await?;

    Ok(plain_text("Password reset code sent to your email"))
}

/// # Endpoint
/// `POST /api/v1/accounts/reset-password`
#[post("/reset-password")]
pub async fn reset_password(
    service: web::Data<AccountService>,
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    service.reset_password(&payload.token, &payload.new_password).await?;

    Ok(plain_text("Password reset successfully"))
}
