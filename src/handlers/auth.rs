//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 로그인과 리프레시 토큰 기반 액세스 토큰 갱신 엔드포인트입니다.
//!
//! - `POST /api/v1/auth/login` → `{accessToken, refreshToken, tokenType}`
//! - `POST /api/v1/auth/refresh-token` → `{accessToken, refreshToken}`

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::dto::{tokens::RefreshTokenRequest, users::request::LoginRequest},
    services::auth::AuthService,
};

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(
    service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 액세스 토큰 갱신 핸들러
///
/// 리프레시 토큰은 교체되지 않고 요청 값 그대로 반환됩니다.
///
/// # Endpoint
/// `POST /api/v1/auth/refresh-token`
#[post("/refresh-token")]
pub async fn refresh_token(
    service: web::Data<AuthService>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(response))
}
