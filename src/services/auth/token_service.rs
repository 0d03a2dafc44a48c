//! JWT 토큰 관리 서비스 구현
//!
//! HMAC 서명 기반의 액세스 토큰 발급과 검증을 담당합니다.
//! auth 서비스는 발급에, authz 서비스는 검증에 같은 구현을 사용하며
//! 두 서비스는 동일한 [`JwtConfig`]를 주입받아야 합니다.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::debug;

use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult},
    domain::{entities::users::User, models::token::TokenClaims},
};

/// Authorization 헤더의 Bearer 접두사
pub const BEARER_PREFIX: &str = "Bearer ";

/// 토큰 부재 시 메시지
pub const TOKEN_NOT_PRESENT_MESSAGE: &str = "Token is not present";

/// JWT 토큰 관리 서비스
///
/// 서명 알고리즘은 키 길이에 따라 HS256/HS384/HS512 중 하나로 결정됩니다.
/// 검증 시 만료 시각에 대한 허용 오차(leeway)는 0입니다.
#[derive(Debug, Clone)]
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// `sub`에는 사용자 이메일이, `role`에는 사용자 역할이 들어갑니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 만료 시각 계산 실패, 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let access_token = token_service.issue_access_token(&user)?;
    /// ```
    pub fn issue_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.config.access_token_ttl())
            .ok_or_else(|| AppError::InternalError("액세스 토큰 만료 시각 계산 범위 초과".to_string()))?;

        let claims = TokenClaims {
            sub: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let header = Header::new(self.config.algorithm());
        let encoding_key = EncodingKey::from_secret(self.config.secret());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명과 만료 시각만 확인합니다. 폐기 목록은 존재하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.config.secret());

        let mut validation = Validation::new(self.config.algorithm());
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                debug!("토큰 검증 실패: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::AuthenticationError("Token has expired".to_string())
                    }
                    _ => AppError::AuthenticationError("Invalid Token".to_string()),
                }
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 헤더 누락 또는 Bearer 접두사 없음
    pub fn extract_bearer_token(auth_header: Option<&str>) -> AppResult<&str> {
        auth_header
            .and_then(|header| header.strip_prefix(BEARER_PREFIX))
            .ok_or_else(|| AppError::BadRequest(TOKEN_NOT_PRESENT_MESSAGE.to_string()))
    }
}
