//! 인증 관련 설정 관리 모듈
//!
//! JWT 서명 키와 토큰 수명을 관리합니다.
//! auth 서비스(발급)와 authz 서비스(검증)는 반드시 같은 `JWT_SECRET`을 사용해야 합니다.

use std::env;
use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::core::errors::{AppError, AppResult, ErrorContext};

/// 액세스 토큰 기본 수명 (15분)
const DEFAULT_ACCESS_TOKEN_TTL_MS: i64 = 15 * 60 * 1000;
/// 리프레시 토큰 기본 수명 (7일)
const DEFAULT_REFRESH_TOKEN_TTL_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// JWT 토큰 설정
///
/// 시작 시 한 번 로드되어 `TokenService`에 주입됩니다.
/// 서명 키는 base64로 인코딩된 값을 디코딩한 바이트열이며,
/// 키 길이에 따라 HMAC 알고리즘이 결정됩니다.
///
/// | 디코딩된 키 길이 | 알고리즘 |
/// |------------------|----------|
/// | 64바이트 이상 | HS512 |
/// | 48바이트 이상 | HS384 |
/// | 32바이트 이상 | HS256 |
/// | 32바이트 미만 | 설정 오류 |
///
/// # 환경 변수 설정
///
/// ```bash
/// # 안전한 JWT 키 생성
/// export JWT_SECRET="$(openssl rand -base64 64)"
/// export JWT_EXPIRATION_MS="900000"             # 15분
/// export JWT_REFRESH_EXPIRATION_MS="604800000"  # 7일
/// ```
#[derive(Clone)]
pub struct JwtConfig {
    secret: Vec<u8>,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

impl JwtConfig {
    /// HMAC 키의 최소 길이 (256비트)
    pub const MIN_SECRET_BYTES: usize = 32;

    /// 토큰 수명 상한 (365일)
    pub const MAX_TOKEN_TTL_MS: i64 = 365 * 24 * 60 * 60 * 1000;

    /// 환경 변수에서 JWT 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `JWT_SECRET` 누락, base64 형식 오류, 키 길이 부족
    pub fn from_env() -> AppResult<Self> {
        let encoded_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::InternalError("JWT_SECRET 환경 변수가 설정되지 않았습니다".to_string()))?;

        Self::new(
            &encoded_secret,
            Duration::milliseconds(read_millis("JWT_EXPIRATION_MS", DEFAULT_ACCESS_TOKEN_TTL_MS)),
            Duration::milliseconds(read_millis("JWT_REFRESH_EXPIRATION_MS", DEFAULT_REFRESH_TOKEN_TTL_MS)),
        )
    }

    /// base64 인코딩된 비밀키와 토큰 수명으로 설정을 생성합니다.
    ///
    /// 토큰 수명은 0보다 크고 [`Self::MAX_TOKEN_TTL_MS`] 이하여야 합니다.
    pub fn new(
        encoded_secret: &str,
        access_token_ttl: Duration,
        refresh_token_ttl: Duration,
    ) -> AppResult<Self> {
        let secret = STANDARD
            .decode(encoded_secret.trim())
            .context("JWT_SECRET base64 디코딩 실패")?;

        if secret.len() < Self::MIN_SECRET_BYTES {
            return Err(AppError::InternalError(format!(
                "JWT_SECRET은 디코딩 후 최소 {}바이트여야 합니다 (현재 {}바이트)",
                Self::MIN_SECRET_BYTES,
                secret.len()
            )));
        }

        validate_ttl("JWT_EXPIRATION_MS", access_token_ttl)?;
        validate_ttl("JWT_REFRESH_EXPIRATION_MS", refresh_token_ttl)?;

        Ok(Self {
            secret,
            access_token_ttl,
            refresh_token_ttl,
        })
    }

    /// 디코딩된 서명 키
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// 키 길이에 맞는 HMAC 서명 알고리즘
    pub fn algorithm(&self) -> Algorithm {
        match self.secret.len() {
            n if n >= 64 => Algorithm::HS512,
            n if n >= 48 => Algorithm::HS384,
            _ => Algorithm::HS256,
        }
    }

    /// 액세스 토큰 수명
    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    /// 리프레시 토큰 수명
    pub fn refresh_token_ttl(&self) -> Duration {
        self.refresh_token_ttl
    }
}

// 비밀키가 로그에 남지 않도록 직접 구현
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("algorithm", &self.algorithm())
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .finish()
    }
}

fn validate_ttl(key: &str, ttl: Duration) -> AppResult<()> {
    let millis = ttl.num_milliseconds();
    if millis <= 0 || millis > JwtConfig::MAX_TOKEN_TTL_MS {
        return Err(AppError::InternalError(format!(
            "{}은 1 이상 {} 이하의 밀리초여야 합니다 (현재 {})",
            key,
            JwtConfig::MAX_TOKEN_TTL_MS,
            millis
        )));
    }
    Ok(())
}

fn read_millis(key: &str, default: i64) -> i64 {
    match env::var(key) {
        Ok(raw) => raw.parse::<i64>().unwrap_or_else(|e| {
            log::warn!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded_key(len: usize) -> String {
        STANDARD.encode(vec![7u8; len])
    }

    #[test]
    fn test_algorithm_follows_key_length() {
        let ttl = Duration::minutes(15);

        let hs256 = JwtConfig::new(&encoded_key(32), ttl, ttl).unwrap();
        let hs384 = JwtConfig::new(&encoded_key(48), ttl, ttl).unwrap();
        let hs512 = JwtConfig::new(&encoded_key(64), ttl, ttl).unwrap();

        assert_eq!(hs256.algorithm(), Algorithm::HS256);
        assert_eq!(hs384.algorithm(), Algorithm::HS384);
        assert_eq!(hs512.algorithm(), Algorithm::HS512);
    }

    #[test]
    fn test_short_key_is_rejected() {
        let ttl = Duration::minutes(15);
        let result = JwtConfig::new(&encoded_key(16), ttl, ttl);

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let ttl = Duration::minutes(15);
        let result = JwtConfig::new("not base64 at all!!", ttl, ttl);

        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_ttl_is_rejected() {
        let ttl = Duration::minutes(15);

        for bad in [
            Duration::zero(),
            Duration::milliseconds(-1),
            Duration::milliseconds(JwtConfig::MAX_TOKEN_TTL_MS + 1),
            Duration::MAX,
        ] {
            assert!(matches!(
                JwtConfig::new(&encoded_key(32), bad, ttl),
                Err(AppError::InternalError(msg)) if msg.contains("JWT_EXPIRATION_MS")
            ));
            assert!(matches!(
                JwtConfig::new(&encoded_key(32), ttl, bad),
                Err(AppError::InternalError(msg)) if msg.contains("JWT_REFRESH_EXPIRATION_MS")
            ));
        }

        let max = Duration::milliseconds(JwtConfig::MAX_TOKEN_TTL_MS);
        assert!(JwtConfig::new(&encoded_key(32), max, max).is_ok());
    }

    #[test]
    fn test_debug_output_hides_secret() {
        let ttl = Duration::minutes(15);
        let config = JwtConfig::new(&encoded_key(32), ttl, ttl).unwrap();
        let debug = format!("{:?}", config);

        assert!(debug.contains("***"));
        assert!(!debug.contains("[7, 7"));
    }
}
