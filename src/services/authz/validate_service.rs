//! Bearer 토큰 검증 서비스
//!
//! 저장소에 접근하지 않고 서명과 만료 시각만으로 토큰 유효성을 판단합니다.

use log::debug;

use crate::{
    core::errors::{AppError, AppResult},
    services::auth::TokenService,
};

pub const INVALID_TOKEN_MESSAGE: &str = "Invalid Token";

#[derive(Debug, Clone)]
pub struct ValidateService {
    tokens: TokenService,
}

impl ValidateService {
    pub fn new(tokens: TokenService) -> Self {
        Self { tokens }
    }

    /// Authorization 헤더 값을 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 헤더가 없거나 `Bearer ` 접두사가 없음
    /// * `AppError::AuthenticationError` - 서명 불일치, 형식 오류, 만료
    pub fn validate(&self, auth_header: Option<&str>) -> AppResult<bool> {
        let token = TokenService::extract_bearer_token(auth_header)?;

        self.tokens
            .verify_token(token)
            .map(|claims| {
                debug!("토큰 검증 성공: {}", claims.sub);
                true
            })
            .map_err(|_| AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;
    use crate::test_support::{expired_access_token, jwt_config, sample_user};

    #[test]
    fn test_fresh_token_is_valid() {
        let tokens = TokenService::new(jwt_config());
        let token = tokens
            .issue_access_token(&sample_user("a@b.com", Role::Freelancer))
            .unwrap();
        let service = ValidateService::new(tokens);

        let header = format!("Bearer {}", token);
        assert!(service.validate(Some(&header)).unwrap());
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        let tokens = TokenService::new(jwt_config());
        let token = expired_access_token(&sample_user("a@b.com", Role::Freelancer));
        let service = ValidateService::new(tokens);

        let result = service.validate(Some(&format!("Bearer {}", token)));

        assert!(matches!(
            result,
            Err(AppError::AuthenticationError(msg)) if msg == INVALID_TOKEN_MESSAGE
        ));
    }

    #[test]
    fn test_missing_header_is_bad_request() {
        let service = ValidateService::new(TokenService::new(jwt_config()));

        assert!(matches!(service.validate(None), Err(AppError::BadRequest(_))));
        assert!(matches!(
            service.validate(Some("Token abc")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_tampered_token_is_unauthorized() {
        let tokens = TokenService::new(jwt_config());
        let mut token = tokens
            .issue_access_token(&sample_user("a@b.com", Role::Freelancer))
            .unwrap();
        token.push('x');
        let service = ValidateService::new(tokens);

        assert!(matches!(
            service.validate(Some(&format!("Bearer {}", token))),
            Err(AppError::AuthenticationError(_))
        ));
    }
}
