//! 로그인 및 토큰 갱신 서비스
//!
//! 이메일/비밀번호 인증 후 액세스 토큰(JWT)과 불투명 리프레시 토큰을 발급하고,
//! 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
//!
//! 리프레시 토큰은 갱신 시 교체(rotation)되지 않고 동일한 값이 다시 반환됩니다.

use std::sync::Arc;

use log::{info, warn};
use mongodb::bson::DateTime;

use super::TokenService;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::tokens::{AuthResponse, NewAccessTokenResponse},
        entities::tokens::RefreshToken,
    },
    repositories::{tokens::RefreshTokenStore, users::UserStore},
    services::users::PasswordHasher,
};

pub const LOGIN_USER_NOT_FOUND_MESSAGE: &str = "User not found with the provided email";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
pub const REFRESH_TOKEN_NOT_FOUND_MESSAGE: &str = "Refresh token not found";
pub const REFRESH_TOKEN_EXPIRED_MESSAGE: &str =
    "Refresh token was expired. Please make a new signin request";

/// 인증 비즈니스 로직 서비스
///
/// # Examples
///
/// ```rust,ignore
/// let auth = AuthService::new(users, refresh_tokens, PasswordHasher::from_env(), token_service);
/// let tokens = auth.login("a@b.com", "Passw0rd!").await?;
/// let renewed = auth.refresh(&tokens.refresh_token).await?;
/// ```
pub struct AuthService {
    users: Arc<dyn UserStore>,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
        hasher: PasswordHasher,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            hasher,
            tokens,
        }
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 성공할 때마다 새 리프레시 토큰이 생성되어 저장됩니다.
    /// 계정 상태(인증 여부)는 확인하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 존재하지 않는 이메일 또는 비밀번호 불일치
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthResponse> {
        let user = self.users.find_by_email(email).await?.ok_or_else(|| {
            warn!("로그인 실패 (사용자 없음): {}", email);
            AppError::AuthenticationError(LOGIN_USER_NOT_FOUND_MESSAGE.to_string())
        })?;

        if !self.hasher.verify(password, &user.password)? {
            warn!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string()));
        }

        let user_id = user.id.ok_or_else(|| {
            AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string())
        })?;

        let access_token = self.tokens.issue_access_token(&user)?;
        let refresh_token = self
            .refresh_tokens
            .save(RefreshToken::issue(
                user_id,
                self.tokens.config().refresh_token_ttl(),
                DateTime::now(),
            )?)
            .await?;

        info!("로그인 성공: {}", email);
        Ok(AuthResponse::bearer(access_token, refresh_token.token))
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// 만료된 토큰은 이 시점에 삭제되므로 같은 토큰으로 다시 요청하면 `NotFound`가 됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 알 수 없는 토큰, 또는 토큰 소유자가 삭제됨
    /// * `AppError::AuthenticationError` - 만료된 토큰
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<NewAccessTokenResponse> {
        let stored = self
            .refresh_tokens
            .find_by_token(refresh_token)
            .await?
            .ok_or_else(|| AppError::NotFound(REFRESH_TOKEN_NOT_FOUND_MESSAGE.to_string()))?;

        if stored.is_expired_at(DateTime::now()) {
            self.refresh_tokens.delete(&stored.token).await?;
            warn!("만료된 리프레시 토큰 삭제: user {}", stored.user_id.to_hex());
            return Err(AppError::AuthenticationError(REFRESH_TOKEN_EXPIRED_MESSAGE.to_string()));
        }

        let user = self
            .users
            .find_by_id(&stored.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let access_token = self.tokens.issue_access_token(&user)?;

        info!("액세스 토큰 갱신: {}", user.email);
        Ok(NewAccessTokenResponse {
            access_token,
            refresh_token: stored.token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::tokens::response::BEARER_TOKEN_TYPE;
    use crate::domain::entities::users::Role;
    use crate::test_support::{
        InMemoryRefreshTokenStore, InMemoryUserStore, jwt_config, pending_user_with_password,
        test_hasher,
    };
    use chrono::Duration;
    use mongodb::bson::oid::ObjectId;

    struct Fixture {
        service: AuthService,
        users: Arc<InMemoryUserStore>,
        refresh_tokens: Arc<InMemoryRefreshTokenStore>,
        tokens: TokenService,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(InMemoryUserStore::default());
        let refresh_tokens = Arc::new(InMemoryRefreshTokenStore::default());
        let tokens = TokenService::new(jwt_config());

        let service = AuthService::new(
            users.clone(),
            refresh_tokens.clone(),
            test_hasher(),
            tokens.clone(),
        );

        Fixture {
            service,
            users,
            refresh_tokens,
            tokens,
        }
    }

    fn seed_user(f: &Fixture, email: &str, password: &str) -> ObjectId {
        let user = f
            .users
            .seed(pending_user_with_password(email, password, Role::Employer));
        user.id.unwrap()
    }

    #[actix_web::test]
    async fn test_login_issues_access_and_refresh_tokens() {
        let f = fixture();
        let user_id = seed_user(&f, "a@b.com", "Passw0rd!");

        let response = f.service.login("a@b.com", "Passw0rd!").await.unwrap();

        assert_eq!(response.token_type, BEARER_TOKEN_TYPE);
        let claims = f.tokens.verify_token(&response.access_token).unwrap();
        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(claims.role, Role::Employer);

        let stored = f.refresh_tokens.get(&response.refresh_token).unwrap();
        assert_eq!(stored.user_id, user_id);
        let ttl = stored.expiry_date.timestamp_millis() - DateTime::now().timestamp_millis();
        assert!(ttl > Duration::days(7).num_milliseconds() - 60_000);
    }

    #[actix_web::test]
    async fn test_each_login_creates_new_refresh_token() {
        let f = fixture();
        seed_user(&f, "a@b.com", "Passw0rd!");

        let first = f.service.login("a@b.com", "Passw0rd!").await.unwrap();
        let second = f.service.login("a@b.com", "Passw0rd!").await.unwrap();

        assert_ne!(first.refresh_token, second.refresh_token);
        assert_eq!(f.refresh_tokens.len(), 2);
    }

    #[actix_web::test]
    async fn test_login_unknown_email_is_unauthorized() {
        let f = fixture();

        let result = f.service.login("nobody@b.com", "Passw0rd!").await;

        assert!(matches!(
            result,
            Err(AppError::AuthenticationError(msg)) if msg == LOGIN_USER_NOT_FOUND_MESSAGE
        ));
    }

    #[actix_web::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let f = fixture();
        seed_user(&f, "a@b.com", "Passw0rd!");

        let result = f.service.login("a@b.com", "WrongPass1!").await;

        assert!(matches!(
            result,
            Err(AppError::AuthenticationError(msg)) if msg == INVALID_CREDENTIALS_MESSAGE
        ));
        assert_eq!(f.refresh_tokens.len(), 0);
    }

    #[actix_web::test]
    async fn test_refresh_returns_new_access_token_and_same_refresh_token() {
        let f = fixture();
        seed_user(&f, "a@b.com", "Passw0rd!");
        let login = f.service.login("a@b.com", "Passw0rd!").await.unwrap();

        let renewed = f.service.refresh(&login.refresh_token).await.unwrap();

        assert_eq!(renewed.refresh_token, login.refresh_token);
        let claims = f.tokens.verify_token(&renewed.access_token).unwrap();
        assert_eq!(claims.sub, "a@b.com");
    }

    #[actix_web::test]
    async fn test_refresh_unknown_token_is_not_found() {
        let f = fixture();

        let result = f.service.refresh("unknown").await;

        assert!(matches!(
            result,
            Err(AppError::NotFound(msg)) if msg == REFRESH_TOKEN_NOT_FOUND_MESSAGE
        ));
    }

    #[actix_web::test]
    async fn test_expired_refresh_token_is_deleted() {
        let f = fixture();
        let user_id = seed_user(&f, "a@b.com", "Passw0rd!");
        let expired = RefreshToken::issue(user_id, Duration::seconds(-1), DateTime::now()).unwrap();
        let token = expired.token.clone();
        f.refresh_tokens.seed(expired);

        let first = f.service.refresh(&token).await;
        assert!(matches!(
            first,
            Err(AppError::AuthenticationError(msg)) if msg == REFRESH_TOKEN_EXPIRED_MESSAGE
        ));
        assert!(f.refresh_tokens.get(&token).is_none());

        let second = f.service.refresh(&token).await;
        assert!(matches!(second, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_refresh_for_deleted_user_is_not_found() {
        let f = fixture();
        let orphan = RefreshToken::issue(ObjectId::new(), Duration::days(7), DateTime::now()).unwrap();
        let token = orphan.token.clone();
        f.refresh_tokens.seed(orphan);

        let result = f.service.refresh(&token).await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "User not found"));
    }
}
