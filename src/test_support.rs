//! 테스트 전용 인메모리 어댑터와 픽스처

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::rt::task::yield_now;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use mongodb::bson::{DateTime, oid::ObjectId};

use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult},
    domain::{
        entities::{
            tokens::RefreshToken,
            users::{Role, User},
        },
        models::{events::AccountVerifiedEvent, token::TokenClaims},
    },
    repositories::{
        tokens::RefreshTokenStore,
        users::{EMAIL_IN_USE_MESSAGE, UserStore},
    },
    services::{
        events::EventPublisher,
        mail::{MailSender, OutgoingMail},
        users::PasswordHasher,
    },
};

/// 32바이트 키 (HS256)
pub fn jwt_config() -> JwtConfig {
    let secret = STANDARD.encode(b"identity-cell-test-secret-32byte");
    JwtConfig::new(&secret, Duration::minutes(15), Duration::days(7)).unwrap()
}

/// [`jwt_config`] 키로 서명했지만 1분 전에 만료된 액세스 토큰
pub fn expired_access_token(user: &User) -> String {
    let config = jwt_config();
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        sub: user.email.clone(),
        role: user.role,
        iat: now - 120,
        exp: now - 60,
    };

    encode(
        &Header::new(config.algorithm()),
        &claims,
        &EncodingKey::from_secret(config.secret()),
    )
    .unwrap()
}

pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(4)
}

pub fn sample_user(email: &str, role: Role) -> User {
    let mut user = User::new_pending(
        "Ana Gómez".to_string(),
        "ana".to_string(),
        email.to_string(),
        "$2b$04$unused".to_string(),
        role,
        "012345".to_string(),
    );
    user.id = Some(ObjectId::new());
    user
}

pub fn pending_user_with_password(email: &str, password: &str, role: Role) -> User {
    let mut user = sample_user(email, role);
    user.id = None;
    user.password = test_hasher().hash(password).unwrap();
    user
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    /// 저장소를 거쳐 사용자를 추가합니다.
    pub fn seed(&self, mut user: User) -> User {
        user.id.get_or_insert_with(ObjectId::new);
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn get_by_email(&self, email: &str) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.email == email).cloned()
    }

    pub fn modify(&self, email: &str, f: impl FnOnce(&mut User)) {
        let mut users = self.users.lock().unwrap();
        let user = users.iter_mut().find(|u| u.email == email).unwrap();
        f(user);
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.get_by_email(email))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.reset_password_token.as_deref() == Some(token))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError(EMAIL_IN_USE_MESSAGE.to_string()));
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn activate(&self, email: &str, code: &str) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        Ok(users
            .iter_mut()
            .find(|u| u.email == email && u.matches_verification_code(code))
            .map(|user| {
                user.activate();
                user.clone()
            }))
    }

    async fn set_reset_token(
        &self,
        email: &str,
        token: &str,
        expires_at: DateTime,
    ) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        Ok(users.iter_mut().find(|u| u.email == email).map(|user| {
            user.issue_reset_token(token.to_string(), expires_at);
            user.clone()
        }))
    }

    async fn consume_reset_token(
        &self,
        token: &str,
        now: DateTime,
        password_hash: &str,
    ) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        let consumed = users
            .iter_mut()
            .find(|u| {
                u.reset_password_token.as_deref() == Some(token) && !u.reset_token_expired_at(now)
            })
            .map(|user| {
                user.password = password_hash.to_string();
                user.clear_reset_token();
            });
        Ok(consumed.is_some())
    }
}

/// 조회 직후 실행을 양보하는 저장소
///
/// 조회와 갱신 사이에 다른 요청이 끼어드는 상황을 재현합니다.
pub struct InterleavingUserStore {
    inner: Arc<InMemoryUserStore>,
}

impl InterleavingUserStore {
    pub fn new(inner: Arc<InMemoryUserStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl UserStore for InterleavingUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let found = self.inner.find_by_email(email).await;
        yield_now().await;
        found
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let found = self.inner.find_by_id(id).await;
        yield_now().await;
        found
    }

    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>> {
        let found = self.inner.find_by_reset_token(token).await;
        yield_now().await;
        found
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        self.inner.insert(user).await
    }

    async fn activate(&self, email: &str, code: &str) -> AppResult<Option<User>> {
        self.inner.activate(email, code).await
    }

    async fn set_reset_token(
        &self,
        email: &str,
        token: &str,
        expires_at: DateTime,
    ) -> AppResult<Option<User>> {
        self.inner.set_reset_token(email, token, expires_at).await
    }

    async fn consume_reset_token(
        &self,
        token: &str,
        now: DateTime,
        password_hash: &str,
    ) -> AppResult<bool> {
        self.inner.consume_reset_token(token, now, password_hash).await
    }
}

#[derive(Default)]
pub struct InMemoryRefreshTokenStore {
    tokens: Mutex<HashMap<String, RefreshToken>>,
}

impl InMemoryRefreshTokenStore {
    pub fn seed(&self, token: RefreshToken) {
        self.tokens.lock().unwrap().insert(token.token.clone(), token);
    }

    pub fn get(&self, token: &str) -> Option<RefreshToken> {
        self.tokens.lock().unwrap().get(token).cloned()
    }

    pub fn len(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn save(&self, mut token: RefreshToken) -> AppResult<RefreshToken> {
        token.id = Some(ObjectId::new());
        self.seed(token.clone());
        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        Ok(self.get(token))
    }

    async fn delete(&self, token: &str) -> AppResult<()> {
        self.tokens.lock().unwrap().remove(token);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingMailSender {
    sent: Mutex<Vec<OutgoingMail>>,
    fail: bool,
}

impl RecordingMailSender {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for RecordingMailSender {
    async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
        if self.fail {
            return Err(AppError::ExternalServiceError("smtp unavailable".to_string()));
        }
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingEventPublisher {
    published: Mutex<Vec<AccountVerifiedEvent>>,
    fail: bool,
}

impl RecordingEventPublisher {
    pub fn failing() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn published(&self) -> Vec<AccountVerifiedEvent> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingEventPublisher {
    async fn publish_account_verified(&self, event: &AccountVerifiedEvent) -> AppResult<()> {
        if self.fail {
            return Err(AppError::RedisError("broker unavailable".to_string()));
        }
        self.published.lock().unwrap().push(event.clone());
        Ok(())
    }
}
