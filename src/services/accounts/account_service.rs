//! # 계정 관리 서비스 구현
//!
//! 회원 가입, 이메일 인증, 비밀번호 재설정의 비즈니스 로직을 담당합니다.
//!
//! ## 계정 상태 흐름
//!
//! ```text
//! register ──▶ PENDING_VERIFICATION ──verify──▶ ACTIVE
//!                                                 │
//!                         (외부 관리 작업) ──▶ INACTIVE
//! ```
//!
//! ## 비밀번호 재설정 흐름
//!
//! ```text
//! forgot_password ──▶ 토큰 발급 (1시간) ──▶ 메일 발송
//! reset_password  ──▶ 토큰 검증 ──▶ 비밀번호 교체 + 토큰 제거 (1회용)
//! ```

use std::sync::Arc;

use chrono::Duration;
use log::{debug, info, warn};
use mongodb::bson::DateTime;
use rand::Rng;
use uuid::Uuid;

use crate::{
    config::AccountConfig,
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::request::RegistrationRequest,
        entities::users::User,
        models::events::AccountVerifiedEvent,
    },
    repositories::users::UserStore,
    services::{
        events::EventPublisher,
        mail::{self, MailSender},
        users::PasswordHasher,
    },
    utils::time::expires_after,
};

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const INVALID_VERIFICATION_CODE_MESSAGE: &str = "Invalid verification code";
pub const INVALID_RESET_TOKEN_MESSAGE: &str = "Invalid token";
pub const EXPIRED_RESET_TOKEN_MESSAGE: &str = "Token has expired";

/// 재설정 토큰 유효 시간
pub fn reset_token_ttl() -> Duration {
    Duration::hours(1)
}

/// 6자리 숫자 인증 코드를 생성합니다. 앞자리 0은 유지됩니다.
pub fn generate_verification_code() -> String {
    format!("{:06}", rand::thread_rng().gen_range(0..1_000_000))
}

/// 계정 관리 비즈니스 로직 서비스
///
/// 사용자 저장소, 비밀번호 해셔, 메일 발송기, 이벤트 발행기를 생성자로 주입받습니다.
///
/// # Examples
///
/// ```rust,ignore
/// let service = AccountService::new(users, PasswordHasher::from_env(), mail, events, AccountConfig::from_env());
/// let user = service.register(request).await?;
/// service.verify(&user.email, "012345").await?;
/// ```
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    mail: Arc<dyn MailSender>,
    events: Arc<dyn EventPublisher>,
    config: AccountConfig,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        mail: Arc<dyn MailSender>,
        events: Arc<dyn EventPublisher>,
        config: AccountConfig,
    ) -> Self {
        Self {
            users,
            hasher,
            mail,
            events,
            config,
        }
    }

    /// 새 계정을 등록하고 인증 코드 메일을 발송합니다.
    ///
    /// 이메일 중복은 저장소의 유니크 제약으로만 판정됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    /// * `AppError::ExternalServiceError` - 메일 발송 실패
    pub async fn register(&self, request: RegistrationRequest) -> AppResult<User> {
        info!("회원 가입 시작: {}", request.email);

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new_pending(
            request.full_name,
            request.username,
            request.email,
            password_hash,
            request.role,
            generate_verification_code(),
        );

        let saved = self.users.insert(user).await.inspect_err(|e| {
            if matches!(e, AppError::ConflictError(_)) {
                warn!("이미 사용 중인 이메일로 가입 시도");
            }
        })?;
        info!("사용자 저장 완료: {}", saved.id_string().unwrap_or_default());

        let code = saved.verification_code.as_deref().unwrap_or_default();
        self.mail
            .send(mail::verification_email(&saved.email, &saved.username, code)?)
            .await?;
        info!("인증 메일 발송 완료: {}", saved.email);

        Ok(saved)
    }

    /// 인증 코드로 계정을 활성화하고 인증 완료 이벤트를 발행합니다.
    ///
    /// 이벤트 발행 실패는 로그만 남기고 요청은 성공으로 처리합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 존재하지 않는 이메일
    /// * `AppError::BadRequest` - 코드 불일치 또는 이미 사용된 코드
    pub async fn verify(&self, email: &str, code: &str) -> AppResult<()> {
        info!("계정 인증 시작: {}", email);

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;

        if !user.matches_verification_code(code) {
            warn!("잘못된 인증 코드: {}", email);
            return Err(AppError::BadRequest(INVALID_VERIFICATION_CODE_MESSAGE.to_string()));
        }

        // 조회 이후 다른 요청이 코드를 먼저 사용했다면 여기서 걸러집니다.
        let user = self.users.activate(email, code).await?.ok_or_else(|| {
            warn!("이미 사용된 인증 코드: {}", email);
            AppError::BadRequest(INVALID_VERIFICATION_CODE_MESSAGE.to_string())
        })?;
        debug!("계정 상태 ACTIVE로 변경: {}", email);

        let event = AccountVerifiedEvent::from(&user);
        match self.events.publish_account_verified(&event).await {
            Ok(()) => info!("계정 인증 이벤트 발행: {}", user.username),
            Err(e) => warn!("계정 인증 이벤트 발행 실패 ({}): {}", email, e),
        }

        info!("계정 인증 완료: {}", user.username);
        Ok(())
    }

    /// 비밀번호 재설정 토큰을 발급하고 재설정 링크 메일을 발송합니다.
    ///
    /// 토큰 필드만 갱신하므로 동시에 진행 중인 인증 결과를 덮어쓰지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 존재하지 않는 이메일
    /// * `AppError::ExternalServiceError` - 메일 발송 실패
    pub async fn forgot_password(&self, email: &str) -> AppResult<()> {
        info!("비밀번호 재설정 요청: {}", email);

        let token = Uuid::new_v4().to_string();
        let expires_at = expires_after(DateTime::now(), reset_token_ttl())?;
        let user = self
            .users
            .set_reset_token(email, &token, expires_at)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;
        debug!("재설정 토큰 저장 완료: {}", email);

        let reset_url = self.reset_url(&token);
        self.mail
            .send(mail::password_reset_email(&user.email, &user.username, &reset_url)?)
            .await?;

        info!("비밀번호 재설정 메일 발송 완료: {}", email);
        Ok(())
    }

    /// 재설정 토큰으로 비밀번호를 교체합니다. 토큰은 성공 시 제거됩니다.
    ///
    /// 같은 토큰으로 동시에 들어온 요청 중 하나만 성공합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 알 수 없는 토큰, 만료된 토큰, 이미 사용된 토큰
    pub async fn reset_password(&self, token: &str, new_password: &str) -> AppResult<()> {
        let user = self
            .users
            .find_by_reset_token(token)
            .await?
            .ok_or_else(|| {
                warn!("유효하지 않은 재설정 토큰");
                AppError::BadRequest(INVALID_RESET_TOKEN_MESSAGE.to_string())
            })?;

        let now = DateTime::now();
        if user.reset_token_expired_at(now) {
            warn!("만료된 재설정 토큰: {}", user.email);
            return Err(AppError::BadRequest(EXPIRED_RESET_TOKEN_MESSAGE.to_string()));
        }

        let password_hash = self.hasher.hash(new_password)?;
        if !self.users.consume_reset_token(token, now, &password_hash).await? {
            warn!("이미 사용된 재설정 토큰: {}", user.email);
            return Err(AppError::BadRequest(INVALID_RESET_TOKEN_MESSAGE.to_string()));
        }

        info!("비밀번호 재설정 완료: {}", user.email);
        Ok(())
    }

    fn reset_url(&self, token: &str) -> String {
        format!("{}?token={}", self.config.reset_url_base, urlencoding::encode(token))
    }
}
