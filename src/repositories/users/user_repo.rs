//! 사용자 저장소
//!
//! `UserStore` trait은 서비스 계층이 의존하는 포트이고,
//! `UserRepository`는 MongoDB `user` 컬렉션 기반 구현입니다.

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    Collection, IndexModel,
    bson::{self, DateTime, doc, oid::ObjectId},
    options::{IndexOptions, ReturnDocument},
};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::{AccountStatus, User},
};

use crate::repositories::is_duplicate_key_error;

/// 사용자 컬렉션 이름
pub const USER_COLLECTION: &str = "user";

/// 이메일 중복 시 반환되는 메시지
pub const EMAIL_IN_USE_MESSAGE: &str = "Email already in use";

/// 사용자 영속성 포트
///
/// 이메일 유일성은 구현체(저장소 계층)가 보장해야 하며,
/// 위반 시 `insert`는 `AppError::ConflictError`를 반환합니다.
///
/// 상태를 바꾸는 연산은 조건부 단일 갱신이어야 합니다. 조회 후 문서 전체를
/// 덮어쓰면 동시 요청이 서로의 변경을 되돌릴 수 있습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 사용자를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// `email`의 인증 코드가 `code`와 일치할 때만 계정을 활성화하고 코드를 제거합니다.
    ///
    /// 활성화된 사용자를 반환하며, 조건이 맞지 않으면 `None`입니다.
    async fn activate(&self, email: &str, code: &str) -> AppResult<Option<User>>;

    /// 재설정 토큰과 만료 시각만 설정합니다. 사용자가 없으면 `None`입니다.
    async fn set_reset_token(
        &self,
        email: &str,
        token: &str,
        expires_at: DateTime,
    ) -> AppResult<Option<User>>;

    /// `now` 기준으로 유효한 `token`을 소비하면서 비밀번호를 교체합니다.
    ///
    /// 토큰을 실제로 소비한 호출만 `true`를 받습니다.
    async fn consume_reset_token(
        &self,
        token: &str,
        now: DateTime,
        password_hash: &str,
    ) -> AppResult<bool>;
}

/// MongoDB 기반 사용자 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(USER_COLLECTION),
        }
    }

    /// 컬렉션 인덱스를 생성합니다.
    ///
    /// 이메일 유니크 인덱스는 동시 가입 경쟁 상태를 막는 유일한 수단입니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 재설정 토큰 조회용 인덱스
        let reset_token_index = IndexModel::builder()
            .keys(doc! { "resetPasswordToken": 1 })
            .options(IndexOptions::builder()
                .sparse(true)
                .name("reset_password_token".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, reset_token_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ user 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "resetPasswordToken": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError(EMAIL_IN_USE_MESSAGE.to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 사용자 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        debug!("사용자 저장 완료: {}", id.to_hex());
        Ok(user)
    }

    async fn activate(&self, email: &str, code: &str) -> AppResult<Option<User>> {
        let status = bson::to_bson(&AccountStatus::Active)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        self.collection
            .find_one_and_update(
                doc! { "email": email, "verificationCode": code },
                doc! {
                    "$set": { "status": status },
                    "$unset": { "verificationCode": "" },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn set_reset_token(
        &self,
        email: &str,
        token: &str,
        expires_at: DateTime,
    ) -> AppResult<Option<User>> {
        self.collection
            .find_one_and_update(
                doc! { "email": email },
                doc! {
                    "$set": {
                        "resetPasswordToken": token,
                        "resetPasswordTokenExpiration": expires_at,
                    },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn consume_reset_token(
        &self,
        token: &str,
        now: DateTime,
        password_hash: &str,
    ) -> AppResult<bool> {
        let result = self.collection
            .update_one(
                doc! {
                    "resetPasswordToken": token,
                    "resetPasswordTokenExpiration": { "$gte": now },
                },
                doc! {
                    "$set": { "password": password_hash },
                    "$unset": { "resetPasswordToken": "", "resetPasswordTokenExpiration": "" },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count == 1)
    }
}
