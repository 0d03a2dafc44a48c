//! 리프레시 토큰 저장소
//!
//! 로그인마다 새 문서가 생성되고, 만료된 토큰은 갱신 시도 시 삭제됩니다.

use async_trait::async_trait;
use log::info;
use mongodb::{Collection, IndexModel, bson::doc, options::IndexOptions};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::tokens::RefreshToken,
};

/// 리프레시 토큰 컬렉션 이름
pub const REFRESH_TOKEN_COLLECTION: &str = "refresh_tokens";

/// 리프레시 토큰 영속성 포트
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    async fn save(&self, token: RefreshToken) -> AppResult<RefreshToken>;

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>>;

    async fn delete(&self, token: &str) -> AppResult<()>;
}

/// MongoDB 기반 리프레시 토큰 리포지토리
#[derive(Clone)]
pub struct RefreshTokenRepository {
    collection: Collection<RefreshToken>,
}

impl RefreshTokenRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<RefreshToken>(REFRESH_TOKEN_COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let token_index = IndexModel::builder()
            .keys(doc! { "token": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("token_unique".to_string())
                .build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "userId": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([token_index, user_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ refresh_tokens 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenStore for RefreshTokenRepository {
    async fn save(&self, mut token: RefreshToken) -> AppResult<RefreshToken> {
        let result = self.collection
            .insert_one(&token)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        token.id = result.inserted_id.as_object_id();
        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        self.collection
            .find_one(doc! { "token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, token: &str) -> AppResult<()> {
        self.collection
            .delete_one(doc! { "token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
