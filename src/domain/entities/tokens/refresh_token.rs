//! Refresh Token Entity
//!
//! 로그인 시 발급되는 불투명(opaque) 리프레시 토큰입니다.
//! `refresh_tokens` 컬렉션에 저장되며, 하나의 토큰은 하나의 로그인 세션에 대응합니다.

use chrono::Duration;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    core::errors::AppResult,
    utils::time::{expires_after, has_expired},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshToken {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// UUID v4 문자열
    pub token: String,
    /// 토큰 소유자 (`user._id`)
    pub user_id: ObjectId,
    pub expiry_date: DateTime,
}

impl RefreshToken {
    /// 사용자에게 새 리프레시 토큰을 발급합니다.
    pub fn issue(user_id: ObjectId, ttl: Duration, now: DateTime) -> AppResult<Self> {
        Ok(Self {
            id: None,
            token: Uuid::new_v4().to_string(),
            user_id,
            expiry_date: expires_after(now, ttl)?,
        })
    }

    pub fn is_expired_at(&self, now: DateTime) -> bool {
        has_expired(self.expiry_date, now)
    }
}
