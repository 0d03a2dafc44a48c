//! 계정 이벤트 발행 모듈
//!
//! 계정 인증 완료 시 다른 셀에 알리는 이벤트를 발행합니다.
//! 발행은 fire-and-forget이며, 실패 여부는 호출자가 로그로만 처리합니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::models::events::AccountVerifiedEvent;

pub mod redis_publisher;

pub use redis_publisher::RedisEventPublisher;

/// 이벤트 발행 포트
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish_account_verified(&self, event: &AccountVerifiedEvent) -> AppResult<()>;
}
