//! Redis Pub/Sub 기반 이벤트 발행기
//!
//! 이벤트는 JSON으로 직렬화되어 `{exchange}.{routing_key}` 채널에 PUBLISH됩니다.
//! 연결은 [`ConnectionManager`]가 관리하며 끊어진 경우 자동으로 재연결됩니다.

use async_trait::async_trait;
use log::{debug, info};
use redis::{AsyncCommands, Client, aio::ConnectionManager};

use super::EventPublisher;
use crate::{
    config::EventConfig,
    core::errors::{AppError, AppResult},
    domain::models::events::AccountVerifiedEvent,
};

/// Redis 이벤트 발행기
///
/// # Examples
///
/// ```rust,ignore
/// let publisher = RedisEventPublisher::connect(&EventConfig::from_env()).await?;
/// publisher.publish_account_verified(&AccountVerifiedEvent::from(&user)).await?;
/// ```
#[derive(Clone)]
pub struct RedisEventPublisher {
    connection: ConnectionManager,
    channel: String,
}

impl RedisEventPublisher {
    /// Redis에 연결하고 PING으로 서버 가용성을 확인합니다.
    pub async fn connect(config: &EventConfig) -> AppResult<Self> {
        let client = Client::open(config.redis_url.as_str())
            .map_err(|e| AppError::RedisError(format!("Redis URL 오류: {}", e)))?;

        let mut connection = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::RedisError(format!("Redis 연결 실패: {}", e)))?;

        redis::cmd("PING")
            .query_async::<()>(&mut connection)
            .await
            .map_err(|e| AppError::RedisError(format!("Redis PING 실패: {}", e)))?;

        info!("✅ Redis 연결 성공 (채널: {})", config.channel());

        Ok(Self {
            connection,
            channel: config.channel(),
        })
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish_account_verified(&self, event: &AccountVerifiedEvent) -> AppResult<()> {
        let payload = serde_json::to_string(event)
            .map_err(|e| AppError::InternalError(format!("이벤트 직렬화 실패: {}", e)))?;

        let mut connection = self.connection.clone();
        let receivers: i64 = connection
            .publish(&self.channel, payload)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        debug!("이벤트 발행 완료: {} (구독자 {}명)", self.channel, receivers);
        Ok(())
    }
}
