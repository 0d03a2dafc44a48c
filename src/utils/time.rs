//! # 시간 유틸리티
//!
//! 만료 시각 비교와 계산을 한 곳에 모읍니다.
//! 모든 만료 검사는 같은 비교 규칙을 사용해야 합니다.

use chrono::Duration;
use mongodb::bson::DateTime;

use crate::core::errors::{AppError, AppResult};

/// 만료 시각이 현재 시각보다 **엄격하게 이전**인지 확인합니다.
///
/// `expires_at == now`는 아직 유효한 것으로 봅니다. 클럭 스큐 허용치는 없습니다.
pub fn has_expired(expires_at: DateTime, now: DateTime) -> bool {
    expires_at.timestamp_millis() < now.timestamp_millis()
}

/// `now`에서 `ttl`만큼 지난 시각을 계산합니다.
///
/// # Errors
///
/// * `AppError::InternalError` - 결과가 표현 가능한 시각 범위를 벗어남
pub fn expires_after(now: DateTime, ttl: Duration) -> AppResult<DateTime> {
    now.timestamp_millis()
        .checked_add(ttl.num_milliseconds())
        .map(DateTime::from_millis)
        .ok_or_else(|| AppError::InternalError(format!("만료 시각 계산 범위 초과: ttl={}", ttl)))
}
