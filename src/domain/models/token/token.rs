//! JWT 액세스 토큰 클레임
//!
//! 액세스 토큰은 저장되지 않으며, 유효성은 서명과 만료 시각만으로 판단합니다.
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::Role;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 사용자 이메일
/// - `role`: 사용자 역할
/// - `iat`: 발급 시간 (Unix timestamp, 초)
/// - `exp`: 만료 시간 (Unix timestamp, 초)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}
