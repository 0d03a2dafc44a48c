use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{AccountStatus, Role, User};

/// 회원가입 응답
///
/// 비밀번호 해시, 인증 코드, 재설정 토큰은 응답에 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            full_name,
            username,
            email,
            role,
            status,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            full_name,
            username,
            email,
            role,
            status,
        }
    }
}
