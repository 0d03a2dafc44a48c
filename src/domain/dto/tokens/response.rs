use serde::{Deserialize, Serialize};

/// 토큰 타입 (`Authorization: Bearer <token>`)
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// 로그인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl AuthResponse {
    pub fn bearer(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: BEARER_TOKEN_TYPE.to_string(),
        }
    }
}

/// 액세스 토큰 갱신 응답
///
/// 리프레시 토큰은 회전하지 않으므로 요청에 사용한 토큰이 그대로 반환됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccessTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}
