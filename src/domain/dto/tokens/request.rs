use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::validate_not_blank;

/// 액세스 토큰 갱신 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(custom(function = "validate_not_blank", message = "Refresh token is required"))]
    pub refresh_token: String,
}
