//! 인증 요청관련 DTO
//!
//! 로그인을 요청하는 사용자들의 요청 정보를 매핑합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::validate_not_blank;

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_not_blank", message = "Email is required"))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank", message = "Password is required"))]
    pub password: String,
}
