//! 회원가입 요청 DTO
//!
//! 새로운 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::users::Role;
use crate::utils::string_utils::{validate_not_blank, validate_password_strength};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// `role`은 대소문자 구분 없이 `FREELANCER` 또는 `EMPLOYER`여야 하며,
/// 누락되거나 알 수 없는 값이면 역직렬화 단계에서 400으로 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// 표시 이름 (최대 100자)
    #[validate(
        custom(function = "validate_not_blank", message = "Full name is required"),
        length(max = 100, message = "Full name must not exceed 100 characters")
    )]
    pub full_name: String,

    #[validate(custom(function = "validate_not_blank", message = "Username is required"))]
    pub username: String,

    /// 계정 비밀번호 (최소 8자, 대소문자+숫자+특수문자 포함)
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    #[validate(email(message = "Email should be valid"))]
    pub email: String,

    pub role: Role,
}
