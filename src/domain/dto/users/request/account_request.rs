//! 계정 인증/비밀번호 복구 요청 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::{validate_not_blank, validate_verification_code};

/// 이메일 인증 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerificationRequest {
    #[validate(email(message = "Email should be valid"))]
    pub email: String,

    #[validate(custom(function = "validate_verification_code"))]
    pub code: String,
}

/// 비밀번호 재설정 링크 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Email should be valid"))]
    pub email: String,
}

/// 비밀번호 재설정 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[validate(custom(function = "validate_not_blank", message = "Token is required"))]
    pub token: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub new_password: String,
}
