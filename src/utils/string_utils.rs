//! # 문자열 검증 유틸리티
//!
//! 요청 DTO의 `#[validate(custom(function = ...))]`에서 사용하는 검증 함수들입니다.

use validator::ValidationError;

/// 비밀번호에 허용되는 특수문자
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&";

/// 비밀번호 최소 길이
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// 인증 코드 길이
pub const VERIFICATION_CODE_LENGTH: usize = 6;

/// 공백만으로 이루어지지 않은 문자열인지 확인합니다.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 필수 문자열 검증 (공백 문자열 거부)
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank")
            .with_message("must not be blank".into()));
    }
    Ok(())
}

/// 비밀번호 보안 강도 검증
///
/// 최소 8자이며 소문자, 대문자, 숫자, 특수문자(`@$!%*?&`)를 각각 하나 이상 포함해야 하고,
/// 그 외의 문자는 허용하지 않습니다.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIAL_CHARS.contains(c));
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if password.chars().count() < PASSWORD_MIN_LENGTH
        || !(allowed && has_lowercase && has_uppercase && has_digit && has_special)
    {
        return Err(ValidationError::new("weak_password").with_message(
            "Password must be at least 8 characters long and contain at least one uppercase letter, one lowercase letter, one number, and one special character".into(),
        ));
    }

    Ok(())
}

/// 인증 코드 형식 검증 (영문/숫자 정확히 6자)
pub fn validate_verification_code(code: &str) -> Result<(), ValidationError> {
    if code.len() != VERIFICATION_CODE_LENGTH || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::new("invalid_code")
            .with_message("Verification code must be exactly 6 alphanumeric characters".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Hello").is_ok());
        assert!(validate_not_blank("  World  ").is_ok());

        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_password_strength_accepts_complete_password() {
        assert!(validate_password_strength("Passw0rd!").is_ok());
        assert!(validate_password_strength("aB3$aB3$").is_ok());
    }

    #[test]
    fn test_password_strength_rejects_missing_classes() {
        // 특수문자 없음
        assert!(validate_password_strength("Passw0rdd").is_err());
        // 대문자 없음
        assert!(validate_password_strength("passw0rd!").is_err());
        // 소문자 없음
        assert!(validate_password_strength("PASSW0RD!").is_err());
        // 숫자 없음
        assert!(validate_password_strength("Password!").is_err());
        // 너무 짧음
        assert!(validate_password_strength("Pa0!").is_err());
    }

    #[test]
    fn test_password_strength_rejects_disallowed_characters() {
        assert!(validate_password_strength("Passw0rd!#").is_err());
        assert!(validate_password_strength("Pass w0rd!").is_err());
    }

    #[test]
    fn test_validate_verification_code() {
        assert!(validate_verification_code("004213").is_ok());
        assert!(validate_verification_code("aB12cD").is_ok());

        assert!(validate_verification_code("12345").is_err());
        assert!(validate_verification_code("1234567").is_err());
        assert!(validate_verification_code("12 345").is_err());
        assert!(validate_verification_code("12345!").is_err());
    }
}
