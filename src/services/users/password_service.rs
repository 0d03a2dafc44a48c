//! 비밀번호 해싱 서비스
//!
//! bcrypt 해싱/검증을 담당합니다. cost는 [`PasswordConfig`]에서 환경별로 결정되며,
//! account 서비스(해싱)와 auth 서비스(검증)가 같은 구현을 공유합니다.

use log::debug;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

/// bcrypt 기반 비밀번호 해셔
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경의 bcrypt cost로 해셔를 생성합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문 비밀번호를 해싱합니다.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let start = std::time::Instant::now();

        let hashed = bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 올바르지 않은 경우에도 불일치로 처리하지 않고 `InternalError`를 반환합니다.
    pub fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        let start = std::time::Instant::now();

        let is_valid = bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        debug!("Password verification took: {:?}", start.elapsed());
        Ok(is_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);
        let hashed = hasher.hash("Passw0rd!").unwrap();

        assert_ne!(hashed, "Passw0rd!");
        assert!(hasher.verify("Passw0rd!", &hashed).unwrap());
        assert!(!hasher.verify("Passw0rd?", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_produces_different_hashes() {
        let hasher = PasswordHasher::new(4);

        let first = hasher.hash("Passw0rd!").unwrap();
        let second = hasher.hash("Passw0rd!").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = PasswordHasher::new(4);

        assert!(matches!(
            hasher.verify("Passw0rd!", "not-a-bcrypt-hash"),
            Err(AppError::InternalError(_))
        ));
    }
}
