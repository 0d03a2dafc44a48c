//! User Entity Implementation
//!
//! 아이덴티티 셀의 사용자 엔티티입니다.
//! account 서비스가 생성/변경하고, auth 서비스는 같은 `user` 컬렉션을 읽어
//! 자격 증명을 확인합니다.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::utils::time::has_expired;

/// 사용자 역할
///
/// 요청에서는 대소문자를 구분하지 않고 파싱하며, 저장/직렬화 시에는 대문자를 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Role {
    Freelancer,
    Employer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Freelancer => "FREELANCER",
            Role::Employer => "EMPLOYER",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FREELANCER" => Ok(Role::Freelancer),
            "EMPLOYER" => Ok(Role::Employer),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 계정 상태
///
/// `PendingVerification` → `Active` 단방향 전이만 허용됩니다.
/// `Inactive`는 외부 관리 작업으로만 설정됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    PendingVerification,
    Active,
    Inactive,
}

/// 사용자 엔티티
///
/// MongoDB `user` 컬렉션에 camelCase 필드명으로 저장됩니다.
/// 재설정 토큰과 만료 시각은 항상 함께 설정되거나 함께 제거되므로
/// 직접 대입하지 말고 [`User::issue_reset_token`] / [`User::clear_reset_token`]을 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub full_name: String,
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시
    pub password: String,
    pub role: Role,
    pub status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_password_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_password_token_expiration: Option<DateTime>,
}

impl User {
    /// 인증 대기 상태의 새 사용자를 생성합니다.
    pub fn new_pending(
        full_name: String,
        username: String,
        email: String,
        password_hash: String,
        role: Role,
        verification_code: String,
    ) -> Self {
        Self {
            id: None,
            full_name,
            username,
            email,
            password: password_hash,
            role,
            status: AccountStatus::PendingVerification,
            verification_code: Some(verification_code),
            reset_password_token: None,
            reset_password_token_expiration: None,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 저장된 인증 코드와 일치하는지 확인합니다. 이미 사용된 코드는 항상 불일치입니다.
    pub fn matches_verification_code(&self, code: &str) -> bool {
        self.verification_code.as_deref() == Some(code)
    }

    /// 계정을 활성화하고 인증 코드를 제거합니다.
    pub fn activate(&mut self) {
        self.status = AccountStatus::Active;
        self.verification_code = None;
    }

    pub fn issue_reset_token(&mut self, token: String, expires_at: DateTime) {
        self.reset_password_token = Some(token);
        self.reset_password_token_expiration = Some(expires_at);
    }

    pub fn clear_reset_token(&mut self) {
        self.reset_password_token = None;
        self.reset_password_token_expiration = None;
    }

    /// 재설정 토큰이 `now` 기준으로 만료되었는지 확인합니다.
    /// 만료 시각이 없으면 만료된 것으로 취급합니다.
    pub fn reset_token_expired_at(&self, now: DateTime) -> bool {
        self.reset_password_token_expiration
            .map(|expires_at| has_expired(expires_at, now))
            .unwrap_or(true)
    }
}
