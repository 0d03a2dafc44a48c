//! 계정 인증 완료 이벤트

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 계정 인증이 완료되었을 때 발행되는 이벤트
///
/// 다른 셀(프로필 등)이 구독하여 사용자 정보를 초기화하는 데 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountVerifiedEvent {
    pub account_id: String,
    pub full_name: String,
    pub email: String,
}

impl From<&User> for AccountVerifiedEvent {
    fn from(user: &User) -> Self {
        Self {
            account_id: user.id_string().unwrap_or_default(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
        }
    }
}
