//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 구조체입니다.
//! 모든 요청 DTO는 `validator::Validate`를 구현하며, 핸들러에서 서비스 호출 전에 검증됩니다.
//!
//! ```rust,ignore
//! payload.validate()?;
//! let user = account_service.register(payload.into_inner()).await?;
//! ```

pub mod users;
pub mod tokens;
