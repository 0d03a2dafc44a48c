//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 한 번 생성되어 `web::Data`로 공유됩니다.
//! 외부 시스템(저장소, 메일, 이벤트 버스)은 trait 객체로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{accounts::AccountService, auth::TokenService};
//!
//! let token_service = TokenService::new(JwtConfig::from_env()?);
//! ```

pub mod users;
pub mod auth;
pub mod authz;
pub mod accounts;
pub mod mail;
pub mod events;
