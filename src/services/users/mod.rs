//! 사용자 자격 증명 관련 서비스 모듈
//!
//! bcrypt 비밀번호 해싱을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::PasswordHasher;
//!
//! let hasher = PasswordHasher::from_env();
//! let hashed = hasher.hash("Passw0rd!")?;
//! assert!(hasher.verify("Passw0rd!", &hashed)?);
//! ```

pub mod password_service;

pub use password_service::*;
