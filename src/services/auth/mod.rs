//! 인증 서비스 모듈
//!
//! JWT 액세스 토큰 발급/검증과 로그인, 리프레시 토큰 갱신을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let token_service = TokenService::new(JwtConfig::from_env()?);
//! let claims = token_service.verify_token(token)?;
//! ```

pub mod token_service;
pub mod auth_service;

pub use token_service::*;
pub use auth_service::*;
