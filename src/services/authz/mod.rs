//! 토큰 검증(authz) 서비스 모듈

pub mod validate_service;

pub use validate_service::*;
