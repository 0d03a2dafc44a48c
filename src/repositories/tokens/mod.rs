//! 리프레시 토큰 리포지토리 모듈
//!
//! [`RefreshTokenStore`](token_repository::RefreshTokenStore) 포트와
//! MongoDB `refresh_tokens` 컬렉션 기반 구현체를 제공합니다.

pub mod token_repository;

pub use token_repository::*;
