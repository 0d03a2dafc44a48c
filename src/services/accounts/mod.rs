//! 계정 관리 서비스 모듈
//!
//! 회원 가입, 이메일 인증, 비밀번호 재설정을 제공합니다.

pub mod account_service;

pub use account_service::*;
