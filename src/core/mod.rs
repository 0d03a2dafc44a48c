//! 핵심 공통 모듈
//!
//! 모든 서비스가 공유하는 에러 타입과 결과 타입 별칭을 제공합니다.

pub mod errors;

pub use errors::*;
