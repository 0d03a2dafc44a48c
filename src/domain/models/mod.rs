//! # Domain Models
//!
//! 저장되지 않는 도메인 값 객체입니다.
//!
//! - [`token`] - JWT 클레임
//! - [`events`] - 서비스 간 발행되는 이벤트

pub mod token;
pub mod events;
