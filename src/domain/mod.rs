//! # Domain Layer
//!
//! 아이덴티티 셀의 도메인 계층입니다.
//!
//! - [`entities`] - MongoDB에 저장되는 엔티티 (User, RefreshToken)
//! - [`models`] - 저장되지 않는 값 객체 (JWT 클레임, 이벤트)
//! - [`dto`] - HTTP 요청/응답 데이터 전송 객체

pub mod entities;
pub mod dto;
pub mod models;
