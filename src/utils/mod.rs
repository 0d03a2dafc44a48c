//! 공통 유틸리티 모듈
//!
//! - [`string_utils`] - 요청 DTO용 커스텀 검증 함수
//! - [`time`] - 만료 시각 비교/계산

pub mod string_utils;
pub mod time;
