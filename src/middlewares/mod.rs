//! # Middlewares Module
//!
//! 라우트 그룹에 적용되는 actix-web 미들웨어입니다.
//!
//! - [`metrics`] - 게이트웨이 요청 수/지연 시간 수집 (Prometheus)

pub mod metrics;
