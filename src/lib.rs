//! 아이덴티티 셀 백엔드
//!
//! 회원 계정, 인증, 토큰 검증을 담당하는 세 개의 상태 없는 HTTP 서비스와
//! 이들을 묶는 게이트웨이를 하나의 라이브러리와 여러 바이너리로 제공합니다.
//!
//! | 바이너리 | 역할 | 기본 포트 |
//! |----------|------|-----------|
//! | `account_service` | 회원 가입, 이메일 인증, 비밀번호 재설정 | 8081 |
//! | `auth_service` | 로그인, 액세스 토큰 갱신 | 8082 |
//! | `authz_service` | Bearer 토큰 검증 | 8083 |
//! | `identity_gateway` | `/identity-cell/*` 리버스 프록시 | 8080 |
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 서비스별 라우트 그룹
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌──────────────────────────────┐
//! │ Repositories / Mail / Events │ ← trait 뒤의 어댑터
//! └──────────────────────────────┘
//!          │
//!          ▼
//! ┌──────────────────────────────┐
//! │   MongoDB · SMTP · Redis     │
//! └──────────────────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod server;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;
