//! # Configuration Module
//!
//! 아이덴티티 셀 서비스들의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, `PROFILE`에 따라 `.env.dev` 또는
//! `.env.prod` 파일이 먼저 로드됩니다 (`server::load_env_file`).
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT 서명 키 및 토큰 수명 설정
//! - [`account_config`] - 재설정 링크, SMTP, 이벤트 발행 설정
//! - [`gateway_config`] - 게이트웨이 업스트림 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 공통
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8081"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="identity_cell"
//!
//! # auth / authz (반드시 같은 값)
//! export JWT_SECRET="base64-encoded-secret"
//!
//! # account
//! export APP_RESET_URL_BASE="https://udeajobs.com/reset-password"
//! export SMTP_HOST="smtp.gmail.com"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # gateway
//! export ACCOUNT_SERVICE_URL="http://account-service:8081"
//! export AUTH_SERVICE_URL="http://auth-service:8082"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod account_config;
pub mod gateway_config;

pub use data_config::*;
pub use auth_config::*;
pub use account_config::*;
pub use gateway_config::*;
