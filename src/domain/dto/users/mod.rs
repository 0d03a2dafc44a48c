//! # User Data Transfer Objects Module
//!
//! 계정/인증 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! | 엔드포인트 | 요청 DTO | 응답 |
//! |------------|----------|------|
//! | `POST /api/v1/accounts/register` | [`RegistrationRequest`] | [`UserResponse`] (201) |
//! | `POST /api/v1/accounts/verify` | [`VerificationRequest`] | 텍스트 |
//! | `POST /api/v1/accounts/forgot-password` | [`ForgotPasswordRequest`] | 텍스트 |
//! | `POST /api/v1/accounts/reset-password` | [`ResetPasswordRequest`] | 텍스트 |
//! | `POST /api/v1/auth/login` | [`LoginRequest`] | `AuthResponse` |

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
