//! 사용자 요청 DTO

pub mod create_user_request;
pub mod account_request;
pub mod auth_request;

pub use create_user_request::RegistrationRequest;
pub use account_request::{ForgotPasswordRequest, ResetPasswordRequest, VerificationRequest};
pub use auth_request::LoginRequest;
