//! 토큰 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::RefreshTokenRequest;
pub use response::{AuthResponse, NewAccessTokenResponse};
