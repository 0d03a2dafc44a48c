//! # Domain Entities
//!
//! MongoDB에 영구 저장되는 도메인 엔티티입니다.
//!
//! | 엔티티 | 컬렉션 | 소유 서비스 |
//! |--------|--------|-------------|
//! | [`users::User`] | `user` | account (쓰기), auth (읽기) |
//! | [`tokens::RefreshToken`] | `refresh_tokens` | auth |

pub mod users;
pub mod tokens;
