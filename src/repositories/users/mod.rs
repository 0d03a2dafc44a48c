//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_repo::UserStore) 포트와 MongoDB 구현체
//! [`UserRepository`](user_repo::UserRepository)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let user_repo = UserRepository::new(&database);
//! user_repo.create_indexes().await?;
//!
//! let users: Arc<dyn UserStore> = Arc::new(user_repo);
//! let user = users.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::*;
