//! MongoDB 연결 관리 모듈
//!
//! 애플리케이션 전역에서 사용하는 MongoDB 클라이언트를 생성하고 관리합니다.
//! 연결 시 `ping` 명령으로 서버 가용성을 확인합니다.

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// 내부의 `mongodb::Client`는 커넥션 풀을 가지고 있으므로
/// 서비스 시작 시 한 번만 생성하여 리포지토리들이 공유합니다.
#[derive(Clone, Debug)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새로운 MongoDB 연결을 생성합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "identity_cell")
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let database = Database::new("identity_account").await?;
    /// ```
    pub async fn new(app_name: &str) -> Result<Self, mongodb::error::Error> {
        let mongodb_uri = DatabaseConfig::uri();
        let database_name = DatabaseConfig::database_name();

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some(app_name.to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// ```rust,ignore
    /// let users = database.get_database().collection::<User>("user");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
