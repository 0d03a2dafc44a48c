//! 계정 서비스 (회원 가입, 이메일 인증, 비밀번호 재설정)

use std::sync::Arc;

use actix_web::web;
use log::{info, warn};

use identity_cell_backend::config::{AccountConfig, EventConfig, MailConfig};
use identity_cell_backend::db::Database;
use identity_cell_backend::repositories::users::UserRepository;
use identity_cell_backend::routes::configure_account_routes;
use identity_cell_backend::server::{bootstrap, run_http_server, startup_error};
use identity_cell_backend::services::accounts::AccountService;
use identity_cell_backend::services::events::RedisEventPublisher;
use identity_cell_backend::services::mail::{LoggingMailSender, MailSender, SmtpMailSender};
use identity_cell_backend::services::users::PasswordHasher;

const SERVICE_NAME: &str = "account_service";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    bootstrap(SERVICE_NAME);

    info!("📡 데이터베이스 연결 중...");
    let database = Database::new(SERVICE_NAME)
        .await
        .map_err(|e| startup_error("데이터베이스 연결 실패", e))?;

    let user_repo = UserRepository::new(&database);
    user_repo
        .create_indexes()
        .await
        .map_err(|e| startup_error("인덱스 생성 실패", e))?;

    let mail: Arc<dyn MailSender> = match MailConfig::from_env() {
        Some(config) => Arc::new(
            SmtpMailSender::new(&config).map_err(|e| startup_error("SMTP 설정 실패", e))?,
        ),
        None => {
            warn!("⚠️ SMTP_HOST가 설정되지 않아 메일을 로그로만 기록합니다");
            Arc::new(LoggingMailSender)
        }
    };

    let events = RedisEventPublisher::connect(&EventConfig::from_env())
        .await
        .map_err(|e| startup_error("이벤트 버스 연결 실패", e))?;

    let hasher = PasswordHasher::from_env();
    info!("🔐 bcrypt cost: {}", hasher.cost());

    let account_service = web::Data::new(AccountService::new(
        Arc::new(user_repo),
        hasher,
        mail,
        Arc::new(events),
        AccountConfig::from_env(),
    ));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    run_http_server(SERVICE_NAME, 8081, move |cfg| {
        cfg.app_data(account_service.clone());
        configure_account_routes(cfg);
    })
    .await
}
