//! 아이덴티티 셀 게이트웨이 (리버스 프록시)

use actix_web::web;
use log::info;

use identity_cell_backend::config::GatewayConfig;
use identity_cell_backend::handlers::gateway::GatewayProxy;
use identity_cell_backend::middlewares::metrics::init_metrics;
use identity_cell_backend::routes::configure_gateway_routes;
use identity_cell_backend::server::{bootstrap, run_http_server, startup_error};

const SERVICE_NAME: &str = "identity_gateway";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    bootstrap(SERVICE_NAME);

    let config = GatewayConfig::from_env().map_err(|e| startup_error("게이트웨이 설정 실패", e))?;
    info!("🔀 auth → {}", config.auth_service_url);
    info!("🔀 accounts → {}", config.account_service_url);

    let proxy = web::Data::new(
        GatewayProxy::new(&config).map_err(|e| startup_error("프록시 초기화 실패", e))?,
    );

    let metrics = web::Data::new(
        init_metrics().map_err(|e| startup_error("메트릭 초기화 실패", e))?,
    );

    run_http_server(SERVICE_NAME, 8080, move |cfg| {
        cfg.app_data(proxy.clone());
        cfg.app_data(metrics.clone());
        configure_gateway_routes(cfg);
    })
    .await
}
