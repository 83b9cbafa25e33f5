// ==========================================
// 家禽杂交预测系统 - HTTP 服务主入口
// ==========================================

use std::sync::Arc;

use anyhow::Context;
use poultry_cross::app::{router, AppState};
use poultry_cross::config::{AppConfig, ConfigManager};
use poultry_cross::{i18n, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", poultry_cross::APP_NAME);
    tracing::info!("系统版本: {}", poultry_cross::VERSION);
    tracing::info!("==================================================");

    let manager = ConfigManager::from_env();
    let config = AppConfig::load(&manager).context("配置加载失败")?;
    i18n::set_locale(&config.locale);

    tracing::info!(
        host = %config.host,
        port = config.port,
        catalog = config.catalog_path.as_deref().unwrap_or("<embedded>"),
        cache = %config.cache_backend,
        locale = %config.locale,
        "配置已加载"
    );

    let state = AppState::from_config(&config).context("AppState初始化失败")?;
    tracing::info!(
        breeds = state.catalog.len().unwrap_or(0),
        cache_enabled = state.cache.is_some(),
        "AppState初始化成功"
    );

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定地址 {}", addr))?;
    tracing::info!("监听地址: http://{}", addr);

    axum::serve(listener, router(Arc::new(state)))
        .await
        .context("HTTP 服务异常退出")?;

    Ok(())
}
