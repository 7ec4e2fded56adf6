//! Hello Names - 名字收集服务
//!
//! 启动流程: 加载配置 -> 初始化日志 -> 创建内存存储 -> 启动 HTTP 服务

use std::sync::Arc;

use hello_names::config::{load_config, print_config, LogConfig};
use hello_names::infrastructure::http::{AppState, HttpServer, ServerConfig};
use hello_names::infrastructure::memory::InMemoryNameStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);

    tracing::info!("Hello Names API");
    print_config(&config);

    // 名字存储随进程创建，关闭时丢弃
    let name_store = InMemoryNameStore::new().arc();
    let state = AppState::new(name_store);

    let server = HttpServer::new(ServerConfig::from_app_config(&config), state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志（`RUST_LOG` 优先于配置文件中的级别）
fn init_logging(config: &LogConfig) {
    let log_filter = format!(
        "{},hello_names={},tower_http=debug",
        config.level, config.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
