/// CLI Interface Module
///
/// 订单服务的命令行入口
///
/// ## Responsibilities
/// - Parse command-line arguments
/// - Initialize tracing
/// - Wire the logger, order service, repository and use case
/// - Serve HTTP until Ctrl-C

use crate::domain::logger::Logger;
use crate::domain::services::{CachingOrderService, OrderService};
use crate::infrastructure::logging::TracingLogger;
use crate::infrastructure::persistence::{open_repository, StorageTarget};
use crate::interfaces::http::{ApiServer, AppState};
use clap::Parser;
use std::error::Error;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// 订单服务命令行配置
#[derive(Parser, Debug, Clone)]
#[command(name = "order-service")]
#[command(author = "Order Service Team")]
#[command(version)]
#[command(about = "订单管理 HTTP 服务", long_about = None)]
pub struct CliConfig {
    /// 服务器监听地址
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// 服务器监听端口
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// 存储位置（memory: 或 sqlite:<path>）
    #[arg(short = 'd', long, env = "ORDERS_DATABASE_URL", hide_env_values = true)]
    pub database_url: StorageTarget,

    /// 最近订单缓存容量
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(1..))]
    pub recent_capacity: u16,

    /// 日志级别
    #[arg(
        short = 'l',
        long,
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: String,

    /// 关闭领域日志
    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// 仅显示配置不启动服务器（用于调试）
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl CliConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Runs the CLI application
///
/// Parses command-line arguments, wires every collaborator and serves
/// until Ctrl-C is received.
pub async fn run() -> Result<(), Box<dyn Error>> {
    // 解析命令行参数
    let config = CliConfig::parse();

    // 初始化日志系统
    init_logging(&config.log_level);

    tracing::info!("订单服务启动");
    tracing::debug!("配置: {:?}", config);

    println!("========================================");
    println!("  订单服务 v{}", env!("CARGO_PKG_VERSION"));
    println!("========================================");
    println!("监听地址:     {}", config.listen_addr());
    println!("存储:         {}", config.database_url);
    println!("缓存容量:     {}", config.recent_capacity);
    println!("日志级别:     {}", config.log_level);
    println!("领域日志:     {}", if config.quiet { "关闭" } else { "启用" });
    println!("========================================");

    if config.dry_run {
        println!("\nDry-run 模式 - 不启动服务器");
        return Ok(());
    }

    let state = build_state(&config)?;
    let server = ApiServer::new(config.listen_addr(), state);
    server.run(shutdown_signal()).await?;

    tracing::info!("订单服务已停止");
    Ok(())
}

/// 组装应用依赖
pub fn build_state(config: &CliConfig) -> Result<AppState, sqlx::Error> {
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new(!config.quiet));
    let order_service: Arc<dyn OrderService> = Arc::new(CachingOrderService::with_capacity(
        Arc::clone(&logger),
        usize::from(config.recent_capacity),
    ));
    let repository = open_repository(&config.database_url, Arc::clone(&logger))?;

    Ok(AppState::new(order_service, repository, logger))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("收到关闭信号"),
        Err(e) => tracing::error!("Failed to listen for Ctrl-C: {}", e),
    }
}

/// 初始化日志系统
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
