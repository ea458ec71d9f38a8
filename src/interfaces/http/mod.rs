/// HTTP Interface
///
/// axum 路由与服务器
///
/// ## Routes
/// - `POST /api/orders`: 创建订单 (201 + Location)
/// - `GET /api/orders/recent`: 最近订单（最旧的在前）
/// - `GET /api/orders/:id`: 按 ID 查询
/// - `GET /health`: 健康检查
/// - `GET /metrics`: Prometheus 指标

pub mod error;
pub mod handlers;
pub mod request;
pub mod state;

pub use error::ApiError;
pub use request::CreateOrderRequest;
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// 构建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/orders", post(handlers::create_order))
        .route("/api/orders/recent", get(handlers::recent_orders))
        .route("/api/orders/:id", get(handlers::order_by_id))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
}

/// HTTP 服务器
pub struct ApiServer {
    addr: SocketAddr,
    state: AppState,
}

impl ApiServer {
    pub fn new(addr: SocketAddr, state: AppState) -> Self {
        Self { addr, state }
    }

    /// 启动服务器，直到 `shutdown` 完成
    pub async fn run<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!("HTTP server listening on {}", listener.local_addr()?);

        axum::serve(listener, router(self.state))
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
