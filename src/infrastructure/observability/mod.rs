//! Observability Module
//!
//! 提供服务可观测性功能：
//! - 健康检查（`GET /health`）
//!
//! Prometheus 指标见 `shared::metrics`，HTTP 端点见 `interfaces::http`。

pub mod health;

pub use health::{HealthChecker, HealthResponse, HealthStatus};
