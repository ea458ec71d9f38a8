//! Health Check
//!
//! 提供服务健康状态，用于负载均衡器和监控系统
//!
//! ## 响应格式
//! ```json
//! {
//!   "status": "healthy",
//!   "timestamp": "2024-01-02T03:04:05Z",
//!   "version": "0.1.0",
//!   "uptimeSeconds": 3600
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// 健康状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// 健康
    Healthy,
}

/// 健康检查响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// 状态
    pub status: HealthStatus,
    /// 时间戳
    pub timestamp: DateTime<Utc>,
    /// 版本号
    pub version: String,
    /// 运行时间（秒）
    pub uptime_seconds: u64,
}

/// 健康检查器
#[derive(Debug)]
pub struct HealthChecker {
    /// 启动时间
    start_time: Instant,
    /// 版本号
    version: String,
}

impl HealthChecker {
    /// 创建新的健康检查器
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            start_time: Instant::now(),
            version: version.into(),
        }
    }

    /// 获取运行时间（秒）
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// 生成健康检查响应
    pub fn check_health(&self) -> HealthResponse {
        HealthResponse {
            status: HealthStatus::Healthy,
            timestamp: Utc::now(),
            version: self.version.clone(),
            uptime_seconds: self.uptime_seconds(),
        }
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_checker_creation() {
        let checker = HealthChecker::new("1.0.0");
        assert_eq!(checker.version, "1.0.0");
        assert_eq!(checker.uptime_seconds(), 0);
    }

    #[test]
    fn test_health_response() {
        let checker = HealthChecker::new("1.0.0");
        let before = Utc::now();
        let response = checker.check_health();

        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.version, "1.0.0");
        assert!(response.timestamp >= before);
    }

    #[test]
    fn test_default_uses_crate_version() {
        let checker = HealthChecker::default();
        assert_eq!(checker.check_health().version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_serialization() {
        let response = HealthChecker::new("1.0.0").check_health();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], "1.0.0");
        assert!(json["uptimeSeconds"].is_u64());
        assert!(json["timestamp"].is_string());
    }
}
