//! Prometheus Metrics Module
//!
//! 订单服务的核心指标
//!
//! ## 指标类型
//! - **Counter**: 订单处理结果、错误总数
//! - **Histogram**: HTTP请求耗时
//!
//! ## 使用示例
//! ```rust,ignore
//! use order_service::shared::metrics::METRICS;
//!
//! METRICS.orders_total.with_label_values(&["created"]).inc();
//!
//! let timer = METRICS.request_duration.with_label_values(&["create_order"]).start_timer();
//! // ... 处理请求 ...
//! timer.observe_duration();
//! ```

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};

lazy_static! {
    /// 全局Metrics实例
    pub static ref METRICS: Metrics = Metrics::new();
}

/// 订单服务指标
pub struct Metrics {
    /// 订单处理结果 (created / rejected / failed)
    pub orders_total: CounterVec,

    /// 错误总数 (按类型)
    pub errors_total: CounterVec,

    /// 请求耗时分布 (秒)
    pub request_duration: HistogramVec,
}

impl Metrics {
    /// 创建并注册全部指标
    ///
    /// 指标名固定，重复注册只会发生在编程错误时，因此注册失败直接panic
    pub fn new() -> Self {
        Self {
            orders_total: register_counter_vec!(
                "order_service_orders_total",
                "Total number of order creation attempts by outcome",
                &["outcome"]
            )
            .expect("register order_service_orders_total"),

            errors_total: register_counter_vec!(
                "order_service_errors_total",
                "Total number of errors by kind",
                &["error_type"]
            )
            .expect("register order_service_errors_total"),

            request_duration: register_histogram_vec!(
                "order_service_request_duration_seconds",
                "HTTP request handling duration in seconds",
                &["route"],
                vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
            )
            .expect("register order_service_request_duration_seconds"),
        }
    }

    /// 导出Prometheus文本格式的指标
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = prometheus::gather();
        let mut buffer = vec![];
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_counter_exported() {
        METRICS.orders_total.with_label_values(&["created"]).inc();

        let output = METRICS.export().unwrap();
        assert!(output.contains("order_service_orders_total"));
    }

    #[test]
    fn test_histogram_exported() {
        METRICS
            .request_duration
            .with_label_values(&["test"])
            .observe(0.002);

        let output = METRICS.export().unwrap();
        assert!(output.contains("order_service_request_duration_seconds"));
    }

    #[test]
    fn test_errors_counter_exported() {
        // 全局共享，只校验增量
        let before = METRICS.errors_total.with_label_values(&["validation"]).get();
        METRICS.errors_total.with_label_values(&["validation"]).inc();
        let after = METRICS.errors_total.with_label_values(&["validation"]).get();
        assert!(after >= before + 1.0);
    }
}
