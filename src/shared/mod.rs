//! Shared utilities used across all layers
//!
//! This module contains:
//! - Bounded collections (recent-orders ring buffer)
//! - Prometheus metrics

pub mod collections;
pub mod metrics;

pub use collections::RingBuffer;
pub use metrics::METRICS;
