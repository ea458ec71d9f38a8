//! Logger implementations
//!
//! - `TracingLogger`: 生产环境使用，事件转发到 tracing 订阅者
//! - `RecordingLogger`: 内存记录，用于测试和诊断

use crate::domain::logger::Logger;
use parking_lot::Mutex;
use std::error::Error;

/// 日志目标，便于 `RUST_LOG=order_service=debug` 过滤
const LOG_TARGET: &str = "order_service";

/// 展开完整错误链：`outer: inner: root`
pub fn render_cause(cause: &dyn Error) -> String {
    let mut rendered = cause.to_string();
    let mut source = cause.source();
    while let Some(inner) = source {
        rendered.push_str(": ");
        rendered.push_str(&inner.to_string());
        source = inner.source();
    }
    rendered
}

/// 基于 tracing 的日志实现
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    enabled: bool,
}

impl TracingLogger {
    /// 创建日志器，`enabled = false` 时丢弃所有事件
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        if !self.enabled {
            return;
        }
        tracing::info!(target: LOG_TARGET, "{}", message);
    }

    fn error(&self, message: &str, cause: Option<&dyn Error>) {
        if !self.enabled {
            return;
        }
        match cause {
            Some(cause) => {
                tracing::error!(target: LOG_TARGET, error = %render_cause(cause), "{}", message)
            }
            None => tracing::error!(target: LOG_TARGET, "{}", message),
        }
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// 一条已记录的日志事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: String,
    /// 错误链（仅错误事件）
    pub cause: Option<String>,
}

/// 内存日志记录器
#[derive(Debug, Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有事件（按记录顺序）
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().clone()
    }

    /// 仅错误事件
    pub fn errors(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .cloned()
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.events.lock().push(LogEvent {
            level: LogLevel::Info,
            message: message.to_string(),
            cause: None,
        });
    }

    fn error(&self, message: &str, cause: Option<&dyn Error>) {
        self.events.lock().push(LogEvent {
            level: LogLevel::Error,
            message: message.to_string(),
            cause: cause.map(render_cause),
        });
    }
}
