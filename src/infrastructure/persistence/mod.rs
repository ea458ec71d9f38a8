//! Persistence Module
//!
//! 订单仓储实现，以及从连接字符串选择实现的工厂
//!
//! ## 连接字符串
//! - `memory:` - 进程内存储（重启后丢失）
//! - `sqlite:<path>` / `sqlite://<path>` - SQLite 数据库文件（不存在时创建）
//! - `sqlite::memory:` - SQLite 内存库
//!
//! 连接字符串没有默认值，必须由部署配置提供。

pub mod memory;
pub mod record;
pub mod sqlite;

pub use memory::InMemoryOrderRepository;
pub use record::OrderRecord;
pub use sqlite::SqliteOrderRepository;

use crate::domain::logger::Logger;
use crate::domain::repository::OrderRepository;
use sqlx::sqlite::SqliteConnectOptions;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// 连接字符串解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageTargetError {
    #[error("connection string cannot be empty")]
    Empty,

    #[error("sqlite connection string has no database path")]
    MissingPath,

    #[error("unsupported storage scheme in '{0}' (expected 'memory:' or 'sqlite:<path>')")]
    UnsupportedScheme(String),

    #[error("invalid sqlite connection string: {0}")]
    InvalidUrl(String),
}

/// 存储目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    Memory,
    /// 完整的 sqlx 连接字符串
    Sqlite(String),
}

impl FromStr for StorageTarget {
    type Err = StorageTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StorageTargetError::Empty);
        }

        if s == "memory:" || s == "memory://" {
            return Ok(StorageTarget::Memory);
        }

        let path = s
            .strip_prefix("sqlite://")
            .or_else(|| s.strip_prefix("sqlite:"))
            .ok_or_else(|| StorageTargetError::UnsupportedScheme(s.to_string()))?;

        if path.is_empty() {
            return Err(StorageTargetError::MissingPath);
        }

        SqliteConnectOptions::from_str(s)
            .map_err(|e| StorageTargetError::InvalidUrl(e.to_string()))?;
        Ok(StorageTarget::Sqlite(s.to_string()))
    }
}

impl fmt::Display for StorageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageTarget::Memory => f.write_str("memory:"),
            StorageTarget::Sqlite(url) => f.write_str(url),
        }
    }
}

/// 按存储目标创建仓储（不建立连接）
pub fn open_repository(
    target: &StorageTarget,
    logger: Arc<dyn Logger>,
) -> Result<Arc<dyn OrderRepository>, sqlx::Error> {
    let repository: Arc<dyn OrderRepository> = match target {
        StorageTarget::Memory => Arc::new(InMemoryOrderRepository::new(logger)),
        StorageTarget::Sqlite(url) => Arc::new(SqliteOrderRepository::connect_lazy(url, logger)?),
    };
    Ok(repository)
}
