//! SQLite 订单仓储
//!
//! `orders` 表由 sqlx 连接池访问，每次操作从池中取一个连接。
//!
//! ## 连接生命周期
//! - 创建仓储时不建立连接，首次操作时才连接并建表
//! - 连接由池复用；仓储被drop时池关闭，连接随之释放
//! - 单条 `INSERT ... RETURNING id` 写入，失败时不会留下半条记录
//!
//! ## 表结构
//! ```sql
//! CREATE TABLE orders (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     customer_name TEXT NOT NULL,
//!     product_name TEXT NOT NULL,
//!     quantity INTEGER NOT NULL,
//!     unit_price TEXT NOT NULL,
//!     total_price TEXT NOT NULL,
//!     created_at TEXT NOT NULL
//! );
//! ```

use super::record::{order_id, row_id, OrderRecord, CREATE_ORDERS_TABLE};
use crate::domain::entities::Order;
use crate::domain::logger::Logger;
use crate::domain::repository::{OrderRepository, RepositoryError};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::OnceCell;

const INSERT_ORDER: &str = "INSERT INTO orders \
    (customer_name, product_name, quantity, unit_price, total_price, created_at) \
    VALUES (?, ?, ?, ?, ?, ?) RETURNING id";

const SELECT_ORDER: &str = "SELECT id, customer_name, product_name, quantity, \
    unit_price, total_price, created_at FROM orders WHERE id = ?";

/// 文件数据库的最大连接数
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// SQLite 订单仓储
pub struct SqliteOrderRepository {
    pool: SqlitePool,
    schema: OnceCell<()>,
    logger: Arc<dyn Logger>,
}

impl SqliteOrderRepository {
    /// 按连接字符串创建仓储，连接在首次使用时建立
    ///
    /// # Errors
    /// 连接字符串无法解析时返回错误
    pub fn connect_lazy(url: &str, logger: Arc<dyn Logger>) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // 内存库在最后一个连接关闭时消失，只保留一个常驻连接
        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(DEFAULT_MAX_CONNECTIONS)
        };

        Ok(Self {
            pool: pool_options.connect_lazy_with(options),
            schema: OnceCell::new(),
            logger,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 关闭连接池
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        self.schema
            .get_or_try_init(|| async {
                sqlx::query(CREATE_ORDERS_TABLE)
                    .execute(&self.pool)
                    .await
                    .map(|_| ())
            })
            .await?;
        Ok(())
    }

    async fn insert(&self, order: &Order) -> Result<i64, sqlx::Error> {
        self.ensure_schema().await?;

        sqlx::query_scalar::<_, i64>(INSERT_ORDER)
            .bind(order.customer_name())
            .bind(order.product_name())
            .bind(order.quantity())
            .bind(order.unit_price().to_string())
            .bind(order.calculate_total().to_string())
            .bind(order.created_at())
            .fetch_one(&self.pool)
            .await
    }

    async fn select(&self, id: i64) -> Result<Option<OrderRecord>, sqlx::Error> {
        self.ensure_schema().await?;

        sqlx::query_as::<_, OrderRecord>(SELECT_ORDER)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn save(&self, order: &Order) -> Result<u64, RepositoryError> {
        if order.is_persisted() {
            return Err(RepositoryError::AlreadyPersisted(order.id()));
        }

        let row = match self.insert(order).await {
            Ok(row) => row,
            Err(e) => {
                self.logger
                    .error("Storage error while saving order", Some(&e));
                return Err(RepositoryError::persistence(e));
            }
        };

        let id = order_id(row)?;
        order.assign_id(id);
        self.logger.info(&format!("Order {} saved successfully", id));

        Ok(id)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Order>, RepositoryError> {
        let Some(row) = row_id(id) else {
            return Ok(None);
        };

        match self.select(row).await {
            Ok(record) => record.map(OrderRecord::into_order).transpose(),
            Err(e) => {
                self.logger
                    .error(&format!("Storage error while loading order {}", id), Some(&e));
                Err(RepositoryError::load(e))
            }
        }
    }
}
