//! 订单表行格式
//!
//! 与 `orders` 表一一对应：id 为自增整数主键，金额以字符串保存以保留精度，
//! `total_price` 为冗余的派生列。内存仓储也以同样的行格式保存。

use crate::domain::entities::Order;
use crate::domain::repository::RepositoryError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// 建表语句
pub const CREATE_ORDERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    customer_name TEXT NOT NULL,
    product_name TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    unit_price TEXT NOT NULL,
    total_price TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

/// 订单表的一行
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct OrderRecord {
    pub id: i64,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: String,
    pub total_price: String,
    pub created_at: DateTime<Utc>,
}

impl OrderRecord {
    /// 由待保存的订单和新分配的主键构造行
    pub fn from_order(id: i64, order: &Order) -> Self {
        Self {
            id,
            customer_name: order.customer_name().to_string(),
            product_name: order.product_name().to_string(),
            quantity: order.quantity(),
            unit_price: order.unit_price().to_string(),
            total_price: order.calculate_total().to_string(),
            created_at: order.created_at(),
        }
    }

    /// 通过重建路径还原订单（重新执行字段校验，总额由数量和单价重新计算）
    pub fn into_order(self) -> Result<Order, RepositoryError> {
        let id = self.id;
        let order_id = order_id(id)?;
        let unit_price =
            Decimal::from_str_exact(&self.unit_price).map_err(|e| RepositoryError::corrupt(id, e))?;

        Order::restore(
            order_id,
            self.customer_name,
            self.product_name,
            self.quantity,
            unit_price,
            self.created_at,
        )
        .map_err(|e| RepositoryError::corrupt(id, e))
    }
}

/// 主键转为订单 id；主键必须为正
pub fn order_id(id: i64) -> Result<u64, RepositoryError> {
    match u64::try_from(id) {
        Ok(order_id) if order_id > 0 => Ok(order_id),
        _ => Err(RepositoryError::corrupt(id, format!("invalid primary key {}", id))),
    }
}

/// 订单 id 转为主键；超出范围的 id 不可能存在于表中
pub fn row_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}
