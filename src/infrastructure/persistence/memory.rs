//! 内存订单仓储
//!
//! 进程内的订单表，id 从 1 开始递增。用于开发环境（`memory:`）和测试。

use super::record::{order_id, row_id, OrderRecord};
use crate::domain::entities::Order;
use crate::domain::logger::Logger;
use crate::domain::repository::{OrderRepository, RepositoryError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// 内存订单表
struct Table {
    rows: BTreeMap<i64, OrderRecord>,
    next_id: i64,
}

/// 内存订单仓储
pub struct InMemoryOrderRepository {
    table: Mutex<Table>,
    logger: Arc<dyn Logger>,
}

impl InMemoryOrderRepository {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            table: Mutex::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
            logger,
        }
    }

    /// 已保存的订单数量
    pub fn len(&self) -> usize {
        self.table.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<u64, RepositoryError> {
        if order.is_persisted() {
            return Err(RepositoryError::AlreadyPersisted(order.id()));
        }

        let id = {
            let mut table = self.table.lock();
            let id = order_id(table.next_id)?;
            let row = OrderRecord::from_order(table.next_id, order);
            table.rows.insert(row.id, row);
            table.next_id += 1;
            id
        };

        order.assign_id(id);
        self.logger.info(&format!("Order {} saved successfully", id));

        Ok(id)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Order>, RepositoryError> {
        let Some(id) = row_id(id) else {
            return Ok(None);
        };
        let record = self.table.lock().rows.get(&id).cloned();
        record.map(OrderRecord::into_order).transpose()
    }
}
