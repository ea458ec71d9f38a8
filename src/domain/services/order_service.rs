//! Order Domain Service
//!
//! Owns order construction and the bounded recent-orders cache.
//!
//! ## Architecture
//! - Validation happens inside `Order::new`; the cache is touched only after
//!   an order has been built successfully
//! - The cache is a fixed-capacity ring behind a mutex; once full, each new
//!   order evicts the oldest one
//! - Cached entries are `Arc<Order>` shared with the rest of the pipeline, so an
//!   identifier assigned by the repository later is visible through
//!   `recent_orders()`
//!
//! ## Usage
//! ```rust
//! use order_service::domain::services::{CachingOrderService, OrderService};
//! use order_service::infrastructure::logging::RecordingLogger;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let service = CachingOrderService::new(Arc::new(RecordingLogger::new()));
//! let order = service.create_order("Alice", "Widget", 3, Decimal::new(999, 2)).unwrap();
//! assert_eq!(order.calculate_total(), Decimal::new(2997, 2));
//! assert_eq!(service.recent_orders().len(), 1);
//! ```

use crate::domain::entities::Order;
use crate::domain::logger::Logger;
use crate::domain::validation::ValidationError;
use crate::shared::collections::RingBuffer;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Default number of orders kept in the recent-orders cache
pub const MAX_RECENT_ORDERS: usize = 100;

/// Order domain operations
pub trait OrderService: Send + Sync {
    /// Validates and constructs a new order, then records it as recent.
    ///
    /// The returned order has no identifier yet.
    fn create_order(
        &self,
        customer_name: &str,
        product_name: &str,
        quantity: i32,
        unit_price: Decimal,
    ) -> Result<Arc<Order>, ValidationError>;

    /// Recently created orders, oldest first
    fn recent_orders(&self) -> Vec<Arc<Order>>;
}

/// Order service backed by an in-process recent-orders ring
pub struct CachingOrderService {
    logger: Arc<dyn Logger>,
    recent: Mutex<RingBuffer<Arc<Order>>>,
}

impl CachingOrderService {
    /// Creates a service keeping the last [`MAX_RECENT_ORDERS`] orders
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self::with_capacity(logger, MAX_RECENT_ORDERS)
    }

    /// Creates a service keeping the last `capacity` orders
    ///
    /// # Panics
    /// Panics if `capacity` is 0
    pub fn with_capacity(logger: Arc<dyn Logger>, capacity: usize) -> Self {
        Self {
            logger,
            recent: Mutex::new(RingBuffer::with_capacity(capacity)),
        }
    }

    /// Maximum number of cached orders
    pub fn capacity(&self) -> usize {
        self.recent.lock().capacity()
    }
}

impl OrderService for CachingOrderService {
    fn create_order(
        &self,
        customer_name: &str,
        product_name: &str,
        quantity: i32,
        unit_price: Decimal,
    ) -> Result<Arc<Order>, ValidationError> {
        let order = match Order::new(customer_name, product_name, quantity, unit_price) {
            Ok(order) => Arc::new(order),
            Err(e) => {
                self.logger.error(
                    &format!("Failed to create order for customer: {}", customer_name),
                    Some(&e),
                );
                return Err(e);
            }
        };

        self.recent.lock().push_overwrite(Arc::clone(&order));

        self.logger.info(&format!(
            "Order created for customer: {}, product: {}",
            customer_name, product_name
        ));

        Ok(order)
    }

    fn recent_orders(&self) -> Vec<Arc<Order>> {
        self.recent.lock().iter().cloned().collect()
    }
}
