/// Domain Services
///
/// Stateful owners of core business rules, independent of persistence and
/// transport.

pub mod order_service;

pub use order_service::{CachingOrderService, OrderService, MAX_RECENT_ORDERS};
