/// Use Cases - High-level business operations
///
/// Each use case represents one unit of work exposed to the boundary.
///
/// ## Available Use Cases
/// - `CreateOrderUseCase`: validate, cache and persist a new order

pub mod create_order;

// Re-export key types
pub use create_order::{CreateOrderError, CreateOrderUseCase};
