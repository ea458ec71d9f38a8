/// Domain Layer - Core Business Logic
///
/// Order rules and the contracts the rest of the system must satisfy. The
/// domain layer has no knowledge of HTTP, storage formats or log sinks.
///
/// ## Modules
/// - `entities`: The `Order` entity
/// - `validation`: Field rules shared by the entity and the API boundary
/// - `services`: Order domain service with the recent-orders cache
/// - `repository`: Persistence contract (`OrderRepository`)
/// - `logger`: Logging contract (`Logger`)
///
/// ## Principles
/// 1. **Pure Business Logic**: No I/O in this layer
/// 2. **Dependency Inversion**: Infrastructure implements the traits defined here
/// 3. **Testable**: Services take their collaborators as trait objects

pub mod entities;
pub mod logger;
pub mod repository;
pub mod services;
pub mod validation;

// Re-export key types
pub use entities::Order;
pub use logger::Logger;
pub use repository::{OrderRepository, RepositoryError};
pub use services::{CachingOrderService, OrderService};
pub use validation::{OrderField, ValidationError};
