/// Application Layer - Use Cases
///
/// This layer orchestrates domain logic to implement application-specific
/// business use cases. It depends on the domain layer but is independent
/// of infrastructure details (collaborators are injected as trait objects).
///
/// ## Modules
/// - `use_cases`: High-level use case implementations
/// - `dto`: Data Transfer Objects for cross-layer communication

pub mod dto;
pub mod use_cases;

// Re-export key types
pub use dto::{CreateOrderCommand, OrderView};
pub use use_cases::{CreateOrderError, CreateOrderUseCase};
