/// Infrastructure Layer - Technical Implementations
///
/// This layer contains the technical implementations of the contracts the
/// domain defines: storage, log sinks and health reporting.
///
/// The infrastructure layer depends on the domain layer but the domain
/// layer does not depend on infrastructure (dependency inversion).
///
/// ## Modules
/// - `logging`: `Logger` implementations (tracing-backed, in-memory recorder)
/// - `persistence`: `OrderRepository` implementations (SQLite via sqlx, in-memory)
/// - `observability`: Health checks

pub mod logging;
pub mod observability;
pub mod persistence;

// Re-export key types
pub use logging::{RecordingLogger, TracingLogger};
pub use observability::HealthChecker;
pub use persistence::{
    open_repository, InMemoryOrderRepository, SqliteOrderRepository, StorageTarget,
};
