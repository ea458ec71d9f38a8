//! OrderRepository Trait - Persistence Boundary
//!
//! The domain defines what it needs from storage; `infrastructure::persistence`
//! provides the implementations.
//!
//! ## Implementations
//! - `SqliteOrderRepository`: `orders` table behind a lazily connected sqlx pool
//! - `InMemoryOrderRepository`: process-local table for development and tests

use super::entities::Order;
use async_trait::async_trait;
use thiserror::Error;

/// Boxed storage-layer failure
pub type StorageFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Repository errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage layer failed while saving
    #[error("Failed to save order to storage")]
    PersistenceFailed {
        #[source]
        source: StorageFailure,
    },

    /// The storage layer failed while loading
    #[error("Failed to load order from storage")]
    LoadFailed {
        #[source]
        source: StorageFailure,
    },

    /// The order already carries an identifier
    #[error("Order is already persisted with id {0}")]
    AlreadyPersisted(u64),

    /// A stored row cannot be turned back into a valid order
    #[error("Stored order {id} is invalid")]
    CorruptRecord {
        id: i64,
        #[source]
        source: StorageFailure,
    },
}

impl RepositoryError {
    /// Wraps a storage-layer failure raised by a save
    pub fn persistence(source: impl Into<StorageFailure>) -> Self {
        RepositoryError::PersistenceFailed {
            source: source.into(),
        }
    }

    /// Wraps a storage-layer failure raised by a load
    pub fn load(source: impl Into<StorageFailure>) -> Self {
        RepositoryError::LoadFailed {
            source: source.into(),
        }
    }

    /// Wraps a row that fails conversion or entity validation
    pub fn corrupt(id: i64, source: impl Into<StorageFailure>) -> Self {
        RepositoryError::CorruptRecord {
            id,
            source: source.into(),
        }
    }

    /// Whether this error came from the storage layer itself
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            RepositoryError::PersistenceFailed { .. } | RepositoryError::LoadFailed { .. }
        )
    }
}

/// Order persistence contract
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts the order and back-fills its generated identifier.
    ///
    /// # Arguments
    /// * `order` - An order whose id is still unset
    ///
    /// # Returns
    /// The generated identifier, which is also assigned onto `order`.
    ///
    /// # Errors
    /// * [`RepositoryError::PersistenceFailed`] when storage fails
    /// * [`RepositoryError::AlreadyPersisted`] when `order` already has an id
    async fn save(&self, order: &Order) -> Result<u64, RepositoryError>;

    /// Loads a persisted order by identifier
    ///
    /// # Errors
    /// * [`RepositoryError::LoadFailed`] when storage fails
    /// * [`RepositoryError::CorruptRecord`] when the stored row is invalid
    async fn find_by_id(&self, id: u64) -> Result<Option<Order>, RepositoryError>;
}
