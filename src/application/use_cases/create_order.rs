/// Create Order Use Case
///
/// Turns a create-order command into a validated, cached and persisted order.
///
/// ## Workflow
/// 1. Log start
/// 2. Validate and construct through the order domain service (the order
///    enters the recent-orders cache here)
/// 3. Persist through the repository, which assigns the identifier onto the
///    same order instance
/// 4. Log success with the identifier
///
/// Any failure is logged with its cause and returned unchanged. There is no
/// compensation: an order whose persistence failed stays in the recent cache.
///
/// ## Example
/// ```rust,ignore
/// let use_case = CreateOrderUseCase::new(order_service, repository, logger);
/// let order = use_case.execute(command).await?;
/// assert!(order.id() > 0);
/// ```

use crate::application::dto::CreateOrderCommand;
use crate::domain::entities::Order;
use crate::domain::logger::Logger;
use crate::domain::repository::{OrderRepository, RepositoryError};
use crate::domain::services::OrderService;
use crate::domain::validation::ValidationError;
use std::sync::Arc;
use thiserror::Error;

/// Error types for the create order use case
#[derive(Debug, Error)]
pub enum CreateOrderError {
    /// Order failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Repository error
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CreateOrderError {
    /// Whether the caller supplied bad input (as opposed to a server-side failure)
    pub fn is_client_error(&self) -> bool {
        matches!(self, CreateOrderError::Validation(_))
    }
}

/// Create Order Use Case
///
/// Collaborators are injected as trait objects and chosen at process start.
pub struct CreateOrderUseCase {
    order_service: Arc<dyn OrderService>,
    order_repository: Arc<dyn OrderRepository>,
    logger: Arc<dyn Logger>,
}

impl CreateOrderUseCase {
    /// Creates a new create order use case
    ///
    /// # Arguments
    /// * `order_service` - Validates, builds and caches orders
    /// * `order_repository` - Persists orders and assigns identifiers
    /// * `logger` - Event sink
    pub fn new(
        order_service: Arc<dyn OrderService>,
        order_repository: Arc<dyn OrderRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            order_service,
            order_repository,
            logger,
        }
    }

    /// Executes the create order use case
    ///
    /// # Returns
    /// * `Ok(order)` with its identifier assigned
    /// * `Err(CreateOrderError)` if validation or persistence fails
    pub async fn execute(
        &self,
        command: CreateOrderCommand,
    ) -> Result<Arc<Order>, CreateOrderError> {
        self.logger.info("CreateOrderUseCase starting");

        match self.create_and_persist(command).await {
            Ok(order) => {
                self.logger
                    .info(&format!("Order {} created successfully", order.id()));
                Ok(order)
            }
            Err(e) => {
                self.logger
                    .error("Failed to execute CreateOrderUseCase", Some(&e));
                Err(e)
            }
        }
    }

    async fn create_and_persist(
        &self,
        command: CreateOrderCommand,
    ) -> Result<Arc<Order>, CreateOrderError> {
        // Step 1: Validate, build and cache
        let order = self.order_service.create_order(
            &command.customer_name,
            &command.product_name,
            command.quantity,
            command.unit_price,
        )?;

        // Step 2: Persist, back-filling the id
        self.order_repository.save(&order).await?;

        Ok(order)
    }
}
