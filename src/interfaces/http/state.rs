//! Shared handler state

use crate::application::use_cases::CreateOrderUseCase;
use crate::domain::logger::Logger;
use crate::domain::repository::OrderRepository;
use crate::domain::services::OrderService;
use crate::infrastructure::observability::HealthChecker;
use std::sync::Arc;

/// Collaborators wired once at startup and shared by every request
#[derive(Clone)]
pub struct AppState {
    pub create_order: Arc<CreateOrderUseCase>,
    pub order_service: Arc<dyn OrderService>,
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
    pub health: Arc<HealthChecker>,
}

impl AppState {
    /// Builds the state, including the create-order use case, from its collaborators
    pub fn new(
        order_service: Arc<dyn OrderService>,
        repository: Arc<dyn OrderRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let create_order = Arc::new(CreateOrderUseCase::new(
            Arc::clone(&order_service),
            Arc::clone(&repository),
            Arc::clone(&logger),
        ));

        Self {
            create_order,
            order_service,
            repository,
            logger,
            health: Arc::new(HealthChecker::default()),
        }
    }
}
