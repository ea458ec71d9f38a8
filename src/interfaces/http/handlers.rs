//! Route handlers

use super::error::ApiError;
use super::request::CreateOrderRequest;
use super::state::AppState;
use crate::application::dto::OrderView;
use crate::application::use_cases::CreateOrderError;
use crate::shared::metrics::METRICS;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

const CREATE_ORDER_FAILED: &str = "An error occurred while creating the order";
const LOAD_ORDER_FAILED: &str = "An error occurred while retrieving the order";

/// `POST /api/orders`
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let _timer = METRICS
        .request_duration
        .with_label_values(&["create_order"])
        .start_timer();

    let Json(request) = payload.map_err(|rejection| {
        reject_request(&state, "Malformed create order request");
        ApiError::MalformedBody(rejection.body_text())
    })?;

    let command = request.into_command().map_err(|fields| {
        reject_request(&state, "Invalid create order request");
        ApiError::InvalidFields(fields)
    })?;

    match state.create_order.execute(command).await {
        Ok(order) => {
            METRICS.orders_total.with_label_values(&["created"]).inc();

            let view = OrderView::from(order.as_ref());
            let location = format!("/api/orders/{}", view.id);
            Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(view)).into_response())
        }
        Err(CreateOrderError::Validation(e)) => {
            METRICS.orders_total.with_label_values(&["rejected"]).inc();
            METRICS.errors_total.with_label_values(&["validation"]).inc();
            state.logger.error("Validation error creating order", Some(&e));
            Err(ApiError::Validation(e))
        }
        Err(CreateOrderError::Repository(e)) => {
            let kind = if e.is_persistence_failure() {
                "persistence"
            } else {
                "unexpected"
            };
            METRICS.orders_total.with_label_values(&["failed"]).inc();
            METRICS.errors_total.with_label_values(&[kind]).inc();
            state.logger.error("Error creating order", Some(&e));
            Err(ApiError::Internal(CREATE_ORDER_FAILED))
        }
    }
}

/// `GET /api/orders/recent`
pub async fn recent_orders(State(state): State<AppState>) -> Json<Vec<OrderView>> {
    let _timer = METRICS
        .request_duration
        .with_label_values(&["recent_orders"])
        .start_timer();

    let views = state
        .order_service
        .recent_orders()
        .iter()
        .map(|order| OrderView::from(order.as_ref()))
        .collect();

    Json(views)
}

/// `GET /api/orders/:id`
pub async fn order_by_id(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<OrderView>, ApiError> {
    let _timer = METRICS
        .request_duration
        .with_label_values(&["order_by_id"])
        .start_timer();

    match state.repository.find_by_id(id).await {
        Ok(Some(order)) => Ok(Json(OrderView::from(&order))),
        Ok(None) => {
            METRICS.errors_total.with_label_values(&["not_found"]).inc();
            state.logger.info(&format!("Order {} not found", id));
            Err(ApiError::NotFound(id))
        }
        Err(e) => {
            METRICS.errors_total.with_label_values(&["persistence"]).inc();
            state
                .logger
                .error(&format!("Error retrieving order {}", id), Some(&e));
            Err(ApiError::Internal(LOAD_ORDER_FAILED))
        }
    }
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.health.check_health())
}

/// `GET /metrics` (Prometheus text format)
pub async fn metrics(State(state): State<AppState>) -> Response {
    match METRICS.export() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            state.logger.error("Failed to export metrics", Some(&e));
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn reject_request(state: &AppState, message: &str) {
    METRICS.orders_total.with_label_values(&["rejected"]).inc();
    METRICS.errors_total.with_label_values(&["validation"]).inc();
    state.logger.info(message);
}
