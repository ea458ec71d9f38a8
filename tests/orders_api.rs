use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use order_service::domain::entities::Order;
use order_service::domain::repository::{OrderRepository, RepositoryError};
use order_service::domain::services::{CachingOrderService, OrderService};
use order_service::infrastructure::{InMemoryOrderRepository, RecordingLogger};
use order_service::interfaces::http::{router, AppState};
use serde_json::{json, Value};
use std::io;
use std::sync::Arc;
use tower::ServiceExt;

/// 存储不可用的仓储
struct OfflineRepository;

#[async_trait]
impl OrderRepository for OfflineRepository {
    async fn save(&self, _order: &Order) -> Result<u64, RepositoryError> {
        Err(RepositoryError::persistence(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }

    async fn find_by_id(&self, _id: u64) -> Result<Option<Order>, RepositoryError> {
        Err(RepositoryError::load(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

struct TestApp {
    router: Router,
    logger: Arc<RecordingLogger>,
    repository: Arc<InMemoryOrderRepository>,
}

fn app() -> TestApp {
    let logger = Arc::new(RecordingLogger::new());
    let service = Arc::new(CachingOrderService::new(logger.clone()));
    let repository = Arc::new(InMemoryOrderRepository::new(logger.clone()));
    let state = AppState::new(service, repository.clone(), logger.clone());

    TestApp {
        router: router(state),
        logger,
        repository,
    }
}

fn offline_app() -> (Router, Arc<RecordingLogger>, Arc<CachingOrderService>) {
    let logger = Arc::new(RecordingLogger::new());
    let service = Arc::new(CachingOrderService::new(logger.clone()));
    let state = AppState::new(service.clone(), Arc::new(OfflineRepository), logger.clone());
    (router(state), logger, service)
}

fn post_order(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn alice() -> Value {
    json!({
        "customerName": "Alice",
        "productName": "Widget",
        "quantity": 3,
        "unitPrice": 9.99
    })
}

fn assert_close(value: &Value, expected: f64) {
    let actual = value.as_f64().unwrap();
    assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
}

#[tokio::test]
async fn test_create_order_returns_created() {
    let app = app();

    let response = app.router.clone().oneshot(post_order(&alice())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    let id = body["id"].as_u64().unwrap();
    assert!(id > 0);
    assert_eq!(location, format!("/api/orders/{}", id));
    assert_eq!(body["customerName"], "Alice");
    assert_eq!(body["productName"], "Widget");
    assert_eq!(body["quantity"], 3);
    assert_close(&body["unitPrice"], 9.99);
    assert_close(&body["totalPrice"], 29.97);
    assert!(body["createdAt"].is_string());
    assert_eq!(app.repository.len(), 1);
}

#[tokio::test]
async fn test_create_order_empty_customer_rejected() {
    let app = app();
    let mut request = alice();
    request["customerName"] = json!("");

    let (status, body) = send(&app.router, post_order(&request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["errors"]["customerName"][0], "Customer name cannot be empty");
    assert!(app.repository.is_empty());
}

#[tokio::test]
async fn test_create_order_missing_fields_rejected() {
    let app = app();

    let (status, body) = send(&app.router, post_order(&json!({ "customerName": "Bob" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["productName"][0], "Product name is required");
    assert_eq!(body["errors"]["quantity"][0], "Quantity is required");
    assert_eq!(body["errors"]["unitPrice"][0], "Unit price is required");
    assert!(body["errors"].get("customerName").is_none());
}

#[tokio::test]
async fn test_create_order_malformed_body_rejected() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"customerName\": "))
        .unwrap();

    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Malformed request body"));
    assert!(app.repository.is_empty());
}

#[tokio::test]
async fn test_zero_price_order_accepted() {
    let app = app();
    let mut request = alice();
    request["unitPrice"] = json!(0);

    let (status, body) = send(&app.router, post_order(&request)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_close(&body["totalPrice"], 0.0);
}

#[tokio::test]
async fn test_recent_orders_lists_created_orders() {
    let app = app();
    send(&app.router, post_order(&alice())).await;
    let mut bob = alice();
    bob["customerName"] = json!("Bob");
    send(&app.router, post_order(&bob)).await;

    let (status, body) = send(&app.router, get("/api/orders/recent")).await;

    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["customerName"], "Alice");
    assert_eq!(orders[1]["customerName"], "Bob");
    assert!(orders[0]["id"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_recent_orders_empty() {
    let app = app();

    let (status, body) = send(&app.router, get("/api/orders/recent")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_order_by_id() {
    let app = app();
    let (_, created) = send(&app.router, post_order(&alice())).await;
    let id = created["id"].as_u64().unwrap();

    let (status, body) = send(&app.router, get(&format!("/api/orders/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["customerName"], "Alice");
    assert_close(&body["totalPrice"], 29.97);

    let (status, body) = send(&app.router, get("/api/orders/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order 999 not found");
}

#[tokio::test]
async fn test_storage_failure_returns_internal_error() {
    let (router, logger, service) = offline_app();

    let (status, body) = send(&router, post_order(&alice())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "An error occurred while creating the order");
    assert!(body.get("errors").is_none());

    // 错误被记录，原因链中包含底层错误
    let errors = logger.errors();
    assert!(errors.iter().any(|e| e.message == "Error creating order"
        && e.cause.as_deref().map_or(false, |c| c.contains("connection refused"))));

    // 缓存先于存储更新，失败后订单仍在最近列表中（id 未分配）
    let recent = service.recent_orders();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].customer_name(), "Alice");
    assert!(!recent[0].is_persisted());

    let (status, body) = send(&router, get("/api/orders/recent")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_storage_failure_on_lookup() {
    let (router, _logger, _service) = offline_app();

    let (status, body) = send(&router, get("/api/orders/1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "An error occurred while retrieving the order");
}

#[tokio::test]
async fn test_health() {
    let app = app();

    let (status, body) = send(&app.router, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_metrics_exposed() {
    let app = app();
    send(&app.router, post_order(&alice())).await;

    let response = app.router.clone().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("orders_total"));
}

#[tokio::test]
async fn test_success_is_logged() {
    let app = app();

    send(&app.router, post_order(&alice())).await;

    let messages: Vec<_> = app.logger.events().into_iter().map(|e| e.message).collect();
    assert!(messages.contains(&"CreateOrderUseCase starting".to_string()));
    assert!(messages.contains(&"Order created for customer: Alice, product: Widget".to_string()));
    assert!(messages.contains(&"Order 1 saved successfully".to_string()));
    assert!(messages.contains(&"Order 1 created successfully".to_string()));
}
