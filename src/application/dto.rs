/// Data Transfer Objects
///
/// Types that cross the application boundary. `OrderView` is the wire
/// representation of an order; decimals are emitted as JSON numbers
/// carrying every stored digit.

use crate::domain::entities::Order;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input of the create-order use case
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderCommand {
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Order representation returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: u64,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub unit_price: Decimal,
    /// Derived `quantity * unit_price`
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id(),
            customer_name: order.customer_name().to_string(),
            product_name: order.product_name().to_string(),
            quantity: order.quantity(),
            unit_price: order.unit_price(),
            total_price: order.calculate_total(),
            created_at: order.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_serializes_camel_case_numbers() {
        let order = Order::new("Alice", "Widget", 3, Decimal::new(999, 2)).unwrap();
        order.assign_id(1);

        let json = serde_json::to_value(OrderView::from(&order)).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["customerName"], "Alice");
        assert_eq!(json["productName"], "Widget");
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["unitPrice"].as_f64(), Some(9.99));
        assert_eq!(json["totalPrice"].as_f64(), Some(29.97));
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_view_keeps_every_decimal_digit() {
        let price = Decimal::new(123_456_789_012_345_678, 18);
        let order = Order::new("Alice", "Sample", 2, price).unwrap();

        let json = serde_json::to_string(&OrderView::from(&order)).unwrap();
        assert!(json.contains(r#""unitPrice":0.123456789012345678"#));
        assert!(json.contains(r#""totalPrice":0.246913578024691356"#));
    }
}
