//! Request bodies
//!
//! Every field is optional at the serde level so a missing field becomes a
//! field error in the 400 body rather than an opaque deserialization failure.

use crate::application::dto::CreateOrderCommand;
use crate::domain::validation::{
    validate_name, validate_order, validate_quantity, validate_unit_price, OrderField,
    ValidationError,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Field errors keyed by wire field name
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

/// `POST /api/orders` body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub unit_price: Option<Decimal>,
}

impl CreateOrderRequest {
    /// Checks required fields and field rules, reporting every problem at once.
    pub fn into_command(self) -> Result<CreateOrderCommand, FieldErrors> {
        let mut errors = FieldErrors::new();

        let customer_name = required(self.customer_name, OrderField::CustomerName, &mut errors);
        let product_name = required(self.product_name, OrderField::ProductName, &mut errors);
        let quantity = required(self.quantity, OrderField::Quantity, &mut errors);
        let unit_price = required(self.unit_price, OrderField::UnitPrice, &mut errors);

        if let Some(name) = &customer_name {
            record(&mut errors, validate_name(OrderField::CustomerName, name));
        }
        if let Some(name) = &product_name {
            record(&mut errors, validate_name(OrderField::ProductName, name));
        }
        if let Some(quantity) = quantity {
            record(&mut errors, validate_quantity(quantity));
        }
        if let Some(unit_price) = unit_price {
            record(&mut errors, validate_unit_price(unit_price));
        }

        match (customer_name, product_name, quantity, unit_price) {
            (Some(customer_name), Some(product_name), Some(quantity), Some(unit_price))
                if errors.is_empty() =>
            {
                // 单字段都通过后再检查总额
                record(
                    &mut errors,
                    validate_order(&customer_name, &product_name, quantity, unit_price),
                );
                if !errors.is_empty() {
                    return Err(errors);
                }
                Ok(CreateOrderCommand {
                    customer_name,
                    product_name,
                    quantity,
                    unit_price,
                })
            }
            _ => Err(errors),
        }
    }
}

fn required<T>(value: Option<T>, field: OrderField, errors: &mut FieldErrors) -> Option<T> {
    if value.is_none() {
        errors
            .entry(field.wire_name())
            .or_default()
            .push(format!("{} is required", field));
    }
    value
}

fn record(errors: &mut FieldErrors, result: Result<(), ValidationError>) {
    if let Err(e) = result {
        errors
            .entry(e.field().wire_name())
            .or_default()
            .push(e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CreateOrderRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let command = parse(
            r#"{"customerName":"Alice","productName":"Widget","quantity":3,"unitPrice":9.99}"#,
        )
        .into_command()
        .unwrap();

        assert_eq!(command.customer_name, "Alice");
        assert_eq!(command.quantity, 3);
        assert_eq!(command.unit_price, Decimal::new(999, 2));
    }

    #[test]
    fn test_missing_fields_reported() {
        let errors = parse("{}").into_command().unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors["customerName"], vec!["Customer name is required"]);
        assert_eq!(errors["unitPrice"], vec!["Unit price is required"]);
    }

    #[test]
    fn test_rule_violations_reported() {
        let errors = parse(
            r#"{"customerName":"","productName":"Widget","quantity":0,"unitPrice":-1}"#,
        )
        .into_command()
        .unwrap_err();

        assert_eq!(errors["customerName"], vec!["Customer name cannot be empty"]);
        assert_eq!(errors["quantity"], vec!["Quantity must be greater than zero"]);
        assert_eq!(errors["unitPrice"], vec!["Unit price cannot be negative"]);
        assert!(!errors.contains_key("productName"));
    }

    #[test]
    fn test_zero_price_accepted() {
        let command = parse(
            r#"{"customerName":"Alice","productName":"Sample","quantity":1,"unitPrice":0}"#,
        )
        .into_command()
        .unwrap();
        assert_eq!(command.unit_price, Decimal::ZERO);
    }

    #[test]
    fn test_name_too_long() {
        let body = serde_json::json!({
            "customerName": "x".repeat(101),
            "productName": "Widget",
            "quantity": 1,
            "unitPrice": 1
        });
        let request: CreateOrderRequest = serde_json::from_value(body).unwrap();

        let errors = request.into_command().unwrap_err();
        assert_eq!(
            errors["customerName"],
            vec!["Customer name must be at most 100 characters"]
        );
    }

    #[test]
    fn test_unit_price_read_exactly() {
        let command = parse(concat!(
            r#"{"customerName":"Alice","productName":"Sample","#,
            r#""quantity":1,"unitPrice":0.123456789012345678}"#,
        ))
        .into_command()
        .unwrap();

        assert_eq!(command.unit_price, Decimal::new(123_456_789_012_345_678, 18));
        assert_eq!(command.unit_price.to_string(), "0.123456789012345678");
    }
}
