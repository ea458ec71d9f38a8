//! Order Validation - Business Rule Validation
//!
//! One rule set shared by the `Order` entity and the HTTP boundary, so a
//! request accepted at the edge is never rejected by the entity and vice versa.
//!
//! ## Validation Rules
//! - Customer and product names must not be blank
//! - Names are at most `MAX_NAME_LENGTH` characters
//! - Quantity must be at least 1
//! - Unit price must not be negative
//! - `quantity * unit_price` must fit in a `Decimal`
//!
//! ## Usage
//! ```rust
//! use order_service::domain::validation::{validate_order, ValidationError};
//! use rust_decimal::Decimal;
//!
//! let result = validate_order("Alice", "Widget", 0, Decimal::ONE);
//! assert!(matches!(result, Err(ValidationError::InvalidQuantity(0))));
//! ```

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Maximum length of customer and product names, in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Order fields subject to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderField {
    CustomerName,
    ProductName,
    Quantity,
    UnitPrice,
}

impl OrderField {
    /// Field name as it appears on the wire
    pub fn wire_name(self) -> &'static str {
        match self {
            OrderField::CustomerName => "customerName",
            OrderField::ProductName => "productName",
            OrderField::Quantity => "quantity",
            OrderField::UnitPrice => "unitPrice",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderField::CustomerName => "Customer name",
            OrderField::ProductName => "Product name",
            OrderField::Quantity => "Quantity",
            OrderField::UnitPrice => "Unit price",
        };
        f.write_str(label)
    }
}

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty or whitespace only
    #[error("{field} cannot be empty")]
    EmptyField { field: OrderField },

    /// Name exceeds the maximum length
    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: OrderField, max: usize },

    /// Quantity is zero or negative
    #[error("Quantity must be greater than zero")]
    InvalidQuantity(i32),

    /// Unit price is negative
    #[error("Unit price cannot be negative")]
    NegativeUnitPrice(Decimal),

    /// Total does not fit in a decimal
    #[error("Order total is out of range")]
    TotalOutOfRange,
}

impl ValidationError {
    /// The field this error refers to
    pub fn field(&self) -> OrderField {
        match self {
            ValidationError::EmptyField { field } | ValidationError::FieldTooLong { field, .. } => {
                *field
            }
            ValidationError::InvalidQuantity(_) => OrderField::Quantity,
            ValidationError::NegativeUnitPrice(_) | ValidationError::TotalOutOfRange => {
                OrderField::UnitPrice
            }
        }
    }
}

/// Validates a customer or product name
pub fn validate_name(field: OrderField, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::FieldTooLong {
            field,
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates the quantity
pub fn validate_quantity(quantity: i32) -> Result<(), ValidationError> {
    if quantity <= 0 {
        return Err(ValidationError::InvalidQuantity(quantity));
    }
    Ok(())
}

/// Validates the unit price
pub fn validate_unit_price(unit_price: Decimal) -> Result<(), ValidationError> {
    if unit_price < Decimal::ZERO {
        return Err(ValidationError::NegativeUnitPrice(unit_price));
    }
    Ok(())
}

/// Validates a complete order, stopping at the first failure
pub fn validate_order(
    customer_name: &str,
    product_name: &str,
    quantity: i32,
    unit_price: Decimal,
) -> Result<(), ValidationError> {
    validate_name(OrderField::CustomerName, customer_name)?;
    validate_name(OrderField::ProductName, product_name)?;
    validate_quantity(quantity)?;
    validate_unit_price(unit_price)?;
    validate_total(quantity, unit_price)?;
    Ok(())
}

/// Collects every rule violation instead of stopping at the first one.
///
/// Used where the caller wants to report all field errors at once.
pub fn collect_violations(
    customer_name: &str,
    product_name: &str,
    quantity: i32,
    unit_price: Decimal,
) -> Vec<ValidationError> {
    let mut violations = Vec::new();

    if let Err(e) = validate_name(OrderField::CustomerName, customer_name) {
        violations.push(e);
    }
    if let Err(e) = validate_name(OrderField::ProductName, product_name) {
        violations.push(e);
    }

    match (validate_quantity(quantity), validate_unit_price(unit_price)) {
        (Ok(()), Ok(())) => {
            if let Err(e) = validate_total(quantity, unit_price) {
                violations.push(e);
            }
        }
        (quantity_result, price_result) => {
            violations.extend(quantity_result.err());
            violations.extend(price_result.err());
        }
    }

    violations
}

fn validate_total(quantity: i32, unit_price: Decimal) -> Result<(), ValidationError> {
    Decimal::from(quantity)
        .checked_mul(unit_price)
        .map(|_| ())
        .ok_or(ValidationError::TotalOutOfRange)
}
