//! Order entity
//!
//! Fields are fixed at construction. The only mutable part is the storage
//! identifier, which starts at 0 and is assigned exactly once after the order
//! has been persisted. The identifier is atomic so one `Arc<Order>` can be
//! shared by the recent-orders cache and the repository: whoever holds the
//! order sees the id as soon as the repository back-fills it.

use crate::domain::validation::{validate_order, ValidationError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};

/// Order entity
#[derive(Debug)]
pub struct Order {
    id: AtomicU64,
    customer_name: String,
    product_name: String,
    quantity: i32,
    unit_price: Decimal,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new, not yet persisted order stamped with the current time.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found; no order is built in that case.
    pub fn new(
        customer_name: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i32,
        unit_price: Decimal,
    ) -> Result<Self, ValidationError> {
        let customer_name = customer_name.into();
        let product_name = product_name.into();
        validate_order(&customer_name, &product_name, quantity, unit_price)?;

        Ok(Self {
            id: AtomicU64::new(0),
            customer_name,
            product_name,
            quantity,
            unit_price,
            created_at: Utc::now(),
        })
    }

    /// Rebuilds an order loaded from storage.
    ///
    /// Applies the same field validation as [`Order::new`]; the id and
    /// timestamp are taken as given.
    pub fn restore(
        id: u64,
        customer_name: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i32,
        unit_price: Decimal,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let customer_name = customer_name.into();
        let product_name = product_name.into();
        validate_order(&customer_name, &product_name, quantity, unit_price)?;

        Ok(Self {
            id: AtomicU64::new(id),
            customer_name,
            product_name,
            quantity,
            unit_price,
            created_at,
        })
    }

    /// Storage identifier, 0 while unsaved
    pub fn id(&self) -> u64 {
        self.id.load(Ordering::Acquire)
    }

    pub fn is_persisted(&self) -> bool {
        self.id() != 0
    }

    /// Assigns the storage identifier if none has been assigned yet.
    ///
    /// Returns `true` when the id was set. Later calls, and calls with 0,
    /// leave the current id untouched and return `false`.
    pub fn assign_id(&self, id: u64) -> bool {
        if id == 0 {
            return false;
        }
        self.id
            .compare_exchange(0, id, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `quantity * unit_price`.
    ///
    /// Construction rejects orders whose total would overflow, so this never panics.
    pub fn calculate_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}
