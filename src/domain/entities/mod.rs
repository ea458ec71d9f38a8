//! Domain entities

pub mod order;

pub use order::Order;
