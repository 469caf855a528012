use std::fmt;

use rust_decimal::Decimal;

use super::Cart;

/// Identifier assigned to an order by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Processed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Processed => f.write_str("PROCESSADO"),
        }
    }
}

/// A persisted customer order.
///
/// Only ever produced by an `OrderRepository` after the charge went through.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub cart: Cart,
    pub total_final: Decimal,
    pub status: OrderStatus,
}

/// Payload for persisting a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub cart: Cart,
    pub total_final: Decimal,
}

impl Order {
    pub fn new(id: u64, cart: Cart, total_final: Decimal) -> Self {
        Self {
            id: OrderId(id),
            cart,
            total_final,
            status: OrderStatus::Processed,
        }
    }
}
