use rust_decimal::Decimal;

use super::{Item, User};

/// A shopping cart: the customer plus the items they are buying, in order.
///
/// Built per checkout attempt and consumed by the order it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub user: User,
    pub items: Vec<Item>,
}

impl Cart {
    pub fn new(user: User, items: Vec<Item>) -> Self {
        Self { user, items }
    }

    /// Sum of item prices, before any discount.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
