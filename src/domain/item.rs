use rust_decimal::Decimal;

use crate::error::DomainError;

/// A line in a cart: a product name and its unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub price: Decimal,
}

impl Item {
    /// Creates a new Item.
    ///
    /// # Errors
    /// Returns [`DomainError::NegativePrice`] if `price` is below zero.
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self, DomainError> {
        let name = name.into();
        if price < Decimal::ZERO {
            return Err(DomainError::NegativePrice { item: name, price });
        }
        Ok(Self { name, price })
    }
}
