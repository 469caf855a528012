//! Contracts for the services a checkout depends on.
//!
//! Each trait has exactly one operation. Production wiring uses the adapters in
//! [`crate::adapters`]; tests plug in the doubles from `test_support`.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{Cart, Order};
use crate::error::{EmailError, GatewayError, RepositoryError};

/// Card data handed to the gateway. The checkout never looks inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    pub card_number: String,
}

impl PaymentDetails {
    pub fn card(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }
}

/// Gateway answer for a charge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeOutcome {
    pub success: bool,
}

impl ChargeOutcome {
    pub fn approved() -> Self {
        Self { success: true }
    }

    pub fn declined() -> Self {
        Self { success: false }
    }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(
        &self,
        amount: Decimal,
        details: &PaymentDetails,
    ) -> Result<ChargeOutcome, GatewayError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a paid cart and returns the stored order with its assigned id.
    async fn save(&self, cart: &Cart, total_final: Decimal) -> Result<Order, RepositoryError>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Returns whether the message was accepted for delivery.
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<bool, EmailError>;
}
