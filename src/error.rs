use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("Item {item} has a negative price: {price}")]
    NegativePrice { item: String, price: Decimal },
    #[error("Unknown user tier: {0}")]
    UnknownTier(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
#[allow(dead_code)]
pub enum GatewayError {
    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
#[allow(dead_code)]
pub enum RepositoryError {
    #[error("Order repository unavailable: {0}")]
    Unavailable(String),
    #[error("Order rejected by store: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmailError {
    #[error("Email sender unavailable: {0}")]
    Unavailable(String),
}

/// Which collaborator call a checkout was waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Charge,
    Notify,
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CheckoutStep::Charge => "charge",
            CheckoutStep::Notify => "notify",
        };
        f.write_str(name)
    }
}

/// Errors that can abort a checkout. A declined card is not one of them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Payment failed: {0}")]
    Gateway(#[from] GatewayError),
    #[error("Order could not be saved: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Timed out during {step}")]
    Timeout { step: CheckoutStep },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment configuration: {0}")]
    Env(#[from] envy::Error),
    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
