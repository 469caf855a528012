use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Identifier of a registered customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer tier. Drives the discount applied at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    #[default]
    Standard,
    Premium,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Standard => "PADRAO",
            Tier::Premium => "PREMIUM",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PADRAO" | "STANDARD" => Ok(Tier::Standard),
            "PREMIUM" => Ok(Tier::Premium),
            _ => Err(DomainError::UnknownTier(s.to_string())),
        }
    }
}

/// Represents a customer placing an order.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub tier: Tier,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Customer identifier
    /// * `name` - Display name
    /// * `email` - Address that receives order confirmations
    /// * `tier` - Pricing tier
    pub fn new(id: i32, name: impl Into<String>, email: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: UserId(id),
            name: name.into(),
            email: email.into(),
            tier,
        }
    }
}
