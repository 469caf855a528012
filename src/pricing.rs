//! Discount rules applied before a cart is charged.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{Cart, Tier};

/// Decimal places kept on a charged amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Maps a customer tier to the fraction taken off the cart total.
pub trait DiscountPolicy: Send + Sync {
    /// Returns a rate in `[0, 1]`.
    fn discount_rate(&self, tier: Tier) -> Decimal;
}

/// Flat per-tier discounts. Premium customers get 10% by default.
#[derive(Debug, Clone, PartialEq)]
pub struct TierDiscountPolicy {
    pub standard: Decimal,
    pub premium: Decimal,
}

impl TierDiscountPolicy {
    pub fn with_premium_percent(percent: Decimal) -> Self {
        Self {
            standard: Decimal::ZERO,
            premium: percent / Decimal::ONE_HUNDRED,
        }
    }
}

impl Default for TierDiscountPolicy {
    fn default() -> Self {
        Self::with_premium_percent(Decimal::TEN)
    }
}

impl DiscountPolicy for TierDiscountPolicy {
    fn discount_rate(&self, tier: Tier) -> Decimal {
        match tier {
            Tier::Standard => self.standard,
            Tier::Premium => self.premium,
        }
    }
}

/// Amount to charge for `cart` once the user's discount is applied.
///
/// Rounded to cents, half away from zero.
pub fn final_total(cart: &Cart, policy: &dyn DiscountPolicy) -> Decimal {
    let rate = policy.discount_rate(cart.user.tier);
    let total = cart.total();
    if rate.is_zero() {
        return total;
    }
    (total * (Decimal::ONE - rate))
        .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount the way it appears in customer messages: no trailing zeros.
pub fn display_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}
