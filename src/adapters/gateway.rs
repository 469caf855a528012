use std::collections::HashSet;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use crate::collaborators::{ChargeOutcome, PaymentDetails, PaymentGateway};
use crate::error::GatewayError;

/// Gateway that decides locally instead of talking to an acquirer.
///
/// Declines listed cards and anything above the approval limit.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    approval_limit: Decimal,
    declined_cards: HashSet<String>,
}

impl SimulatedGateway {
    pub fn new(approval_limit: Decimal, declined_cards: impl IntoIterator<Item = String>) -> Self {
        Self {
            approval_limit,
            declined_cards: declined_cards.into_iter().collect(),
        }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    #[instrument(name = "gateway_charge", skip(self, details))]
    async fn charge(
        &self,
        amount: Decimal,
        details: &PaymentDetails,
    ) -> Result<ChargeOutcome, GatewayError> {
        if self.declined_cards.contains(&details.card_number) {
            warn!("Card is on the decline list");
            return Ok(ChargeOutcome::declined());
        }
        if amount > self.approval_limit {
            warn!(limit = %self.approval_limit, "Amount above approval limit");
            return Ok(ChargeOutcome::declined());
        }
        info!("Charge approved");
        Ok(ChargeOutcome::approved())
    }
}
