use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, instrument, warn};

use crate::collaborators::{EmailSender, OrderRepository, PaymentDetails, PaymentGateway};
use crate::domain::{Cart, Order};
use crate::error::{CheckoutError, CheckoutStep};
use crate::pricing::{display_amount, final_total, DiscountPolicy, TierDiscountPolicy};

pub const CONFIRMATION_SUBJECT: &str = "Seu Pedido foi Aprovado!";

/// Body of the confirmation email for a stored order.
pub fn confirmation_body(order: &Order) -> String {
    format!("Pedido {} no valor de R${}", order.id, display_amount(order.total_final))
}

/// Turns a cart into a paid, stored and notified order.
///
/// The gateway is charged once per call. The order is only saved, and the
/// customer only emailed, when that charge is approved.
#[derive(Clone)]
pub struct CheckoutService {
    gateway: Arc<dyn PaymentGateway>,
    repository: Arc<dyn OrderRepository>,
    email: Arc<dyn EmailSender>,
    discounts: Arc<dyn DiscountPolicy>,
    timeout: Option<Duration>,
}

impl CheckoutService {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        repository: Arc<dyn OrderRepository>,
        email: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            gateway,
            repository,
            email,
            discounts: Arc::new(TierDiscountPolicy::default()),
            timeout: None,
        }
    }

    pub fn with_discount_policy(mut self, discounts: Arc<dyn DiscountPolicy>) -> Self {
        self.discounts = discounts;
        self
    }

    /// Bounds the charge and the confirmation email by `limit`.
    ///
    /// Saving is never cut short: once the store has the request the order
    /// may exist, so the call is always awaited to completion.
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Charges the cart and, if the payment goes through, stores and confirms the order.
    ///
    /// Returns `Ok(None)` when the gateway declines the charge. Once the order
    /// is saved it is always returned; a failed confirmation email is only logged.
    ///
    /// # Errors
    /// Propagates gateway and repository failures, or [`CheckoutError::Timeout`]
    /// when the charge outlives the configured limit.
    #[instrument(
        name = "process_order",
        skip(self, cart, details),
        fields(user_id = %cart.user.id, tier = %cart.user.tier, items = cart.items.len())
    )]
    pub async fn process_order(
        &self,
        cart: &Cart,
        details: &PaymentDetails,
    ) -> Result<Option<Order>, CheckoutError> {
        if cart.is_empty() {
            debug!("Checking out an empty cart");
        }

        // Step 1: Apply discount
        let total_final = final_total(cart, self.discounts.as_ref());
        info!(total = %cart.total(), total_final = %total_final, "Computed amount to charge");

        // Step 2: Charge
        let charge = self.gateway.charge(total_final, details);
        let outcome = match self.bounded(CheckoutStep::Charge, charge).await? {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "Charge failed");
                return Err(e.into());
            }
        };

        if !outcome.success {
            warn!(amount = %total_final, "Payment declined");
            return Ok(None);
        }
        info!(amount = %total_final, "Payment approved");

        // Step 3: Persist
        let order = match self.repository.save(cart, total_final).await {
            Ok(order) => order,
            Err(e) => {
                error!(error = %e, "Order persistence failed after successful charge");
                return Err(e.into());
            }
        };
        info!(order_id = %order.id, status = %order.status, "Order saved");

        // Step 4: Notify
        let body = confirmation_body(&order);
        let to = cart.user.email.as_str();
        let send = self.email.send_email(to, CONFIRMATION_SUBJECT, &body);
        match self.bounded(CheckoutStep::Notify, send).await {
            Ok(Ok(true)) => info!(order_id = %order.id, to, "Confirmation email sent"),
            Ok(Ok(false)) => warn!(order_id = %order.id, to, "Confirmation email was not accepted"),
            Ok(Err(e)) => warn!(order_id = %order.id, to, error = %e, "Confirmation email failed"),
            Err(e) => warn!(order_id = %order.id, to, error = %e, "Confirmation email abandoned"),
        }

        Ok(Some(order))
    }

    async fn bounded<T>(
        &self,
        step: CheckoutStep,
        call: impl Future<Output = T>,
    ) -> Result<T, CheckoutError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                error!(%step, limit_ms = limit.as_millis() as u64, "Collaborator call timed out");
                CheckoutError::Timeout { step }
            }),
            None => Ok(call.await),
        }
    }
}
