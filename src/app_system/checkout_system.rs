use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::adapters::{ActorOrderRepository, LoggingEmailSender, SimulatedGateway};
use crate::checkout::CheckoutService;
use crate::domain::{Order, OrderId};
use crate::pricing::TierDiscountPolicy;

use super::CheckoutConfig;

/// The running application: a checkout service wired to in-process collaborators.
///
/// Responsible for starting the order store actor, wiring the service, and handling shutdown.
pub struct CheckoutSystem {
    pub checkout: CheckoutService,
    pub orders: ActorOrderRepository,
    pub email: LoggingEmailSender,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CheckoutSystem {
    pub fn new(config: &CheckoutConfig) -> Self {
        // 1. Order store
        let order_id_counter = Arc::new(AtomicU64::new(1));
        let next_order_id = move || OrderId(order_id_counter.fetch_add(1, Ordering::SeqCst));

        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.buffer_size, next_order_id);
        let orders = ActorOrderRepository::new(order_resource_client);
        let order_handle = tokio::spawn(order_actor.run());

        // 2. Gateway and email
        let gateway = SimulatedGateway::new(config.approval_limit(), config.declined_cards());
        let email = LoggingEmailSender::new();

        // 3. Checkout service
        let discounts = TierDiscountPolicy::with_premium_percent(config.premium_discount_percent());
        let mut checkout = CheckoutService::new(
            Arc::new(gateway),
            Arc::new(orders.clone()),
            Arc::new(email.clone()),
        )
        .with_discount_policy(Arc::new(discounts));
        if let Some(limit) = config.collaborator_timeout() {
            checkout = checkout.with_timeout(limit);
        }

        info!(buffer_size = config.buffer_size, "Checkout system started");

        Self {
            checkout,
            orders,
            email,
            handles: vec![order_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // The store actor stops once every client handle is gone,
        // including the one held inside the checkout service.
        drop(self.checkout);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!(emails_sent = self.email.sent_count(), "System shutdown complete.");
        Ok(())
    }
}
