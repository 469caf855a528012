use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, error, info, instrument};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient};
use crate::collaborators::OrderRepository;
use crate::domain::{Cart, Order, OrderCreate, OrderId};
use crate::error::RepositoryError;

impl Entity for Order {
    type Id = OrderId;
    type CreatePayload = OrderCreate;

    fn id(&self) -> &OrderId { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order is initialized with status `PROCESSADO`.
    fn from_create(id: OrderId, payload: OrderCreate) -> Result<Self, String> {
        Ok(Self::new(id.0, payload.cart, payload.total_final))
    }

    fn on_create(&mut self) -> Result<(), String> {
        if self.total_final < Decimal::ZERO {
            return Err(format!("Negative order total: {}", self.total_final));
        }
        Ok(())
    }
}

/// Order repository backed by a `ResourceActor<Order>`.
#[derive(Clone)]
pub struct ActorOrderRepository {
    inner: ResourceClient<Order>,
}

impl ActorOrderRepository {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn find(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        debug!("Sending request");
        self.inner
            .get(id)
            .await
            .map_err(|e| RepositoryError::ActorCommunicationError(e.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<usize, RepositoryError> {
        debug!("Sending request");
        self.inner
            .count()
            .await
            .map_err(|e| RepositoryError::ActorCommunicationError(e.to_string()))
    }
}

#[async_trait]
impl OrderRepository for ActorOrderRepository {
    #[instrument(skip(self, cart), fields(user_id = %cart.user.id))]
    async fn save(&self, cart: &Cart, total_final: Decimal) -> Result<Order, RepositoryError> {
        debug!("Sending request");
        let payload = OrderCreate {
            cart: cart.clone(),
            total_final,
        };
        match self.inner.create(payload).await {
            Ok(order) => {
                info!(order_id = %order.id(), "Order stored");
                Ok(order)
            }
            Err(FrameworkError::Rejected(reason)) => {
                error!(error = %reason, "Order store rejected order");
                Err(RepositoryError::Rejected(reason))
            }
            Err(e) => {
                error!(error = %e, "Order store unreachable");
                Err(RepositoryError::ActorCommunicationError(e.to_string()))
            }
        }
    }
}
