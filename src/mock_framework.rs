//! # Mock Framework
//!
//! Utilities for testing resource clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_get`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it reads each request off `receiver` and
/// answers through the enclosed oneshot sender, so success, failure and
/// ordering are all under its control.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Order, OrderCreate};
    use crate::test_support::CartBuilder;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Order>(10);

        let create_task = tokio::spawn(async move {
            let payload = OrderCreate {
                cart: CartBuilder::new().build(),
                total_final: Decimal::TEN,
            };
            client.create(payload).await
        });

        let (payload, responder) =
            expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.total_final, Decimal::TEN);
        let order = Order::new(1, payload.cart, payload.total_final);
        responder.send(Ok(order.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(order));
    }

    #[tokio::test]
    async fn test_expect_get_rejects_other_requests() {
        let (client, mut receiver) = create_mock_client::<Order>(10);

        tokio::spawn(async move {
            let _ = client.count().await;
        });

        assert!(expect_get(&mut receiver).await.is_none());
    }
}
