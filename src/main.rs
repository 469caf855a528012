mod domain;
mod error;
mod pricing;
mod collaborators;
mod checkout;
mod adapters;
mod actor_framework;

mod app_system;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod test_support;

use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};

use crate::app_system::{setup_tracing, CheckoutConfig, CheckoutSystem};
use crate::collaborators::PaymentDetails;
use crate::domain::{Cart, Item, Tier, User};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = CheckoutConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting checkout demo");

    let system = CheckoutSystem::new(&config);

    let standard = User::new(1, "Alice", "alice@example.com", Tier::Standard);
    let tier: Tier = "PREMIUM".parse().map_err(|e: crate::error::DomainError| e.to_string())?;
    let premium = User::new(2, "Bruno", "bruno@example.com", tier);
    let item = Item::new("Produto Caro", Decimal::new(200, 0)).map_err(|e| e.to_string())?;

    // A card on the decline list: nothing is stored or sent
    let cart = Cart::new(standard, vec![item.clone()]);
    let span = tracing::info_span!("declined_checkout");
    let result = async {
        info!("Checking out with a declined card");
        system.checkout.process_order(&cart, &PaymentDetails::card("0000-0000")).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(None) => warn!("Order not placed"),
        Ok(Some(order)) => info!(order_id = %order.id, "Order placed"),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    // Premium customer with a good card
    let cart = Cart::new(premium, vec![item]);
    let span = tracing::info_span!("premium_checkout");
    let result = async {
        info!("Checking out as a premium customer");
        system.checkout.process_order(&cart, &PaymentDetails::card("1111-2222")).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(Some(order)) => {
            info!(
                order_id = %order.id,
                total = %order.total_final,
                status = %order.status,
                "Order placed"
            );
            let stored = system.orders.find(order.id).await.map_err(|e| e.to_string())?;
            info!(found = stored.is_some(), "Order read back from store");
        }
        Ok(None) => warn!("Order not placed"),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    let stored_orders = system.orders.count().await.map_err(|e| e.to_string())?;
    info!(stored_orders, "Demo checkouts finished");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
