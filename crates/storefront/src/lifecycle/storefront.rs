use crate::api::StorefrontApi;
use crate::cart_actor::{self, CartContext};
use crate::checkout::Fees;
use crate::clients::{CartClient, OrderClient, ProductClient};
use crate::config::StorefrontConfig;
use crate::notify::{LogNotifier, Notifier};
use crate::order_actor::{self, OrderContext};
use crate::product_actor;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The running storefront: every actor started and wired.
///
/// # Example
///
/// ```rust
/// use storefront::config::StorefrontConfig;
/// use storefront::lifecycle::Storefront;
/// use storefront::model::Customer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = Storefront::new(&StorefrontConfig::default());
///
///     let cart = system.api().get_cart(&Customer::new(1)).await?;
///     assert_eq!(cart.body.item_count, 0);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct Storefront {
    /// Client for the catalog (Product) actor
    pub catalog: ProductClient,

    /// Client for the Cart actor
    pub carts: CartClient,

    /// Client for the Order actor
    pub orders: OrderClient,

    /// Fees the cart actor charges, for checkout summaries
    fees: Fees,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl Storefront {
    /// Starts the storefront with notifications going to the log.
    pub fn new(config: &StorefrontConfig) -> Self {
        Self::with_notifier(config, Arc::new(LogNotifier))
    }

    /// Starts the storefront with a custom notifier.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_notifier(config: &StorefrontConfig, notifier: Arc<dyn Notifier>) -> Self {
        let capacity = config.mailbox_capacity;

        // 1. Create actors (no dependencies)
        let (product_actor, product_client) = product_actor::new(capacity);
        let (order_actor, order_client) = order_actor::new(capacity);
        let (cart_actor, cart_client) = cart_actor::new(capacity);

        let catalog = ProductClient::new(product_client);
        let orders = OrderClient::new(order_client);
        let carts = CartClient::new(cart_client);

        // 2. Start actors with injected context
        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext { notifier }));
        let cart_handle = tokio::spawn(cart_actor.run(CartContext {
            catalog: catalog.clone(),
            orders: orders.clone(),
            fees: config.fees(),
        }));

        info!(
            mailbox_capacity = capacity,
            shipping_fee = %config.shipping_fee,
            handling_fee = %config.handling_fee,
            "Storefront started"
        );

        Self {
            catalog,
            carts,
            orders,
            fees: config.fees(),
            handles: vec![cart_handle, product_handle, order_handle],
        }
    }

    /// Request handlers borrowing this storefront's clients.
    pub fn api(&self) -> StorefrontApi<'_> {
        StorefrontApi::new(&self.carts, &self.orders, self.fees)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops every client, then waits for each actor task. Fails if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down storefront...");

        drop(self.carts);
        drop(self.catalog);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
