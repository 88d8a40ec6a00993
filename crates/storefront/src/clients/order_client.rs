//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor: placement (used by
//! checkout), lookups for customers and administrators, and status changes.
use crate::model::{CustomerId, Order, OrderDraft, OrderId, OrderReference};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn sorted(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by_key(|order| order.id.0);
    orders
}

impl OrderClient {
    /// Persists a new order. Only checkout builds drafts.
    #[instrument(skip(self, draft), fields(customer = %draft.customer_id))]
    pub async fn place(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn find_by_reference(&self, reference: OrderReference) -> Result<Order, OrderError> {
        self.inner
            .query(Filter::new(move |order: &Order| order.reference == reference))
            .await
            .map_err(Self::map_error)?
            .into_iter()
            .next()
            .ok_or_else(|| OrderError::NotFound(reference.to_string()))
    }

    /// The customer's orders, oldest first.
    #[instrument(skip(self))]
    pub async fn orders_for(&self, customer: CustomerId) -> Result<Vec<Order>, OrderError> {
        let orders = self
            .inner
            .query(Filter::new(move |order: &Order| order.customer_id == customer))
            .await
            .map_err(Self::map_error)?;
        Ok(sorted(orders))
    }

    /// Every order, oldest first.
    #[instrument(skip(self))]
    pub async fn all_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(sorted(self.list().await?))
    }

    /// Moves an order to the status with `code` and returns the updated order.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, code: u8) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::ChangeStatus(code))
            .await
            .map_err(Self::map_error)
    }
}
