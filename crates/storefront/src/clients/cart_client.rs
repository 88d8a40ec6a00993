//! # Cart Client
//!
//! Provides a high‑level API for interacting with the `Cart` actor.
//! Every call names the customer whose cart it targets; lines of other customers are
//! unreachable by construction.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{
    Cart, CartLine, CartLineId, CartView, CustomerId, Order, ProductId, QuantityChange,
    ShippingDetails,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<CartError>() {
            Ok(err) => err,
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("Unexpected cart action result: {result:?}"))
}

impl CartClient {
    async fn act(
        &self,
        customer: CustomerId,
        action: CartAction,
    ) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(customer, action)
            .await
            .map_err(Self::map_error)
    }

    async fn act_for_view(
        &self,
        customer: CustomerId,
        action: CartAction,
    ) -> Result<CartView, CartError> {
        match self.act(customer, action).await? {
            CartActionResult::View(view) => Ok(view),
            other => Err(unexpected(other)),
        }
    }

    /// Adds one unit of `product` and returns the affected line.
    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        customer: CustomerId,
        product: ProductId,
    ) -> Result<CartLine, CartError> {
        debug!("Sending request");
        match self.act(customer, CartAction::AddProduct(product)).await? {
            CartActionResult::Line(line) => Ok(line),
            other => Err(unexpected(other)),
        }
    }

    /// Increments or decrements a line and returns the recomputed cart.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        customer: CustomerId,
        line: CartLineId,
        change: QuantityChange,
    ) -> Result<CartView, CartError> {
        debug!("Sending request");
        self.act_for_view(customer, CartAction::ChangeQuantity { line, change })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_line(
        &self,
        customer: CustomerId,
        line: CartLineId,
    ) -> Result<CartView, CartError> {
        debug!("Sending request");
        self.act_for_view(customer, CartAction::RemoveLine(line))
            .await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, customer: CustomerId) -> Result<CartView, CartError> {
        debug!("Sending request");
        self.act_for_view(customer, CartAction::Clear).await
    }

    /// The customer's lines in insertion order, with totals. A cart never used is empty.
    #[instrument(skip(self))]
    pub async fn list_cart(&self, customer: CustomerId) -> Result<CartView, CartError> {
        Ok(self
            .get(customer)
            .await?
            .map(|cart| cart.view())
            .unwrap_or_else(|| CartView::empty(customer)))
    }

    /// Converts the cart into an order. On success the cart is empty.
    #[instrument(skip(self, shipping))]
    pub async fn checkout(
        &self,
        customer: CustomerId,
        shipping: ShippingDetails,
    ) -> Result<Order, CartError> {
        debug!("Sending request");
        match self.act(customer, CartAction::Checkout(shipping)).await? {
            CartActionResult::Placed(order) => Ok(order),
            other => Err(unexpected(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn test_list_cart_of_unknown_customer_is_empty() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_get(CustomerId(9)).return_ok(None);

        let view = CartClient::new(mock.client())
            .list_cart(CustomerId(9))
            .await
            .unwrap();
        assert_eq!(view, CartView::empty(CustomerId(9)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_typed_cart_error_is_recovered() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CustomerId(1))
            .return_err(FrameworkError::EntityError(Box::new(CartError::EmptyCart)));

        let err = CartClient::new(mock.client())
            .checkout(CustomerId(1), ShippingDetails::default())
            .await
            .unwrap_err();
        assert_eq!(err, CartError::EmptyCart);
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action(CustomerId(1))
            .return_ok(CartActionResult::View(CartView::empty(CustomerId(1))));

        let err = CartClient::new(mock.client())
            .checkout(CustomerId(1), ShippingDetails::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CartError::ActorCommunicationError(_)));
        mock.verify();
    }
}
