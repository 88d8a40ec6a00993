//! # Caller-facing API
//!
//! A transport-agnostic boundary over the storefront. Each method corresponds to one HTTP
//! endpoint and returns either a [`Reply`] (status code plus body) or an [`ApiError`]
//! carrying the status code, the machine-readable [`ErrorKind`] and a message. A web layer
//! only has to serialize the one it gets.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`add_to_cart`](StorefrontApi::add_to_cart) | `POST /cart {productId}` |
//! | [`update_cart`](StorefrontApi::update_cart) | `PATCH /cart/{id} {operation}` |
//! | [`remove_from_cart`](StorefrontApi::remove_from_cart) | `DELETE /cart/{id}` |
//! | [`clear_cart`](StorefrontApi::clear_cart) | `DELETE /cart` |
//! | [`get_cart`](StorefrontApi::get_cart) | `GET /cart` |
//! | [`checkout_summary`](StorefrontApi::checkout_summary) | `GET /checkout` |
//! | [`place_order`](StorefrontApi::place_order) | `POST /orders {shipping details}` |
//! | [`customer_orders`](StorefrontApi::customer_orders) | `GET /orders` |
//! | [`get_order`](StorefrontApi::get_order) | `GET /orders/{id}` |
//! | [`search_order`](StorefrontApi::search_order) | `GET /orders/search?reference=` |
//! | [`all_orders`](StorefrontApi::all_orders) | `GET /admin/orders` |
//! | [`update_order_status`](StorefrontApi::update_order_status) | `PUT /orders/{id}/status {status}` |
//!
//! The authenticated [`Customer`] is supplied by the caller.

use crate::cart_actor::CartError;
use crate::checkout::Fees;
use crate::clients::{CartClient, OrderClient};
use crate::error::ErrorKind;
use crate::model::{
    CartLine, CartLineId, CartView, Customer, Order, OrderId, OrderReference, OrderTotals,
    ProductId, QuantityChange, ShippingDetails,
};
use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

/// Message shown in place of checkout failure details, which stay in the logs.
pub const CHECKOUT_FAILED_MESSAGE: &str = "Your order could not be placed. Please try again.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply<T> {
    pub status: u16,
    pub body: T,
}

impl<T> Reply<T> {
    pub fn ok(body: T) -> Self {
        Self { status: 200, body }
    }

    pub fn created(body: T) -> Self {
        Self { status: 201, body }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status: kind.status(),
            kind,
            message: message.into(),
        }
    }
}

impl From<CartError> for ApiError {
    fn from(e: CartError) -> Self {
        match e.kind() {
            ErrorKind::Checkout => ApiError::new(ErrorKind::Checkout, CHECKOUT_FAILED_MESSAGE),
            kind => ApiError::new(kind, e.to_string()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        ApiError::new(e.kind(), e.to_string())
    }
}

pub type ApiResult<T> = Result<Reply<T>, ApiError>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCartRequest {
    pub operation: QuantityChange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: u8,
}

/// Body of a successful `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub reference: OrderReference,
}

/// Request handlers over a running [`Storefront`](crate::lifecycle::Storefront).
///
/// Borrows the storefront's clients, so it cannot outlive a shutdown.
pub struct StorefrontApi<'a> {
    carts: &'a CartClient,
    orders: &'a OrderClient,
    fees: Fees,
}

impl<'a> StorefrontApi<'a> {
    pub fn new(carts: &'a CartClient, orders: &'a OrderClient, fees: Fees) -> Self {
        Self {
            carts,
            orders,
            fees,
        }
    }

    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        customer: &Customer,
        request: AddToCartRequest,
    ) -> ApiResult<CartLine> {
        let line = self
            .carts
            .add_to_cart(customer.id, request.product_id)
            .await?;
        Ok(Reply::ok(line))
    }

    #[instrument(skip(self))]
    pub async fn update_cart(
        &self,
        customer: &Customer,
        line: CartLineId,
        request: UpdateCartRequest,
    ) -> ApiResult<CartView> {
        let view = self
            .carts
            .update_quantity(customer.id, line, request.operation)
            .await?;
        Ok(Reply::ok(view))
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, customer: &Customer, line: CartLineId) -> ApiResult<CartView> {
        Ok(Reply::ok(self.carts.remove_line(customer.id, line).await?))
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, customer: &Customer) -> ApiResult<CartView> {
        Ok(Reply::ok(self.carts.clear_cart(customer.id).await?))
    }

    #[instrument(skip(self))]
    pub async fn get_cart(&self, customer: &Customer) -> ApiResult<CartView> {
        Ok(Reply::ok(self.carts.list_cart(customer.id).await?))
    }

    /// What placing the order would cost: cart subtotal plus the configured fees.
    #[instrument(skip(self))]
    pub async fn checkout_summary(&self, customer: &Customer) -> ApiResult<OrderTotals> {
        let cart = self.carts.list_cart(customer.id).await?;
        Ok(Reply::ok(OrderTotals::new(
            cart.total,
            self.fees.shipping,
            self.fees.handling,
        )))
    }

    #[instrument(skip(self, shipping))]
    pub async fn place_order(
        &self,
        customer: &Customer,
        shipping: ShippingDetails,
    ) -> ApiResult<PlacedOrder> {
        let order = self.carts.checkout(customer.id, shipping).await?;
        Ok(Reply::created(PlacedOrder {
            order_id: order.id,
            reference: order.reference,
        }))
    }

    #[instrument(skip(self))]
    pub async fn customer_orders(&self, customer: &Customer) -> ApiResult<Vec<Order>> {
        Ok(Reply::ok(self.orders.orders_for(customer.id).await?))
    }

    /// One of the customer's own orders. Orders of other customers are reported as missing.
    #[instrument(skip(self))]
    pub async fn get_order(&self, customer: &Customer, order: OrderId) -> ApiResult<Order> {
        let found = self.orders.get_order(order).await?;
        if found.customer_id != customer.id {
            return Err(OrderError::NotFound(order.to_string()).into());
        }
        Ok(Reply::ok(found))
    }

    /// Every order in the store, oldest first. For administrators.
    #[instrument(skip(self))]
    pub async fn all_orders(&self) -> ApiResult<Vec<Order>> {
        Ok(Reply::ok(self.orders.all_orders().await?))
    }

    /// Looks an order up by its reference. A malformed reference is a validation error.
    #[instrument(skip(self))]
    pub async fn search_order(&self, reference: &str) -> ApiResult<Order> {
        let reference = OrderReference::parse(reference).ok_or_else(|| {
            ApiError::new(
                ErrorKind::Validation,
                format!("Invalid order reference: {reference}"),
            )
        })?;
        Ok(Reply::ok(self.orders.find_by_reference(reference).await?))
    }

    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order: OrderId,
        request: UpdateStatusRequest,
    ) -> ApiResult<Order> {
        Ok(Reply::ok(
            self.orders.update_status(order, request.status).await?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_details_are_hidden() {
        let err = ApiError::from(CartError::Checkout("order actor closed".into()));
        assert_eq!(err.status, 500);
        assert_eq!(err.kind, ErrorKind::Checkout);
        assert_eq!(err.message, CHECKOUT_FAILED_MESSAGE);
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(ApiError::from(CartError::EmptyCart).status, 400);
        assert_eq!(
            ApiError::from(CartError::LineNotFound(CartLineId(1))).status,
            404
        );
        assert_eq!(
            ApiError::from(CartError::Validation {
                fields: vec!["email"]
            })
            .status,
            400
        );
        assert_eq!(ApiError::from(OrderError::UnknownStatus(9)).status, 409);
        assert_eq!(
            ApiError::from(OrderError::ActorCommunicationError("closed".into())).status,
            503
        );
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let err = ApiError::from(CartError::Validation {
            fields: vec!["city", "email"],
        });
        assert_eq!(err.message, "Invalid shipping details: city, email");
    }
}
