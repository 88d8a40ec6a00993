//! Error types for the Cart actor.

use crate::error::ErrorKind;
use crate::model::{CartLineId, LineError, ProductId};
use thiserror::Error;

/// Errors that can occur during cart operations and checkout.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The product is missing from the catalog or not for sale.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The customer's cart has no such line.
    #[error("Cart line not found: {0}")]
    LineNotFound(CartLineId),

    /// The line cannot take another unit.
    #[error("Cart line is at its quantity limit: {0}")]
    QuantityLimit(CartLineId),

    #[error("Cart is empty")]
    EmptyCart,

    /// Shipping details failed validation. Lists every offending field.
    #[error("Invalid shipping details: {}", fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    /// The order could not be persisted. The cart is unchanged.
    #[error("Checkout failed: {0}")]
    Checkout(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::ProductNotFound(_) | CartError::LineNotFound(_) => ErrorKind::NotFound,
            CartError::EmptyCart => ErrorKind::EmptyCart,
            CartError::QuantityLimit(_) | CartError::Validation { .. } => ErrorKind::Validation,
            CartError::Checkout(_) => ErrorKind::Checkout,
            CartError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}

impl From<LineError> for CartError {
    fn from(e: LineError) -> Self {
        match e {
            LineError::Missing(line) => CartError::LineNotFound(line),
            LineError::QuantityLimit(line) => CartError::QuantityLimit(line),
        }
    }
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
