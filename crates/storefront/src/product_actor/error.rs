//! Error types for the Product actor.

use crate::error::ErrorKind;
use crate::model::ProductId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product exists but is not for sale.
    #[error("Product is not available: {0}")]
    Inactive(ProductId),

    /// A discount above 100 percent.
    #[error("Invalid discount: {0}%")]
    InvalidDiscount(u8),

    /// A negative price, or one above the catalog limit.
    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            // Inactive products are hidden from customers, so they look missing
            ProductError::NotFound(_) | ProductError::Inactive(_) => ErrorKind::NotFound,
            ProductError::InvalidDiscount(_) | ProductError::InvalidPrice(_) => ErrorKind::Validation,
            ProductError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
