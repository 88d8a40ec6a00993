//! Error types for the Order actor.

use crate::error::ErrorKind;
use crate::model::{OrderId, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Unknown order status code: {0}")]
    UnknownStatus(u8),

    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Orders are kept forever.
    #[error("Order {0} cannot be deleted")]
    Retained(OrderId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotFound(_) => ErrorKind::NotFound,
            OrderError::UnknownStatus(_) | OrderError::InvalidTransition { .. } => {
                ErrorKind::InvalidTransition
            }
            OrderError::Retained(_) => ErrorKind::Validation,
            OrderError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
