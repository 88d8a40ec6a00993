//! Custom actions for the Product actor.
//!
//! These actions are handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action).

use crate::model::PriceQuote;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Prices one unit at the current discount price.
    ///
    /// # Errors
    /// Fails with [`ProductError::Inactive`](super::ProductError::Inactive) when the product
    /// has been withdrawn from sale.
    Quote,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    Quote(PriceQuote),
}
