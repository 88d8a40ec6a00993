//! Entity trait implementation for the Cart domain type.
//!
//! Pricing happens here: adding a product asks the catalog for a quote and snapshots the
//! quoted unit price into the line. Later catalog changes never reach an existing line.

use super::actions::{CartAction, CartActionResult, CartCreate, CartUpdate};
use super::error::CartError;
use super::CartContext;
use crate::checkout;
use crate::model::{Cart, CustomerId, LineChange, ProductId};
use crate::product_actor::ProductError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;

fn quote_error(product_id: ProductId, e: ProductError) -> CartError {
    match e {
        ProductError::NotFound(_) | ProductError::Inactive(_) => {
            CartError::ProductNotFound(product_id)
        }
        other => CartError::ActorCommunicationError(other.to_string()),
    }
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = CustomerId;
    type Create = CartCreate;
    type Update = CartUpdate;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = CartContext;
    type Error = CartError;

    fn from_create_params(_id: CustomerId, params: CartCreate) -> Result<Self, Self::Error> {
        match params {}
    }

    fn materialize(id: &CustomerId) -> Option<Self> {
        Some(Cart::new(*id))
    }

    async fn on_update(&mut self, update: CartUpdate, _ctx: &CartContext) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::AddProduct(product_id) => {
                let quote = ctx
                    .catalog
                    .quote(product_id)
                    .await
                    .map_err(|e| quote_error(product_id, e))?;
                let line = self.add(quote)?;
                debug!(customer = %self.customer_id, line = %line.id, quantity = line.quantity, "Line added");
                Ok(CartActionResult::Line(line))
            }
            CartAction::ChangeQuantity { line, change } => {
                match self.adjust(line, change)? {
                    LineChange::Updated(updated) => {
                        debug!(customer = %self.customer_id, line = %line, quantity = updated.quantity, "Quantity changed");
                    }
                    LineChange::Removed(_) => {
                        debug!(customer = %self.customer_id, line = %line, "Line removed at zero");
                    }
                }
                Ok(CartActionResult::View(self.view()))
            }
            CartAction::RemoveLine(line) => {
                self.remove(line).ok_or(CartError::LineNotFound(line))?;
                Ok(CartActionResult::View(self.view()))
            }
            CartAction::Clear => {
                let removed = self.clear();
                debug!(customer = %self.customer_id, removed, "Cart cleared");
                Ok(CartActionResult::View(self.view()))
            }
            CartAction::Checkout(shipping) => {
                let order = checkout::place_order(self, shipping, ctx).await?;
                Ok(CartActionResult::Placed(order))
            }
        }
    }
}
