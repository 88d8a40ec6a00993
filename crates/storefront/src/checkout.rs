//! # Checkout
//!
//! Turns a cart into an order. [`place_order`] runs inside the cart actor as the body of
//! `CartAction::Checkout`, so it has exclusive access to the cart for its whole duration:
//! the snapshot taken for the order and the clear that follows see the same lines.
//!
//! ## Steps
//!
//! 1. Reject an empty cart.
//! 2. Validate the shipping details, reporting every offending field.
//! 3. Freeze each line into an [`OrderItem`] and price the order with the configured [`Fees`].
//! 4. Persist the order through the order actor.
//! 5. Clear the cart.
//!
//! If step 4 fails the cart is returned untouched. Step 5 is an in-memory mutation of the
//! cart the actor already holds, so it cannot fail once the order exists.

use crate::cart_actor::{CartContext, CartError};
use crate::model::{self, Cart, Order, OrderDraft, OrderItem, OrderTotals, ShippingDetails};
use rust_decimal::Decimal;
use tracing::{error, info, instrument};

/// Flat fees added to every order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fees {
    pub shipping: Decimal,
    pub handling: Decimal,
}

impl Default for Fees {
    fn default() -> Self {
        Self {
            shipping: Decimal::new(250, 0),
            handling: Decimal::new(100, 0),
        }
    }
}

/// Builds the order payload for `cart` without touching it.
pub fn draft_order(
    cart: &Cart,
    shipping: ShippingDetails,
    fees: Fees,
) -> Result<OrderDraft, CartError> {
    if cart.is_empty() {
        return Err(CartError::EmptyCart);
    }
    shipping
        .validate()
        .map_err(|fields| CartError::Validation { fields })?;

    let items: Vec<OrderItem> = cart.lines().iter().map(OrderItem::from).collect();
    let subtotal = model::sum(items.iter().map(OrderItem::subtotal));

    Ok(OrderDraft {
        customer_id: cart.customer_id,
        items,
        shipping,
        totals: OrderTotals::new(subtotal, fees.shipping, fees.handling),
    })
}

/// Places an order for everything in `cart`, then empties it.
#[instrument(skip_all, fields(customer = %cart.customer_id))]
pub async fn place_order(
    cart: &mut Cart,
    shipping: ShippingDetails,
    ctx: &CartContext,
) -> Result<Order, CartError> {
    let draft = draft_order(cart, shipping, ctx.fees)?;
    let lines = draft.items.len();
    let total = draft.totals.total;

    let order = match ctx.orders.place(draft).await {
        Ok(order) => order,
        Err(e) => {
            error!(
                lines,
                %total,
                error = %e,
                "Order persistence failed, cart left intact"
            );
            return Err(CartError::Checkout(e.to_string()));
        }
    };

    cart.clear();
    info!(order = %order.id, reference = %order.reference, lines, %total, "Order placed, cart cleared");
    Ok(order)
}
