//! Custom actions for the Cart actor.

use crate::model::{CartLine, CartLineId, CartView, Order, ProductId, QuantityChange, ShippingDetails};

/// Every cart mutation. Each variant is one atomic step against one customer's cart.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of a product, pricing a new line from the catalog.
    AddProduct(ProductId),
    ChangeQuantity {
        line: CartLineId,
        change: QuantityChange,
    },
    RemoveLine(CartLineId),
    Clear,
    /// Converts the cart into an order and empties it.
    Checkout(ShippingDetails),
}

#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// The line that was created or incremented.
    Line(CartLine),
    /// The cart as it stands after the action.
    View(CartView),
    Placed(Order),
}

/// Creation is not a cart operation; carts are materialized by their first action.
#[derive(Debug)]
pub enum CartCreate {}

/// Carts change only through [`CartAction`].
#[derive(Debug)]
pub enum CartUpdate {}
