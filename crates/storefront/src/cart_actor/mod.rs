//! # Cart Actor
//!
//! The cart ledger. All carts live in one actor, keyed by [`CustomerId`](crate::model::CustomerId).
//! Because the actor handles one message at a time, each customer's cart mutations and
//! checkout are serialized without locks.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Carts are never created explicitly
//!
//! `Cart` forbids the generic `Create` and `Update` requests. The first action sent for a
//! customer materializes an empty cart, which is kept only if that action succeeds. A
//! customer who has never touched their cart simply has no entity, and
//! [`CartClient::list_cart`](crate::clients::CartClient::list_cart) reports it as empty.
//!
//! ## Dependencies
//!
//! The actor's [`CartContext`] carries the catalog client (for pricing lines), the order
//! client (for checkout) and the configured [`Fees`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::checkout::Fees;
use crate::clients::{OrderClient, ProductClient};
use crate::model::Cart;
use actor_framework::{ResourceActor, ResourceClient};

/// Dependencies injected into the cart actor's `run()`.
#[derive(Clone)]
pub struct CartContext {
    pub catalog: ProductClient,
    pub orders: OrderClient,
    pub fees: Fees,
}

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer_size)
}
