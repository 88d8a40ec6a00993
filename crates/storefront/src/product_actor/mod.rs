//! # Product Actor
//!
//! The catalog store: one actor holding every [`Product`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! Carts never read a product and check it separately. They ask for a quote, which the
//! product answers in one message:
//!
//! ```rust,ignore
//! let quote = product_client.quote(product_id).await?; // fails if missing or inactive
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use storefront::product_actor;
//! use storefront::clients::ProductClient;
//! use storefront::model::ProductCreate;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!
//!     // Start the actor (no dependencies)
//!     tokio::spawn(actor.run(()));
//!
//!     let lamp = client
//!         .create_product(ProductCreate {
//!             title: "Desk Lamp".to_string(),
//!             price: Decimal::new(2000, 2),
//!             discount_percent: 10,
//!         })
//!         .await?;
//!
//!     let quote = client.quote(lamp.id).await?;
//!     assert_eq!(quote.unit_price, Decimal::new(1800, 2));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
