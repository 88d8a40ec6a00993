//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client implements [`ActorClient`](actor_framework::ActorClient) and recovers its
//! actor's typed error from `FrameworkError::EntityError`, so callers match on
//! `ProductError`, `CartError` or `OrderError` rather than on strings.

pub mod cart_client;
pub mod order_client;
pub mod product_client;

pub use cart_client::*;
pub use order_client::*;
pub use product_client::*;
