//! Domain data structures.
//!
//! Plain data plus the pure rules that operate on it (discount pricing, cart arithmetic,
//! shipping validation, status transitions). The actors in this crate own instances of these
//! types; nothing here talks to an actor.

pub mod cart;
pub mod customer;
pub mod order;
pub mod order_status;
pub mod product;

pub use cart::*;
pub use customer::*;
pub use order::*;
pub use order_status::*;
pub use product::*;
