//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the storefront's actors.
//!
//! ## Wiring
//!
//! Actors are created first and receive their dependencies when they start running, so the
//! construction order never has to follow the dependency graph:
//!
//! ```text
//! catalog (Product)  <--quote--  cart (Cart)  --place-->  orders (Order)  --notify-->  Notifier
//! ```
//!
//! | Actor | Context |
//! |-------|---------|
//! | Product | `()` |
//! | Order | [`OrderContext`](crate::order_actor::OrderContext) (the notifier) |
//! | Cart | [`CartContext`](crate::cart_actor::CartContext) (catalog and order clients, fees) |
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each mailbox
//! 2. **Cart actor exits** - its receiver returns `None`, and dropping its context releases
//!    the catalog and order clients it held
//! 3. **Catalog and order actors exit** once no client is left
//! 4. **Await completion** - every actor task is joined
//!
//! The graph is acyclic (nothing calls back into the cart actor), so closing the channels is
//! enough to stop everything.
//!
//! ## Observability
//!
//! Binaries call [`actor_framework::tracing::setup_tracing`] once before starting the
//! system; `RUST_LOG` selects the levels.

pub mod storefront;

pub use storefront::*;
