//! # Storefront
//!
//! Cart-to-order workflow for a single merchant, built on `actor_framework`.
//!
//! - **[model]**: data and pure rules (pricing, cart arithmetic, validation, statuses)
//! - **[product_actor]**, **[cart_actor]**, **[order_actor]**: one resource actor each
//! - **[checkout]**: converting a cart into an order inside the cart actor
//! - **[notify]**: status-change notifications
//! - **[clients]**: typed wrappers around the actors' generic clients
//! - **[lifecycle]**: starting, wiring and stopping the actors
//! - **[api]**: transport-agnostic request handlers
//! - **[config]**: fees and mailbox sizing from flags, environment or `.env`

pub mod api;
pub mod cart_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod order_actor;
pub mod product_actor;
