//! # Order Actor
//!
//! The order lifecycle manager. Orders are created once by checkout and afterwards change
//! only through [`OrderAction::ChangeStatus`], which enforces the transition table in
//! [`OrderStatus`](crate::model::OrderStatus) and notifies the customer.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Notifications
//!
//! A successful status change spawns the [`Notifier`](crate::notify::Notifier) call on its
//! own task. The reply to the caller does not wait for it, and a failed notification is only
//! logged: the new status stands.
//!
//! ## Retention
//!
//! Orders are never deleted; a `Delete` request is refused with [`OrderError::Retained`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use crate::notify::Notifier;
use actor_framework::{ResourceActor, ResourceClient};
use std::sync::Arc;

/// Dependencies injected into the order actor's `run()`.
#[derive(Clone)]
pub struct OrderContext {
    pub notifier: Arc<dyn Notifier>,
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
