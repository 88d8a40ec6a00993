//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource actors on Tokio. Each resource type
//! (a product, a cart, an order) lives in its own actor that owns an in-memory store and
//! processes its mailbox one request at a time.
//!
//! ## Why Resources + Actors?
//!
//! - **Uniform surface**: every resource answers the same requests (Create, Get, Update,
//!   Delete, Action, Query), so clients and tests look alike across resource types.
//! - **Isolated state**: a store is touched only by its actor's task, so there are no locks.
//! - **Coordination by message**: when resources interact, one entity's hook sends Action
//!   messages to the other resource's client.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/)
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain state and the hooks that mutate it
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the entity store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed request/reply calls
//!
//! ## Defining an Entity
//!
//! ```rust
//! use actor_framework::{ActorEntity, Filter, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Shelf {
//!     id: u32,
//!     label: String,
//! }
//!
//! #[derive(Debug)] struct ShelfCreate { label: String }
//! #[derive(Debug)] struct ShelfUpdate { label: Option<String> }
//! #[derive(Debug)] enum ShelfAction {}
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct ShelfError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32;
//!     type Create = ShelfCreate;
//!     type Update = ShelfUpdate;
//!     type Action = ShelfAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = ShelfError;
//!
//!     fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, label: params.label })
//!     }
//!
//!     async fn on_update(&mut self, update: ShelfUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(label) = update.label { self.label = label; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: ShelfAction, _: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shelf>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let shelf = client.create(ShelfCreate { label: "A1".into() }).await.unwrap();
//!     let fetched = client.get(shelf.id).await.unwrap().unwrap();
//!     assert_eq!(fetched.label, "A1");
//!
//!     let labelled_a = client
//!         .query(Filter::new(|s: &Shelf| s.label.starts_with('A')))
//!         .await
//!         .unwrap();
//!     assert_eq!(labelled_a.len(), 1);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run()`, not `new()`. Every actor and client can therefore be
//! created first and wired afterwards, so an actor can receive clients of actors built after it:
//!
//! ```text
//! let (ledger_actor, ledger_client) = ResourceActor::<Ledger>::new(32);
//! let (account_actor, account_client) = ResourceActor::<Account>::new(32);
//!
//! tokio::spawn(ledger_actor.run(()));
//! tokio::spawn(account_actor.run(AccountContext { ledger: ledger_client }));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Messages are processed **sequentially** within an actor.
//! - Different actors run in parallel.
//! - A hook that awaits another actor blocks only its own mailbox.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real [`ResourceClient`] from a queue of expectations, so
//! code that depends on an actor can be tested without spawning it. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
