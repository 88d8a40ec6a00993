//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`, `delete`
//! and `list` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Coupon { id: u32 }
/// #[derive(Debug)] struct CouponCreate;
/// #[derive(Debug)] struct CouponUpdate;
/// #[derive(Debug)] enum CouponAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct CouponError(String);
///
/// impl From<String> for CouponError {
///     fn from(s: String) -> Self { CouponError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Coupon {
///     type Id = u32;
///     type Create = CouponCreate;
///     type Update = CouponUpdate;
///     type Action = CouponAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = CouponError;
///
///     fn from_create_params(id: u32, _: CouponCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: CouponUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: CouponAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct CouponClient {
///     inner: ResourceClient<Coupon>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Coupon> for CouponClient {
///     type Error = CouponError;
///
///     fn inner(&self) -> &ResourceClient<Coupon> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CouponError(e.to_string())
///     }
/// }
///
/// async fn usage(client: CouponClient) {
///     // get(), delete() and list() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Every stored entity, in no particular order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .query(Filter::all())
            .await
            .map_err(Self::map_error)
    }
}
