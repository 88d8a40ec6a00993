//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! Entity errors cross the actor boundary boxed inside [`FrameworkError::EntityError`];
//! clients recover the concrete type with [`FrameworkError::downcast_entity`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns the original `FrameworkError` untouched when it is not an entity error
    /// or when the boxed error is of a different type.
    ///
    /// ```rust
    /// use actor_framework::FrameworkError;
    ///
    /// #[derive(Debug, thiserror::Error, PartialEq)]
    /// #[error("out of range")]
    /// struct OutOfRange;
    ///
    /// let err = FrameworkError::EntityError(Box::new(OutOfRange));
    /// assert_eq!(err.downcast_entity::<OutOfRange>().ok(), Some(OutOfRange));
    ///
    /// let closed = FrameworkError::ActorClosed;
    /// assert!(matches!(
    ///     closed.downcast_entity::<OutOfRange>(),
    ///     Err(FrameworkError::ActorClosed)
    /// ));
    /// ```
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}
