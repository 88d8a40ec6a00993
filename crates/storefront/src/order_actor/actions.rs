//! Custom actions for the Order actor.

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to the status with this numeric code.
    ///
    /// # Errors
    /// [`OrderError::UnknownStatus`](super::OrderError::UnknownStatus) for an unknown code,
    /// [`OrderError::InvalidTransition`](super::OrderError::InvalidTransition) when the
    /// transition table does not permit the move.
    ChangeStatus(u8),
}

/// Orders are immutable apart from their status.
#[derive(Debug)]
pub enum OrderUpdate {}
