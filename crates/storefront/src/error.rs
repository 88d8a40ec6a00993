//! Machine-readable error classification shared by every actor error.

use serde::Serialize;
use std::fmt::Display;

/// What went wrong, independent of which actor reported it.
///
/// Each actor error maps itself onto a kind via `kind()`; the [`api`](crate::api) boundary
/// turns the kind into a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Validation,
    EmptyCart,
    InvalidTransition,
    Checkout,
    Unavailable,
}

impl ErrorKind {
    /// HTTP status code conventionally used for this kind.
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Validation | ErrorKind::EmptyCart => 400,
            ErrorKind::InvalidTransition => 409,
            ErrorKind::Checkout => 500,
            ErrorKind::Unavailable => 503,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation",
            ErrorKind::EmptyCart => "empty_cart",
            ErrorKind::InvalidTransition => "invalid_transition",
            ErrorKind::Checkout => "checkout",
            ErrorKind::Unavailable => "unavailable",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
