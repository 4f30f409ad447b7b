//! The success/failure envelope returned by roster operations.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Outcome of a roster operation that can be rejected.
///
/// `data` is only present on success paths that return a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    /// Whether the operation succeeded.
    pub ok: bool,

    /// Human-readable result message.
    pub message: String,

    /// Payload of a successful operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    /// A successful outcome carrying `data`.
    #[must_use]
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            ok: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// A failed outcome with the message of `error`.
    #[must_use]
    pub fn failure(error: RosterError) -> Self {
        Self {
            ok: false,
            message: error.to_string(),
            data: None,
        }
    }

    /// Whether the operation succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Borrow the payload, if any.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Take the payload, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Transform the payload, keeping `ok` and `message`.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            ok: self.ok,
            message: self.message,
            data: self.data.map(f),
        }
    }
}

impl<T: Clone> Outcome<&T> {
    /// Detach the outcome from the roster it borrows from.
    #[must_use]
    pub fn cloned(self) -> Outcome<T> {
        self.map(T::clone)
    }
}
