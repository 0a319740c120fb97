//! # Remote Errors
//!
//! One failure type for every remote operation. The `reason` is kept for logs;
//! callers treat all failures the same way.

use crate::model::Operation;
use std::fmt::Display;

/// A remote operation did not succeed.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{operation} request failed: {reason}")]
pub struct RemoteError {
    pub operation: Operation,
    pub reason: String,
}

impl RemoteError {
    pub fn new(operation: Operation, reason: impl Display) -> Self {
        Self {
            operation,
            reason: reason.to_string(),
        }
    }
}
