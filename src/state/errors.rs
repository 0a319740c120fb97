//! # Error Channel
//!
//! A single slot holding the most recent failure category. There is no queue and no
//! expiry: a new report overwrites the slot, and it empties only when the operator
//! dismisses it or when an operation of the same category later succeeds.

use crate::model::Operation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorChannel {
    slot: Option<Operation>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure of `operation`, replacing whatever was shown.
    pub fn report(&mut self, operation: Operation) {
        self.slot = Some(operation);
    }

    pub fn current(&self) -> Option<Operation> {
        self.slot
    }

    /// The message to show, if any.
    pub fn message(&self) -> Option<&'static str> {
        self.slot.map(Operation::failure_message)
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Clears the slot if it holds a failure of `operation`.
    pub fn resolve(&mut self, operation: Operation) -> bool {
        if self.slot == Some(operation) {
            self.slot = None;
            true
        } else {
            false
        }
    }
}
