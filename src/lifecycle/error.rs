//! Error types for rejected intents.
//!
//! These never reach the [`ErrorChannel`](crate::state::ErrorChannel): a rejected
//! intent issues no request, so there is no remote failure to show.

use crate::lifecycle::Ticket;
use crate::model::UserId;
use thiserror::Error;

/// An intent the session refused to act on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntentError {
    /// The same request is still outstanding.
    #[error("a {0} request is already in flight")]
    InFlight(Ticket),

    /// The intent names a record the store does not hold.
    #[error("no record with id {0}")]
    UnknownRecord(UserId),
}

