//! # Session Lifecycle & Control Flow
//!
//! The [`UserSession`] turns operator intents into remote calls and applies the
//! responses to the [`state`](crate::state) owners. It is the only place where remote
//! results and local state meet.
//!
//! ## Intent Flow
//!
//! ```text
//!  intent ──> begin_*  ──> Pending* ──send(&api)──> *Response ──> finish_* ──> Outcome
//!               │                                                    │
//!               └─ Err(IntentError): nothing was sent                └─ store / selection / errors
//! ```
//!
//! `load`, `submit` and `delete` run all three phases back to back. The split form
//! exists so that several requests can be outstanding on one task; see
//! [`pending`] for the rules.
//!
//! ## Failure Containment
//!
//! A remote failure is caught in `finish_*`, logged, and written to the
//! [`ErrorChannel`](crate::state::ErrorChannel). The caller only sees
//! [`Outcome::Failed`]. Store and selection are left exactly as they were, so the
//! draft survives for a manual retry.
//!
//! ## In-flight Guard
//!
//! Every request holds a [`Ticket`] until its response is finished. Starting a request
//! whose ticket is held yields [`IntentError::InFlight`]. Updates of different users
//! hold different tickets and may overlap; their responses land on the right rows in
//! whatever order they complete.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber used by the binary. Session intents open
//! a span each; successes log at `info`, failures at `warn`.

pub mod error;
pub mod inflight;
pub mod pending;
pub mod session;
pub mod tracing;

pub use error::*;
pub use inflight::*;
pub use pending::*;
pub use session::*;
pub use self::tracing::*;
