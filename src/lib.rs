//! # User Roster
//!
//! > **A session-lived client core for a remote `/users` resource.**
//!
//! This crate lists, creates, edits and deletes user records held by a REST service.
//! It owns no persistent storage: the remote collection is the source of truth, and
//! the crate keeps an in-memory mirror plus the state of one edit form.
//!
//! ## 🏗️ Design Philosophy
//!
//! - **One owned state object.** Everything mutable lives in a
//!   [`UserSession`](lifecycle::UserSession); there are no globals.
//! - **Explicit modes.** Create vs edit is a tagged [`Mode`](state::Mode), not an
//!   optional id, so every submit branch is exhaustive.
//! - **Failures are data.** A failed remote call becomes one of four fixed messages in
//!   the [`ErrorChannel`](state::ErrorChannel). It never aborts the caller and never
//!   touches the operator's draft.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Role**: [`User`](model::User) records, the editable [`Draft`](model::Draft), and
//!   the wire representation [`UserRepr`](model::UserRepr).
//!
//! ### 2. The Boundary ([`remote`])
//! - **Role**: The [`UserApi`](remote::UserApi) trait and its two implementations,
//!   [`HttpUserClient`](remote::HttpUserClient) and
//!   [`MockUserApi`](remote::mock::MockUserApi).
//!
//! ### 3. The State ([`state`])
//! - **Role**: Synchronous owners with no I/O:
//!   [`RecordStore`](state::RecordStore),
//!   [`SelectionController`](state::SelectionController),
//!   [`ErrorChannel`](state::ErrorChannel).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Applies remote results to state, guards against duplicate requests, and
//!   sets up tracing.
//! - **Key items**: [`UserSession`](lifecycle::UserSession),
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 5. Settings ([`config`])
//! - **Role**: Command-line and environment configuration for the binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # List users from the public placeholder service
//! RUST_LOG=info cargo run
//!
//! # Create, edit and delete one user against a local server
//! cargo run -- --base-url http://127.0.0.1:3000 --walkthrough
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`remote::mock`] for driving a session without a network.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod remote;
pub mod state;

pub use error::Error;
