//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate. Output is
//! compact and hides module paths (`with_target(false)`); verbosity follows `RUST_LOG`.
//!
//! ```bash
//! # Intents and their results
//! RUST_LOG=info user-roster
//!
//! # Plus outgoing requests and submitted drafts
//! RUST_LOG=debug user-roster --walkthrough
//! ```
//!
//! With `RUST_LOG=info` a walkthrough reads roughly:
//!
//! ```text
//! INFO load: Loaded size=10
//! INFO submit: Created id=11 placement=Inserted size=11
//! INFO submit: Updated id=11
//! INFO delete{id=UserId(11)}: Deleted id=11 size=10
//! ```
//!
//! With `RUST_LOG=debug` every remote call also logs `Sending request` inside its own
//! span, and `submit` logs the draft it is about to send:
//!
//! ```text
//! DEBUG submit: Submitting target=Create draft=Draft { first_name: "Bob", .. }
//! DEBUG submit:create{draft=Draft { .. }}: Sending request
//! ```
//!
//! A failed call shows up once, at `warn`, with the reason kept for diagnosis:
//!
//! ```text
//! WARN delete{id=UserId(3)}: Remote call failed error=delete request failed: ...
//! ```

/// Initializes the tracing/logging infrastructure for the application.
///
/// Call once, before the first session is created.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
