//! Crate-level error type for setup and intent failures.
//!
//! Remote failures are not in here: they are contained by the session and surfaced
//! through the [`ErrorChannel`](crate::state::ErrorChannel).

use crate::lifecycle::IntentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The `/users` resource could not be resolved below the base URL.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error(transparent)]
    Intent(#[from] IntentError),
}
