//! # Session State
//!
//! The three synchronous state owners the view reads from:
//!
//! - [`RecordStore`] - the ordered collection of users mirrored from the service
//! - [`SelectionController`] - create/edit mode and the live form draft
//! - [`ErrorChannel`] - the latest user-facing failure
//!
//! None of them performs I/O. The [`lifecycle`](crate::lifecycle) layer decides when
//! to mutate them based on remote responses.

pub mod errors;
pub mod records;
pub mod selection;

pub use errors::*;
pub use records::*;
pub use selection::*;
