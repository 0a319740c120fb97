//! Pure data structures shared by the remote client, the state owners and the session.

pub mod draft;
pub mod operation;
pub mod user;

pub use draft::*;
pub use operation::*;
pub use user::*;
