//! # Remote User Resource
//!
//! The single seam between the session and the network. The session only ever talks
//! to a [`UserApi`]; production code plugs in [`HttpUserClient`], tests plug in
//! [`mock::MockUserApi`].
//!
//! Every operation reports one uniform [`RemoteError`] on any transport, status or
//! decoding problem. Nothing here retries; a failed call is reported exactly once.

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::*;

use crate::model::{Draft, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;

/// The four logical operations against the remote `/users` resource.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch the full remote collection.
    async fn list_all(&self) -> Result<Vec<User>, RemoteError>;

    /// Send the draft as a new entity; the service assigns the id.
    async fn create(&self, draft: &Draft) -> Result<User, RemoteError>;

    /// Replace the entity at `id` and return the echoed representation.
    async fn update(&self, id: UserId, draft: &Draft) -> Result<User, RemoteError>;

    /// Delete the entity at `id`.
    async fn remove(&self, id: UserId) -> Result<(), RemoteError>;
}

#[async_trait]
impl<T: UserApi + ?Sized> UserApi for Arc<T> {
    async fn list_all(&self) -> Result<Vec<User>, RemoteError> {
        (**self).list_all().await
    }

    async fn create(&self, draft: &Draft) -> Result<User, RemoteError> {
        (**self).create(draft).await
    }

    async fn update(&self, id: UserId, draft: &Draft) -> Result<User, RemoteError> {
        (**self).update(id, draft).await
    }

    async fn remove(&self, id: UserId) -> Result<(), RemoteError> {
        (**self).remove(id).await
    }
}
