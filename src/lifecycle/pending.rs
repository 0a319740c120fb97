//! # Pending Requests
//!
//! Each async intent is split into three phases so that several requests can be
//! outstanding on one cooperative thread:
//!
//! 1. **begin** (`UserSession::begin_*`, needs `&mut`): checks the in-flight guard and
//!    snapshots what will be sent.
//! 2. **send** (`Pending*::send`, needs only `&A`): performs the remote call.
//! 3. **finish** (`UserSession::finish_*`, needs `&mut`): applies the response.
//!
//! Responses may be finished in any order; the last one finished wins.

use crate::model::{Draft, Operation, User, UserId};
use crate::remote::{RemoteError, UserApi};
use crate::state::Mode;

/// What happened to a request once its response was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The remote call succeeded and local state was updated.
    Applied,
    /// The remote call failed; the error channel was updated.
    Failed,
}

/// A full listing waiting to be sent.
#[derive(Debug)]
#[must_use = "the request is only issued by `send`"]
pub struct PendingLoad {
    _private: (),
}

impl PendingLoad {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }

    pub async fn send<A: UserApi + ?Sized>(self, api: &A) -> LoadResponse {
        LoadResponse {
            result: api.list_all().await,
        }
    }
}

#[derive(Debug)]
#[must_use = "pass the response to `UserSession::finish_load`"]
pub struct LoadResponse {
    pub(crate) result: Result<Vec<User>, RemoteError>,
}

/// A create or update carrying the draft as it was at submit time.
#[derive(Debug)]
#[must_use = "the request is only issued by `send`"]
pub struct PendingSubmit {
    target: Mode,
    draft: Draft,
}

impl PendingSubmit {
    pub(crate) fn new(target: Mode, draft: Draft) -> Self {
        Self { target, draft }
    }

    /// `Create` sends a create, `Editing(id)` sends an update of `id`.
    pub fn target(&self) -> Mode {
        self.target
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn operation(&self) -> Operation {
        match self.target {
            Mode::Create => Operation::Create,
            Mode::Editing(_) => Operation::Update,
        }
    }

    pub async fn send<A: UserApi + ?Sized>(self, api: &A) -> SubmitResponse {
        let result = match self.target {
            Mode::Create => api.create(&self.draft).await,
            Mode::Editing(id) => api.update(id, &self.draft).await,
        };
        SubmitResponse {
            target: self.target,
            result,
        }
    }
}

#[derive(Debug)]
#[must_use = "pass the response to `UserSession::finish_submit`"]
pub struct SubmitResponse {
    pub(crate) target: Mode,
    pub(crate) result: Result<User, RemoteError>,
}

impl SubmitResponse {
    pub fn target(&self) -> Mode {
        self.target
    }
}

/// A deletion waiting to be sent.
#[derive(Debug)]
#[must_use = "the request is only issued by `send`"]
pub struct PendingDelete {
    id: UserId,
}

impl PendingDelete {
    pub(crate) fn new(id: UserId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub async fn send<A: UserApi + ?Sized>(self, api: &A) -> DeleteResponse {
        DeleteResponse {
            id: self.id,
            result: api.remove(self.id).await,
        }
    }
}

#[derive(Debug)]
#[must_use = "pass the response to `UserSession::finish_delete`"]
pub struct DeleteResponse {
    pub(crate) id: UserId,
    pub(crate) result: Result<(), RemoteError>,
}

impl DeleteResponse {
    pub fn id(&self) -> UserId {
        self.id
    }
}
