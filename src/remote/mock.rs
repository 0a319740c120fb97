//! # Mock User API & Testing Guide
//!
//! [`MockUserApi`] implements [`UserApi`] entirely in memory. Tests queue the
//! responses the "service" should give, hand the mock to a session, and afterwards
//! inspect which calls were made.
//!
//! ## When to use the mock vs a real server
//!
//! | Feature | MockUserApi | HTTP server |
//! |---------|-------------|-------------|
//! | **Speed** | Instant (in-memory) | Binds a socket |
//! | **Determinism** | 100% deterministic | Subject to scheduler |
//! | **Use Case** | Session logic *around* the client | The wire contract itself |
//! | **Error Injection** | Easy (`return_err`) | Needs a failing route |
//!
//! ## Example
//!
//! ```rust
//! use user_roster::lifecycle::UserSession;
//! use user_roster::model::{User, UserId};
//! use user_roster::remote::mock::{Call, MockUserApi};
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Queue responses
//!     let mock = MockUserApi::new();
//!     mock.expect_list()
//!         .return_ok(vec![User::new(1, "Ada", "", "a@x.com")]);
//!     mock.expect_remove(UserId(1)).return_err();
//!
//!     // 2. Drive the session
//!     let mut session = UserSession::new(mock.clone());
//!     session.load().await.unwrap();
//!     session.delete(UserId(1)).await.unwrap();
//!
//!     // 3. Assert
//!     assert_eq!(session.records().len(), 1);
//!     assert_eq!(mock.calls(), vec![Call::List, Call::Remove(UserId(1))]);
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in FIFO order. A call that does not match the next
//! expectation panics, which fails the test at the offending call site.

use crate::model::{Draft, Operation, User, UserId};
use crate::remote::{RemoteError, UserApi};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Reason attached to failures produced by `return_err`.
pub const SIMULATED_FAILURE: &str = "simulated transport error";

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A queued response for the next call of a given kind.
#[derive(Debug)]
enum Expectation {
    List {
        response: Result<Vec<User>, RemoteError>,
    },
    Create {
        response: Result<User, RemoteError>,
    },
    Update {
        id: UserId,
        response: Result<User, RemoteError>,
    },
    Remove {
        id: UserId,
        response: Result<(), RemoteError>,
    },
}

/// A call observed by the mock, with the payload it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(Draft),
    Update(UserId, Draft),
    Remove(UserId),
}

#[derive(Debug, Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<Call>,
}

/// An in-memory [`UserApi`] with expectation tracking.
///
/// Clones share the same queue and call log, so a test can keep one handle while
/// the session owns another.
#[derive(Debug, Clone, Default)]
pub struct MockUserApi {
    state: Arc<Mutex<MockState>>,
}

impl MockUserApi {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, expectation: Expectation) {
        self.lock().expectations.push_back(expectation);
    }

    fn next(&self, call: Call) -> Expectation {
        let mut state = self.lock();
        let expectation = state.expectations.pop_front();
        state.calls.push(call.clone());
        drop(state);
        match expectation {
            Some(expectation) => expectation,
            None => panic!("Unexpected call with no expectation left: {call:?}"),
        }
    }

    /// Expects a `list_all` call.
    pub fn expect_list(&self) -> ListExpectationBuilder<'_> {
        ListExpectationBuilder { mock: self }
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> CreateExpectationBuilder<'_> {
        CreateExpectationBuilder { mock: self }
    }

    /// Expects an `update` call for `id`.
    pub fn expect_update(&self, id: UserId) -> UpdateExpectationBuilder<'_> {
        UpdateExpectationBuilder { mock: self, id }
    }

    /// Expects a `remove` call for `id`.
    pub fn expect_remove(&self, id: UserId) -> RemoveExpectationBuilder<'_> {
        RemoveExpectationBuilder { mock: self, id }
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lock().expectations.len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

fn simulated(operation: Operation) -> RemoteError {
    RemoteError::new(operation, SIMULATED_FAILURE)
}

/// Builder for `list_all` expectations.
pub struct ListExpectationBuilder<'a> {
    mock: &'a MockUserApi,
}

impl ListExpectationBuilder<'_> {
    /// Sets the expectation to return the given collection.
    pub fn return_ok(self, users: Vec<User>) {
        self.mock.push(Expectation::List { response: Ok(users) });
    }

    /// Sets the expectation to fail.
    pub fn return_err(self) {
        self.mock.push(Expectation::List {
            response: Err(simulated(Operation::List)),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<'a> {
    mock: &'a MockUserApi,
}

impl CreateExpectationBuilder<'_> {
    /// Sets the expectation to return the created record.
    pub fn return_ok(self, user: User) {
        self.mock.push(Expectation::Create { response: Ok(user) });
    }

    /// Sets the expectation to fail.
    pub fn return_err(self) {
        self.mock.push(Expectation::Create {
            response: Err(simulated(Operation::Create)),
        });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<'a> {
    mock: &'a MockUserApi,
    id: UserId,
}

impl UpdateExpectationBuilder<'_> {
    /// Sets the expectation to return the echoed record.
    pub fn return_ok(self, user: User) {
        self.mock.push(Expectation::Update {
            id: self.id,
            response: Ok(user),
        });
    }

    /// Sets the expectation to fail.
    pub fn return_err(self) {
        self.mock.push(Expectation::Update {
            id: self.id,
            response: Err(simulated(Operation::Update)),
        });
    }
}

/// Builder for `remove` expectations.
pub struct RemoveExpectationBuilder<'a> {
    mock: &'a MockUserApi,
    id: UserId,
}

impl RemoveExpectationBuilder<'_> {
    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        self.mock.push(Expectation::Remove {
            id: self.id,
            response: Ok(()),
        });
    }

    /// Sets the expectation to fail.
    pub fn return_err(self) {
        self.mock.push(Expectation::Remove {
            id: self.id,
            response: Err(simulated(Operation::Delete)),
        });
    }
}

#[async_trait]
impl UserApi for MockUserApi {
    async fn list_all(&self) -> Result<Vec<User>, RemoteError> {
        match self.next(Call::List) {
            Expectation::List { response } => response,
            other => panic!("Expected list_all, next expectation is {other:?}"),
        }
    }

    async fn create(&self, draft: &Draft) -> Result<User, RemoteError> {
        match self.next(Call::Create(draft.clone())) {
            Expectation::Create { response } => response,
            other => panic!("Expected create, next expectation is {other:?}"),
        }
    }

    async fn update(&self, id: UserId, draft: &Draft) -> Result<User, RemoteError> {
        match self.next(Call::Update(id, draft.clone())) {
            Expectation::Update { id: expected, response } if expected == id => response,
            other => panic!("Expected update of {id}, next expectation is {other:?}"),
        }
    }

    async fn remove(&self, id: UserId) -> Result<(), RemoteError> {
        match self.next(Call::Remove(id)) {
            Expectation::Remove { id: expected, response } if expected == id => response,
            other => panic!("Expected remove of {id}, next expectation is {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_queued_responses_in_order() {
        let mock = MockUserApi::new();
        mock.expect_list()
            .return_ok(vec![User::new(1, "Ada", "Lovelace", "a@x.com")]);
        mock.expect_create()
            .return_ok(User::new(11, "Bob", "Lee", "b@x.com"));

        let users = mock.list_all().await.unwrap();
        assert_eq!(users.len(), 1);

        let draft = Draft {
            first_name: "Bob".into(),
            ..Draft::empty()
        };
        let created = mock.create(&draft).await.unwrap();
        assert_eq!(created.id, UserId(11));

        assert_eq!(mock.calls(), vec![Call::List, Call::Create(draft)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_error_injection() {
        let mock = MockUserApi::new();
        mock.expect_remove(UserId(3)).return_err();

        let result = mock.remove(UserId(3)).await;
        assert_eq!(result, Err(RemoteError::new(Operation::Delete, SIMULATED_FAILURE)));
    }

    #[tokio::test]
    #[should_panic(expected = "Expected update of 2")]
    async fn test_mock_panics_on_wrong_id() {
        let mock = MockUserApi::new();
        mock.expect_update(UserId(1))
            .return_ok(User::new(1, "Ada", "", "a@x.com"));
        let _ = mock.update(UserId(2), &Draft::empty()).await;
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_reports_leftovers() {
        let mock = MockUserApi::new();
        mock.expect_list().return_ok(Vec::new());
        mock.verify();
    }
}
