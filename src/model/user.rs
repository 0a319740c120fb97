use crate::model::Draft;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Type-safe identifier for Users.
///
/// Assigned by the remote service on create and never changed afterwards. Only numeric
/// ids are understood; a string id fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user record as held by the [`RecordStore`](crate::state::RecordStore).
///
/// # Notes
/// Records are only ever built from a remote representation, so `id` always carries
/// the value the service assigned. See [`UserRepr`] for the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
}

impl User {
    /// Creates a new User instance without a department.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the remote service
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `email` - Contact address
    pub fn new(
        id: u64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            department: None,
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        let department = department.into();
        self.department = (!department.is_empty()).then_some(department);
        self
    }

    /// First and last name joined by a single space.
    pub fn display_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }

    /// Department for list rendering, `"N/A"` when unset.
    pub fn department_label(&self) -> &str {
        self.department.as_deref().unwrap_or("N/A")
    }
}

/// A representation received from the service did not carry an `id`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("user representation has no id")]
pub struct MissingId;

/// JSON representation exchanged with the remote `/users` resource.
///
/// The service models a person with a single `name`, while the form edits
/// `firstName`/`lastName` separately. Both are carried on the wire:
/// inbound, split names win when present and `name` is decomposed otherwise;
/// outbound, the split names are sent together with the composed `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl TryFrom<UserRepr> for User {
    type Error = MissingId;

    fn try_from(repr: UserRepr) -> Result<Self, Self::Error> {
        let id = repr.id.ok_or(MissingId)?;
        let first = repr.first_name.unwrap_or_default();
        let last = repr.last_name.unwrap_or_default();
        let (first_name, last_name) = if first.is_empty() && last.is_empty() {
            split_name(repr.name.as_deref().unwrap_or_default())
        } else {
            (first, last)
        };
        Ok(User {
            id,
            first_name,
            last_name,
            email: repr.email,
            department: repr.department.filter(|d| !d.is_empty()),
        })
    }
}

impl From<&Draft> for UserRepr {
    fn from(draft: &Draft) -> Self {
        let name = join_name(&draft.first_name, &draft.last_name);
        UserRepr {
            id: None,
            name: (!name.is_empty()).then_some(name),
            first_name: Some(draft.first_name.clone()),
            last_name: Some(draft.last_name.clone()),
            email: draft.email.clone(),
            department: (!draft.department.is_empty()).then(|| draft.department.clone()),
        }
    }
}

/// Splits a composed name at the first whitespace run.
fn split_name(name: &str) -> (String, String) {
    match name.trim().split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (name.trim().to_string(), String::new()),
    }
}

fn join_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim()).trim().to_string()
}
