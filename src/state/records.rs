//! # Record Store
//!
//! Owns the canonical, ordered list of users. Order is insertion order as listed or
//! appended; nothing is ever sorted. Every mutation keeps ids unique.

use crate::model::{User, UserId};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors reported by store mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this id is held.
    #[error("no record with id {0}")]
    NotFound(UserId),
}

/// Where an appended record ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Added as the newest element.
    Inserted,
    /// A record with the same id already existed and was replaced in place.
    Replaced,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<User>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the current contents and takes `records` in order.
    ///
    /// A duplicated id keeps the position of its first occurrence and the value of
    /// its last one.
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = User>) {
        self.records.clear();
        for record in records {
            if let Some(slot) = self.position(record.id) {
                warn!(id = %record.id, "Duplicate id in listing");
                self.records[slot] = record;
            } else {
                self.records.push(record);
            }
        }
        debug!(size = self.records.len(), "Replaced all records");
    }

    /// Adds a freshly created record as the newest element.
    ///
    /// If the id is already held, the existing record is replaced in place instead.
    pub fn append(&mut self, record: User) -> Placement {
        match self.position(record.id) {
            Some(slot) => {
                warn!(id = %record.id, "Appended id already present, replacing");
                self.records[slot] = record;
                Placement::Replaced
            }
            None => {
                self.records.push(record);
                Placement::Inserted
            }
        }
    }

    /// Substitutes the record with `id`, keeping its position.
    ///
    /// The stored id is authoritative: if `record` carries a different id it is
    /// overwritten with `id`.
    pub fn replace_by_id(&mut self, id: UserId, mut record: User) -> Result<(), StoreError> {
        let slot = self.position(id).ok_or(StoreError::NotFound(id))?;
        if record.id != id {
            warn!(%id, echoed = %record.id, "Echoed record carries another id");
            record.id = id;
        }
        self.records[slot] = record;
        Ok(())
    }

    /// Removes the record with `id`, returning it if it was held.
    pub fn remove_by_id(&mut self, id: UserId) -> Option<User> {
        let slot = self.position(id)?;
        Some(self.records.remove(slot))
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[User] {
        &self.records
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}
