//! # In-flight Tracking
//!
//! One ticket per outstanding remote request. A ticket that is already held cannot be
//! taken again, so a second click on the same action while the first request is still
//! pending is rejected instead of issuing a duplicate call.
//!
//! Tickets are keyed by target: updates of *different* users may overlap, a second
//! update of the *same* user may not.

use crate::lifecycle::IntentError;
use crate::model::{Operation, UserId};
use crate::state::Mode;
use std::collections::HashSet;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ticket {
    List,
    Create,
    Update(UserId),
    Delete(UserId),
}

impl Ticket {
    pub fn operation(self) -> Operation {
        match self {
            Ticket::List => Operation::List,
            Ticket::Create => Operation::Create,
            Ticket::Update(_) => Operation::Update,
            Ticket::Delete(_) => Operation::Delete,
        }
    }
}

/// The ticket a submit in `mode` needs.
impl From<Mode> for Ticket {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Create => Ticket::Create,
            Mode::Editing(id) => Ticket::Update(id),
        }
    }
}

impl Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ticket::List | Ticket::Create => write!(f, "{}", self.operation()),
            Ticket::Update(id) | Ticket::Delete(id) => {
                write!(f, "{} of user {}", self.operation(), id)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InFlight {
    active: HashSet<Ticket>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes `ticket`, failing if a request holding it is still outstanding.
    pub fn acquire(&mut self, ticket: Ticket) -> Result<(), IntentError> {
        if self.active.insert(ticket) {
            Ok(())
        } else {
            Err(IntentError::InFlight(ticket))
        }
    }

    pub fn release(&mut self, ticket: Ticket) -> bool {
        self.active.remove(&ticket)
    }

    pub fn is_pending(&self, ticket: Ticket) -> bool {
        self.active.contains(&ticket)
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
