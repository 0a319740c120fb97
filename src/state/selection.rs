//! # Selection Controller
//!
//! A two-state machine over the form:
//!
//! ```text
//!            select_for_edit(user)
//!   Create ------------------------> Editing(id)
//!     ^  <------------------------     |  ^
//!     |    cancel / reset / forget     |  | select_for_edit(other)
//!     |                                +--+
//!     +-- update_field (self-loop in either state)
//! ```
//!
//! Entering `Editing` seeds the draft from the record; every way back to `Create`
//! resets the draft to all-empty fields.

use crate::model::{Draft, DraftField, User, UserId};
use tracing::debug;

/// Whether the form creates a new user or edits an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Create,
    Editing(UserId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    mode: Mode,
    draft: Draft,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The id being edited, if any.
    pub fn selected(&self) -> Option<UserId> {
        match self.mode {
            Mode::Create => None,
            Mode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing(_))
    }

    /// Enters edit mode for `user`, replacing any draft in progress.
    pub fn select_for_edit(&mut self, user: &User) {
        debug!(id = %user.id, "Selected for edit");
        self.mode = Mode::Editing(user.id);
        self.draft = Draft::from_user(user);
    }

    /// Switches to an empty create form.
    pub fn start_create(&mut self) {
        self.reset();
    }

    /// Abandons the current edit or create draft.
    pub fn cancel(&mut self) {
        self.reset();
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Back to `Create` with an empty draft.
    pub fn reset(&mut self) {
        self.mode = Mode::Create;
        self.draft = Draft::empty();
    }

    /// Drops the selection if it points at `id`. Returns whether it did.
    pub fn forget(&mut self, id: UserId) -> bool {
        if self.mode == Mode::Editing(id) {
            debug!(%id, "Selected record went away");
            self.reset();
            true
        } else {
            false
        }
    }
}
