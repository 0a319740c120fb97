use crate::lifecycle::{
    DeleteResponse, InFlight, IntentError, LoadResponse, Outcome, PendingDelete, PendingLoad,
    PendingSubmit, SubmitResponse, Ticket,
};
use crate::model::{DraftField, Operation, UserId};
use crate::remote::{RemoteError, UserApi};
use crate::state::{ErrorChannel, Mode, RecordStore, SelectionController};
use tracing::{debug, info, instrument, warn};

/// The client core: one owned state object driven by operator intents.
///
/// `UserSession` is responsible for:
/// - **Ownership**: the remote api, the record store, the selection and the error slot
/// - **Guarding**: at most one outstanding request per [`Ticket`]
/// - **Failure containment**: a remote failure becomes an [`ErrorChannel`] entry and an
///   [`Outcome::Failed`], never an `Err`
///
/// `Err(IntentError)` is reserved for intents that were refused before any request
/// was issued.
///
/// # Example
///
/// ```ignore
/// let mut session = UserSession::new(HttpUserClient::new(&config)?);
/// session.load().await?;
///
/// session.start_create();
/// session.update_field(DraftField::FirstName, "Bob");
/// session.update_field(DraftField::LastName, "Lee");
/// session.update_field(DraftField::Email, "bob@example.com");
/// session.submit().await?;
/// ```
///
/// For overlapping requests use the phase API directly:
///
/// ```ignore
/// let first = session.begin_submit()?;
/// session.select_for_edit(UserId(2))?;
/// let second = session.begin_submit()?;
/// let (a, b) = tokio::join!(first.send(session.api()), second.send(session.api()));
/// session.finish_submit(b);
/// session.finish_submit(a);
/// ```
pub struct UserSession<A: UserApi> {
    api: A,
    records: RecordStore,
    selection: SelectionController,
    errors: ErrorChannel,
    in_flight: InFlight,
}

impl<A: UserApi> UserSession<A> {
    /// Creates a session with an empty store in create mode.
    pub fn new(api: A) -> Self {
        Self {
            api,
            records: RecordStore::new(),
            selection: SelectionController::new(),
            errors: ErrorChannel::new(),
            in_flight: InFlight::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn errors(&self) -> &ErrorChannel {
        &self.errors
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    // =========================================================================
    // Form intents
    // =========================================================================

    /// Enters edit mode for the held record `id`.
    pub fn select_for_edit(&mut self, id: UserId) -> Result<(), IntentError> {
        let user = self.records.get(id).ok_or(IntentError::UnknownRecord(id))?;
        self.selection.select_for_edit(user);
        Ok(())
    }

    pub fn start_create(&mut self) {
        self.selection.start_create();
    }

    pub fn cancel(&mut self) {
        self.selection.cancel();
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.selection.update_field(field, value);
    }

    /// Operator dismissal of the shown failure.
    pub fn dismiss_error(&mut self) {
        self.errors.clear();
    }

    // =========================================================================
    // Load
    // =========================================================================

    pub fn begin_load(&mut self) -> Result<PendingLoad, IntentError> {
        self.in_flight.acquire(Ticket::List)?;
        Ok(PendingLoad::new())
    }

    pub fn finish_load(&mut self, response: LoadResponse) -> Outcome {
        self.in_flight.release(Ticket::List);
        match response.result {
            Ok(users) => {
                self.records.replace_all(users);
                self.succeed(Operation::List);
                if let Some(id) = self.selection.selected() {
                    if !self.records.contains(id) {
                        self.selection.forget(id);
                    }
                }
                info!(size = self.records.len(), "Loaded");
                Outcome::Applied
            }
            Err(e) => self.fail(e),
        }
    }

    /// Fetches the full collection and replaces the store with it.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<Outcome, IntentError> {
        let pending = self.begin_load()?;
        let response = pending.send(&self.api).await;
        Ok(self.finish_load(response))
    }

    // =========================================================================
    // Submit
    // =========================================================================

    /// Snapshots the draft and the mode it targets.
    ///
    /// `Create` mode issues a create, `Editing(id)` an update of `id`; nothing else.
    /// The draft is sent as typed, blank fields included; the service decides what it
    /// accepts.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, IntentError> {
        let target = self.selection.mode();
        let draft = self.selection.draft();
        if let Mode::Editing(id) = target {
            if !self.records.contains(id) {
                return Err(IntentError::UnknownRecord(id));
            }
        }
        self.in_flight.acquire(Ticket::from(target))?;
        debug!(?target, ?draft, "Submitting");
        Ok(PendingSubmit::new(target, draft.clone()))
    }

    pub fn finish_submit(&mut self, response: SubmitResponse) -> Outcome {
        let target = response.target;
        self.in_flight.release(Ticket::from(target));
        let user = match response.result {
            Ok(user) => user,
            Err(e) => return self.fail(e),
        };

        let operation = match target {
            Mode::Create => {
                let id = user.id;
                let placement = self.records.append(user);
                info!(%id, ?placement, size = self.records.len(), "Created");
                Operation::Create
            }
            Mode::Editing(id) => {
                if let Err(e) = self.records.replace_by_id(id, user) {
                    warn!(error = %e, "Update echo for a record no longer held");
                } else {
                    info!(%id, "Updated");
                }
                Operation::Update
            }
        };
        self.succeed(operation);

        // An edit started while this request was outstanding is left alone. A create
        // draft typed meanwhile is not: `Create` still matches and the form is cleared.
        if self.selection.mode() == target {
            self.selection.reset();
        }
        Outcome::Applied
    }

    /// Creates or updates from the current draft, depending on the mode.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Outcome, IntentError> {
        let pending = self.begin_submit()?;
        let response = pending.send(&self.api).await;
        Ok(self.finish_submit(response))
    }

    // =========================================================================
    // Delete
    // =========================================================================

    pub fn begin_delete(&mut self, id: UserId) -> Result<PendingDelete, IntentError> {
        if !self.records.contains(id) {
            return Err(IntentError::UnknownRecord(id));
        }
        self.in_flight.acquire(Ticket::Delete(id))?;
        Ok(PendingDelete::new(id))
    }

    pub fn finish_delete(&mut self, response: DeleteResponse) -> Outcome {
        let id = response.id;
        self.in_flight.release(Ticket::Delete(id));
        match response.result {
            Ok(()) => {
                if self.records.remove_by_id(id).is_none() {
                    debug!(%id, "Deleted record was already gone");
                }
                self.selection.forget(id);
                self.succeed(Operation::Delete);
                info!(%id, size = self.records.len(), "Deleted");
                Outcome::Applied
            }
            Err(e) => self.fail(e),
        }
    }

    /// Removes `id` remotely, then locally.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: UserId) -> Result<Outcome, IntentError> {
        let pending = self.begin_delete(id)?;
        let response = pending.send(&self.api).await;
        Ok(self.finish_delete(response))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn succeed(&mut self, operation: Operation) {
        if self.errors.resolve(operation) {
            debug!(%operation, "Cleared stale failure");
        }
    }

    fn fail(&mut self, error: RemoteError) -> Outcome {
        warn!(error = %error, "Remote call failed");
        self.errors.report(error.operation);
        Outcome::Failed
    }
}
