use user_roster::lifecycle::{IntentError, Outcome, Ticket, UserSession};
use user_roster::model::{Draft, DraftField, Operation, User, UserId};
use user_roster::remote::mock::{Call, MockUserApi};
use user_roster::state::Mode;

fn ada() -> User {
    User::new(1, "Ada", "", "a@x.com")
}

fn grace() -> User {
    User::new(2, "Grace", "Hopper", "g@x.com").with_department("Navy")
}

fn fill(session: &mut UserSession<MockUserApi>, first: &str, last: &str, email: &str) {
    session.update_field(DraftField::FirstName, first);
    session.update_field(DraftField::LastName, last);
    session.update_field(DraftField::Email, email);
}

/// A session with `users` already loaded and the list expectation consumed.
async fn loaded(users: Vec<User>) -> (MockUserApi, UserSession<MockUserApi>) {
    let mock = MockUserApi::new();
    mock.expect_list().return_ok(users);
    let mut session = UserSession::new(mock.clone());
    assert_eq!(session.load().await, Ok(Outcome::Applied));
    (mock, session)
}

#[tokio::test]
async fn test_initial_load_fills_store() {
    let (mock, session) = loaded(vec![ada()]).await;

    assert_eq!(session.records().len(), 1);
    assert_eq!(session.records().get(UserId(1)), Some(&ada()));
    assert_eq!(session.errors().message(), None);
    assert_eq!(session.selection().mode(), Mode::Create);
    assert!(session.in_flight().is_idle());
    mock.verify();
}

#[tokio::test]
async fn test_edit_update_roundtrip() {
    let (mock, mut session) = loaded(vec![ada(), grace()]).await;

    // Click edit on id 1
    session.select_for_edit(UserId(1)).unwrap();
    assert_eq!(session.selection().mode(), Mode::Editing(UserId(1)));
    assert_eq!(session.selection().draft(), &Draft::from_user(&ada()));

    // Change only the email, then submit; the blank last name goes out as is
    session.update_field(DraftField::Email, "ada@x.com");
    let echoed = User::new(1, "Ada", "", "ada@x.com");
    mock.expect_update(UserId(1)).return_ok(echoed.clone());

    assert_eq!(session.submit().await, Ok(Outcome::Applied));

    let sent = Draft {
        first_name: "Ada".into(),
        last_name: String::new(),
        email: "ada@x.com".into(),
        department: String::new(),
    };
    assert_eq!(mock.calls(), vec![Call::List, Call::Update(UserId(1), sent)]);

    // Replaced in place, selection back to create
    let ids: Vec<_> = session.records().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![UserId(1), UserId(2)]);
    assert_eq!(session.records().get(UserId(1)), Some(&echoed));
    assert_eq!(session.selection().mode(), Mode::Create);
    assert!(session.selection().draft().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_create_appends_returned_record() {
    let (mock, mut session) = loaded(vec![ada(), grace()]).await;

    fill(&mut session, "Bob", "Lee", "b@x.com");
    mock.expect_create()
        .return_ok(User::new(11, "Bob", "Lee", "b@x.com"));

    assert_eq!(session.submit().await, Ok(Outcome::Applied));

    assert_eq!(session.records().len(), 3);
    assert_eq!(session.records().as_slice()[2].id, UserId(11));
    assert!(matches!(mock.calls()[1], Call::Create(_)));
    assert!(session.selection().draft().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_failed_delete_keeps_store_and_reports() {
    let (mock, mut session) = loaded(vec![ada()]).await;
    let before = session.records().clone();

    mock.expect_remove(UserId(1)).return_err();
    assert_eq!(session.delete(UserId(1)).await, Ok(Outcome::Failed));

    assert_eq!(session.records(), &before);
    assert_eq!(session.errors().current(), Some(Operation::Delete));
    assert_eq!(
        session.errors().message(),
        Some("Failed to delete user. Please try again.")
    );
    assert!(session.in_flight().is_idle());
    mock.verify();
}

#[tokio::test]
async fn test_overlapping_updates_land_on_their_rows() {
    let (mock, mut session) = loaded(vec![ada(), grace()]).await;

    session.select_for_edit(UserId(1)).unwrap();
    session.update_field(DraftField::LastName, "Lovelace");
    let first = session.begin_submit().unwrap();
    assert_eq!(first.target(), Mode::Editing(UserId(1)));
    assert_eq!(first.operation(), Operation::Update);
    assert_eq!(first.draft().last_name, "Lovelace");

    session.select_for_edit(UserId(2)).unwrap();
    session.update_field(DraftField::Email, "grace@navy.mil");
    let second = session.begin_submit().unwrap();
    assert_eq!(second.target(), Mode::Editing(UserId(2)));

    assert!(session.in_flight().is_pending(Ticket::Update(UserId(1))));
    assert!(session.in_flight().is_pending(Ticket::Update(UserId(2))));

    mock.expect_update(UserId(1))
        .return_ok(User::new(1, "Ada", "Lovelace", "a@x.com"));
    mock.expect_update(UserId(2))
        .return_ok(User::new(2, "Grace", "Hopper", "grace@navy.mil").with_department("Navy"));

    let (a, b) = tokio::join!(first.send(session.api()), second.send(session.api()));

    assert_eq!(a.target(), Mode::Editing(UserId(1)));
    assert_eq!(b.target(), Mode::Editing(UserId(2)));

    // The later request resolves first
    assert_eq!(session.finish_submit(b), Outcome::Applied);
    assert_eq!(session.finish_submit(a), Outcome::Applied);

    let rows: Vec<_> = session
        .records()
        .iter()
        .map(|u| (u.id, u.last_name.as_str(), u.email.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (UserId(1), "Lovelace", "a@x.com"),
            (UserId(2), "Hopper", "grace@navy.mil"),
        ]
    );
    assert!(session.in_flight().is_idle());
    mock.verify();
}

#[tokio::test]
async fn test_submit_branch_follows_mode() {
    let (mock, mut session) = loaded(vec![ada(), grace()]).await;

    // Create mode, even with a draft that looks like an existing record
    fill(&mut session, "Grace", "Hopper", "g@x.com");
    mock.expect_create().return_err();
    assert_eq!(session.submit().await, Ok(Outcome::Failed));

    // Editing mode
    session.select_for_edit(UserId(2)).unwrap();
    mock.expect_update(UserId(2)).return_err();
    assert_eq!(session.submit().await, Ok(Outcome::Failed));

    let calls = mock.calls();
    assert!(matches!(calls[1], Call::Create(_)));
    assert!(matches!(calls[2], Call::Update(UserId(2), _)));
    mock.verify();
}

#[tokio::test]
async fn test_failed_update_preserves_draft_and_selection() {
    let (mock, mut session) = loaded(vec![grace()]).await;

    session.select_for_edit(UserId(2)).unwrap();
    session.update_field(DraftField::Department, "Research");
    let selection_before = session.selection().clone();
    let records_before = session.records().clone();

    mock.expect_update(UserId(2)).return_err();
    assert_eq!(session.submit().await, Ok(Outcome::Failed));

    assert_eq!(session.selection(), &selection_before);
    assert_eq!(session.records(), &records_before);
    assert_eq!(
        session.errors().message(),
        Some("Failed to edit user. Please try again.")
    );

    // Manual retry with the preserved draft
    mock.expect_update(UserId(2))
        .return_ok(grace().with_department("Research"));
    assert_eq!(session.submit().await, Ok(Outcome::Applied));
    assert_eq!(session.errors().current(), None);
    assert_eq!(
        session.records().get(UserId(2)).unwrap().department_label(),
        "Research"
    );
    mock.verify();
}

#[tokio::test]
async fn test_cancel_resets_draft() {
    let (_mock, mut session) = loaded(vec![grace()]).await;

    session.select_for_edit(UserId(2)).unwrap();
    session.update_field(DraftField::FirstName, "Amazing Grace");
    session.cancel();

    assert_eq!(session.selection().mode(), Mode::Create);
    assert_eq!(session.selection().draft(), &Draft::empty());
}

#[tokio::test]
async fn test_listing_twice_is_idempotent() {
    let (mock, mut session) = loaded(vec![ada(), grace()]).await;
    let once = session.records().clone();

    mock.expect_list().return_ok(vec![ada(), grace()]);
    assert_eq!(session.load().await, Ok(Outcome::Applied));

    assert_eq!(session.records(), &once);
    mock.verify();
}

#[tokio::test]
async fn test_failed_load_keeps_previous_records() {
    let (mock, mut session) = loaded(vec![ada()]).await;

    mock.expect_list().return_err();
    assert_eq!(session.load().await, Ok(Outcome::Failed));

    assert_eq!(session.records().len(), 1);
    assert_eq!(
        session.errors().message(),
        Some("Failed to fetch users. Please try again later.")
    );
    mock.verify();
}

#[tokio::test]
async fn test_second_submit_while_pending_is_rejected() {
    let (mock, mut session) = loaded(vec![ada()]).await;

    fill(&mut session, "Bob", "Lee", "b@x.com");
    let pending = session.begin_submit().unwrap();

    // No create expectation is queued: a second request would panic the mock
    assert_eq!(
        session.submit().await,
        Err(IntentError::InFlight(Ticket::Create))
    );

    mock.expect_create()
        .return_ok(User::new(11, "Bob", "Lee", "b@x.com"));
    let response = pending.send(session.api()).await;
    assert_eq!(session.finish_submit(response), Outcome::Applied);

    let creates = mock
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::Create(_)))
        .count();
    assert_eq!(creates, 1);
    assert!(session.in_flight().is_idle());
    mock.verify();
}

#[tokio::test]
async fn test_repeated_delete_click_is_rejected() {
    let (mock, mut session) = loaded(vec![ada(), grace()]).await;

    let pending = session.begin_delete(UserId(2)).unwrap();
    assert_eq!(pending.id(), UserId(2));
    assert_eq!(
        session.delete(UserId(2)).await,
        Err(IntentError::InFlight(Ticket::Delete(UserId(2))))
    );

    mock.expect_remove(UserId(2)).return_ok();
    let response = pending.send(session.api()).await;
    assert_eq!(response.id(), UserId(2));
    assert_eq!(session.finish_delete(response), Outcome::Applied);

    assert_eq!(session.records().len(), 1);
    assert!(!session.records().contains(UserId(2)));
    mock.verify();
}

#[tokio::test]
async fn test_first_name_only_create_is_appended() {
    let (mock, mut session) = loaded(vec![ada()]).await;

    session.update_field(DraftField::FirstName, "Bob");
    assert_eq!(
        session.selection().draft().missing_required(),
        vec![DraftField::LastName, DraftField::Email]
    );
    mock.expect_create().return_ok(User::new(11, "Bob", "", ""));

    assert_eq!(session.submit().await, Ok(Outcome::Applied));

    let sent = Draft {
        first_name: "Bob".into(),
        ..Draft::empty()
    };
    assert_eq!(mock.calls(), vec![Call::List, Call::Create(sent)]);
    assert_eq!(session.records().len(), 2);
    assert_eq!(session.records().as_slice()[1].id, UserId(11));
    assert!(session.selection().draft().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_create_draft_typed_during_pending_create_is_cleared() {
    let (mock, mut session) = loaded(vec![ada()]).await;

    fill(&mut session, "Bob", "Lee", "b@x.com");
    let pending = session.begin_submit().unwrap();

    // Still in create mode: the next draft shares the form with the pending one
    session.update_field(DraftField::FirstName, "Carol");

    mock.expect_create()
        .return_ok(User::new(11, "Bob", "Lee", "b@x.com"));
    let response = pending.send(session.api()).await;
    assert_eq!(response.target(), Mode::Create);
    assert_eq!(session.finish_submit(response), Outcome::Applied);

    assert_eq!(session.selection().mode(), Mode::Create);
    assert!(session.selection().draft().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_unknown_ids_are_rejected() {
    let (mock, mut session) = loaded(vec![ada()]).await;

    assert_eq!(
        session.select_for_edit(UserId(9)),
        Err(IntentError::UnknownRecord(UserId(9)))
    );
    assert_eq!(
        session.delete(UserId(9)).await,
        Err(IntentError::UnknownRecord(UserId(9)))
    );
    assert_eq!(mock.calls(), vec![Call::List]);
}

#[tokio::test]
async fn test_deleting_edited_record_drops_selection() {
    let (mock, mut session) = loaded(vec![ada(), grace()]).await;

    session.select_for_edit(UserId(2)).unwrap();
    mock.expect_remove(UserId(2)).return_ok();
    assert_eq!(session.delete(UserId(2)).await, Ok(Outcome::Applied));

    assert_eq!(session.selection().mode(), Mode::Create);
    assert!(session.selection().draft().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_edit_started_during_create_survives_completion() {
    let (mock, mut session) = loaded(vec![ada(), grace()]).await;

    fill(&mut session, "Bob", "Lee", "b@x.com");
    let pending = session.begin_submit().unwrap();

    session.select_for_edit(UserId(2)).unwrap();
    session.update_field(DraftField::Email, "typing@x.com");

    mock.expect_create()
        .return_ok(User::new(11, "Bob", "Lee", "b@x.com"));
    let response = pending.send(session.api()).await;
    assert_eq!(session.finish_submit(response), Outcome::Applied);

    assert_eq!(session.selection().mode(), Mode::Editing(UserId(2)));
    assert_eq!(session.selection().draft().email, "typing@x.com");
    mock.verify();
}

#[tokio::test]
async fn test_success_clears_only_matching_stale_error() {
    let (mock, mut session) = loaded(vec![ada(), grace()]).await;

    mock.expect_remove(UserId(1)).return_err();
    assert_eq!(session.delete(UserId(1)).await, Ok(Outcome::Failed));

    // A different category does not clear the delete failure
    mock.expect_list().return_ok(vec![ada(), grace()]);
    session.load().await.unwrap();
    assert_eq!(session.errors().current(), Some(Operation::Delete));

    // Retrying the delete does
    mock.expect_remove(UserId(1)).return_ok();
    assert_eq!(session.delete(UserId(1)).await, Ok(Outcome::Applied));
    assert_eq!(session.errors().current(), None);
    mock.verify();
}

#[tokio::test]
async fn test_dismiss_error() {
    let mock = MockUserApi::new();
    mock.expect_list().return_err();
    let mut session = UserSession::new(mock.clone());

    assert_eq!(session.load().await, Ok(Outcome::Failed));
    assert!(session.errors().message().is_some());

    session.dismiss_error();
    assert_eq!(session.errors().message(), None);
    assert!(session.records().is_empty());
    mock.verify();
}
