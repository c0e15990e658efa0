use ticklist_core::{DeleteDecision, DeleteOutcome, ListView, RowAction, StateError, TodoSession};
use uuid::Uuid;

fn rows(session: &TodoSession) -> Vec<(String, bool, RowAction)> {
    match session.snapshot() {
        ListView::Empty { .. } => Vec::new(),
        ListView::Rows(rows) => rows
            .into_iter()
            .map(|row| (row.title, row.struck, row.action))
            .collect(),
    }
}

#[test]
fn submit_input_adds_item_and_clears_buffer() {
    let mut session = TodoSession::new();
    session.set_input("Buy milk");

    let id = session.submit_input();

    assert_eq!(session.input_text(), "");
    let item = session.list().get(id).unwrap();
    assert_eq!(item.title, "Buy milk");
    assert!(!item.done);
}

#[test]
fn submitting_an_empty_buffer_still_adds_an_item() {
    let mut session = TodoSession::new();
    let id = session.submit_input();

    assert_eq!(session.list().get(id).unwrap().title, "");
}

#[test]
fn open_rows_offer_done_and_finished_rows_offer_delete() {
    let mut session = TodoSession::new();
    let open = session.add("open");
    let finished = session.add("finished");
    session.mark_done(finished).unwrap();

    let rows = rows(&session);
    assert_eq!(
        rows,
        vec![
            ("open".to_string(), false, RowAction::MarkDone),
            ("finished".to_string(), true, RowAction::RequestDelete),
        ]
    );
    assert!(session.list().get(open).unwrap().is_open());
}

#[test]
fn empty_session_snapshot_is_the_placeholder() {
    let session = TodoSession::new();
    assert!(matches!(session.snapshot(), ListView::Empty { .. }));
}

#[test]
fn seeded_session_snapshot_has_one_row() {
    let session = TodoSession::seeded();
    assert_eq!(rows(&session).len(), 1);
}

#[test]
fn delete_prompt_shows_the_item_title() {
    let mut session = TodoSession::new();
    let id = session.add("Pay rent");
    session.mark_done(id).unwrap();

    let prompt = session.request_delete(id).unwrap();
    assert_eq!(prompt.id, id);
    assert_eq!(prompt.title, "Pay rent");
    assert_eq!(prompt.message, "Are you sure you want to delete this todo?");
    assert!(session.pending_prompt().is_some());
}

#[test]
fn cancel_keeps_state_and_clears_the_pending_prompt() {
    let mut session = TodoSession::new();
    let id = session.add("keep me");
    session.request_delete(id).unwrap();

    let outcome = session.resolve_delete(DeleteDecision::Cancel).unwrap();

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert!(session.pending_prompt().is_none());
    assert!(session.list().get(id).is_some());
}

#[test]
fn confirm_removes_the_item() {
    let mut session = TodoSession::new();
    let keep = session.add("keep");
    let drop = session.add("drop");
    session.request_delete(drop).unwrap();

    let removed = session
        .resolve_delete(DeleteDecision::Confirm)
        .unwrap()
        .deleted()
        .unwrap();

    assert_eq!(removed.id, drop);
    assert!(session.list().get(drop).is_none());
    assert!(session.list().get(keep).is_some());
}

#[test]
fn resolving_without_a_pending_prompt_reports_nothing_pending() {
    let mut session = TodoSession::new();
    session.add("undisturbed");

    let outcome = session.resolve_delete(DeleteDecision::Confirm).unwrap();

    assert_eq!(outcome, DeleteOutcome::NothingPending);
    assert_eq!(session.list().len(), 1);
}

#[test]
fn stray_callback_is_distinguishable_from_a_real_cancel() {
    let mut session = TodoSession::new();
    let id = session.add("kept either way");

    let stray = session.resolve_delete(DeleteDecision::Cancel).unwrap();
    assert_eq!(stray, DeleteOutcome::NothingPending);

    session.request_delete(id).unwrap();
    let cancelled = session.resolve_delete(DeleteDecision::Cancel).unwrap();
    assert_eq!(cancelled, DeleteOutcome::Cancelled);
}

#[test]
fn request_delete_rejects_unknown_id() {
    let mut session = TodoSession::new();
    let stranger = Uuid::new_v4();

    let err = session.request_delete(stranger).unwrap_err();
    assert_eq!(err, StateError::NotFound(stranger));
    assert!(session.pending_prompt().is_none());
}

#[test]
fn a_new_request_replaces_the_pending_one() {
    let mut session = TodoSession::new();
    let first = session.add("first");
    let second = session.add("second");

    session.request_delete(first).unwrap();
    session.request_delete(second).unwrap();
    let removed = session
        .resolve_delete(DeleteDecision::Confirm)
        .unwrap()
        .deleted()
        .unwrap();

    assert_eq!(removed.id, second);
    assert!(session.list().get(first).is_some());
}

#[test]
fn operations_apply_in_call_order() {
    let mut session = TodoSession::new();
    let a = session.add("a");
    let b = session.add("b");
    session.mark_done(a).unwrap();
    session.request_delete(a).unwrap();
    session.resolve_delete(DeleteDecision::Confirm).unwrap();
    session.mark_done(b).unwrap();

    let rows = rows(&session);
    assert_eq!(rows, vec![("b".to_string(), true, RowAction::RequestDelete)]);
}
