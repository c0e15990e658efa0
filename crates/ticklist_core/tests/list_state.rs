use ticklist_core::{
    DeleteDecision, ListView, PendingDelete, StateError, TodoItem, TodoList,
};
use uuid::Uuid;

fn list_of(titles: &[&str]) -> TodoList {
    let mut list = TodoList::new();
    for title in titles {
        list.add(*title);
    }
    list
}

fn titles(list: &TodoList) -> Vec<&str> {
    list.items().iter().map(|item| item.title.as_str()).collect()
}

#[test]
fn add_appends_open_item_at_end() {
    let mut list = list_of(&["Learn React"]);
    let id = list.add("Buy milk");

    assert_eq!(titles(&list), vec!["Learn React", "Buy milk"]);
    let added = list.items().last().unwrap();
    assert_eq!(added.id, id);
    assert!(!added.done);
}

#[test]
fn mark_done_touches_exactly_one_item() {
    let mut list = list_of(&["Learn React", "Buy milk"]);
    let first = list.items()[0].id;

    list.mark_done(first).unwrap();

    assert_eq!(list.len(), 2);
    assert!(list.items()[0].done);
    assert!(!list.items()[1].done);
    assert_eq!(titles(&list), vec!["Learn React", "Buy milk"]);
}

#[test]
fn mark_done_is_idempotent() {
    let mut list = list_of(&["once"]);
    let id = list.items()[0].id;

    list.mark_done(id).unwrap();
    let after_once = list.clone();
    list.mark_done(id).unwrap();

    assert_eq!(list, after_once);
}

#[test]
fn mark_done_unknown_id_is_not_found() {
    let mut list = list_of(&["only"]);
    let stranger = Uuid::new_v4();

    let err = list.mark_done(stranger).unwrap_err();
    assert_eq!(err, StateError::NotFound(stranger));
}

#[test]
fn delete_preserves_relative_order_of_survivors() {
    let mut list = list_of(&["a", "b", "c", "d"]);
    let second = list.items()[1].id;

    let removed = list.delete(second).unwrap();

    assert_eq!(removed.title, "b");
    assert_eq!(list.len(), 3);
    assert_eq!(titles(&list), vec!["a", "c", "d"]);
}

#[test]
fn delete_by_id_survives_prior_deletion_of_earlier_row() {
    // The classic stale-index bug: deleting row 0 shifts row 1 into its
    // place. Id addressing must still remove the intended item.
    let mut list = list_of(&["first", "second"]);
    let first = list.items()[0].id;
    let second = list.items()[1].id;

    list.delete(first).unwrap();
    let removed = list.delete(second).unwrap();

    assert_eq!(removed.title, "second");
    assert!(list.is_empty());
}

#[test]
fn seeded_list_starts_with_one_open_item() {
    let list = TodoList::seeded();
    assert_eq!(list.len(), 1);
    assert!(!list.items()[0].done);
}

#[test]
fn scenario_add_then_mark_done() {
    let mut list = list_of(&["Learn React"]);
    list.add("Buy milk");
    assert_eq!(titles(&list), vec!["Learn React", "Buy milk"]);

    let first = list.items()[0].id;
    list.mark_done(first).unwrap();

    assert!(list.items()[0].done);
    assert!(!list.items()[1].done);
}

#[test]
fn scenario_confirmation_declined_then_accepted() {
    let mut list = list_of(&["Learn React", "Buy milk"]);
    let first = list.items()[0].id;

    let request = PendingDelete::request(&list, first).unwrap();
    assert_eq!(request.title(), "Learn React");
    let outcome = request.apply(&mut list, DeleteDecision::Cancel).unwrap();
    assert_eq!(outcome, None);
    assert_eq!(titles(&list), vec!["Learn React", "Buy milk"]);

    let request = PendingDelete::request(&list, first).unwrap();
    let removed = request
        .apply(&mut list, DeleteDecision::Confirm)
        .unwrap()
        .unwrap();
    assert_eq!(removed.title, "Learn React");
    assert_eq!(titles(&list), vec!["Buy milk"]);
}

#[test]
fn confirming_a_stale_request_reports_not_found() {
    let mut list = list_of(&["gone soon"]);
    let id = list.items()[0].id;

    let request = PendingDelete::request(&list, id).unwrap();
    list.delete(id).unwrap();

    let err = request
        .apply(&mut list, DeleteDecision::Confirm)
        .unwrap_err();
    assert_eq!(err, StateError::NotFound(id));
}

#[test]
fn cancelling_a_stale_request_is_still_a_no_op() {
    let mut list = list_of(&["gone soon"]);
    let id = list.items()[0].id;

    let request = PendingDelete::request(&list, id).unwrap();
    list.delete(id).unwrap();

    let outcome = request.apply(&mut list, DeleteDecision::Cancel).unwrap();
    assert_eq!(outcome, None);
}

#[test]
fn empty_list_projects_placeholder() {
    let list = TodoList::new();
    match ListView::project(&list) {
        ListView::Empty { placeholder } => assert_eq!(placeholder, "No todos!"),
        ListView::Rows(_) => panic!("empty list must select the placeholder"),
    }
}

#[test]
fn from_items_preserves_given_order() {
    let a = TodoItem::with_id(Uuid::new_v4(), "a", 1);
    let b = TodoItem::with_id(Uuid::new_v4(), "b", 2);
    let list = TodoList::from_items(vec![a.clone(), b.clone()]);

    assert_eq!(list.items(), &[a, b]);
}
