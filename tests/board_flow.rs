//! End-to-end board tests
//!
//! Drives the form, store and both list views together through `Board`.

use projboard::Board;
use projboard::entry::EntryStatus;
use projboard::error::{BoardError, Field};
use projboard::store::{Snapshot, Store};
use projboard::view::ListKind;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn fill(board: &mut Board, title: &str, description: &str, count: &str) {
    let form = board.form_mut();
    form.set_field(Field::Title, title);
    form.set_field(Field::Description, description);
    form.set_field(Field::Count, count);
}

/// A valid submission lands in the active list only
#[test]
fn test_submit_valid_project() -> projboard::Result<()> {
    let mut board = Board::default();
    fill(&mut board, "Build App", "A nice app", "3");

    let entry = board.submit()?;

    assert_eq!(entry.status(), EntryStatus::Active);
    assert_eq!(entry.count(), 3);

    let active = board.view(ListKind::Active);
    assert_eq!(active.items().len(), 1);
    assert_eq!(active.items()[0].text, "Build App");
    assert_eq!(active.heading(), "ACTIVE PROJECTS");

    let finished = board.view(ListKind::Finished);
    assert!(finished.items().is_empty());
    assert_eq!(finished.heading(), "FINISHED PROJECTS");

    for field in Field::ALL {
        assert_eq!(board.form().field(field).content(), "");
    }
    Ok(())
}

/// A rejected submission changes nothing
#[test]
fn test_submit_invalid_project() {
    let mut board = Board::default();
    fill(&mut board, "Hi", "ok", "3");

    let err = board.submit().unwrap_err();

    assert!(matches!(err, BoardError::ValidationFailure { field: Field::Title }));
    assert_eq!(err.to_string(), "Invalid Input! Try Again!");
    assert!(board.store().is_empty());
    assert_eq!(board.view(ListKind::Active).render_count(), 0);
    assert_eq!(board.view(ListKind::Finished).render_count(), 0);
    assert_eq!(board.form().field(Field::Title).content(), "Hi");
    assert_eq!(board.form().field(Field::Description).content(), "ok");
    assert_eq!(board.form().field(Field::Count).content(), "3");
}

/// Several submissions keep insertion order and unique ids
#[test]
fn test_multiple_submissions_keep_order() -> projboard::Result<()> {
    let mut board = Board::default();
    let titles = ["Build App", "Write Docs", "Ship Release"];
    for title in titles {
        fill(&mut board, title, "Something useful", "2");
        board.submit()?;
    }

    let active = board.view(ListKind::Active);
    let rendered: Vec<&str> = active.items().iter().map(|i| i.text.as_str()).collect();
    assert_eq!(rendered, titles);
    assert_eq!(active.render_count(), 3);

    let ids: HashSet<&str> = active.entries().iter().map(|e| e.id()).collect();
    assert_eq!(ids.len(), 3);
    Ok(())
}

/// A failure between two successes leaves the lists as they were
#[test]
fn test_failure_between_successes() -> projboard::Result<()> {
    let mut board = Board::default();
    fill(&mut board, "Build App", "A nice app", "3");
    board.submit()?;

    fill(&mut board, "Build App", "A nice app", "lots");
    assert!(board.submit().is_err());
    assert_eq!(board.view(ListKind::Active).items().len(), 1);
    assert_eq!(board.view(ListKind::Active).render_count(), 1);

    fill(&mut board, "Write Docs", "Explain it", "1");
    board.submit()?;
    assert_eq!(board.view(ListKind::Active).items().len(), 2);
    Ok(())
}

/// Extra listeners next to the views see the same snapshots
#[test]
fn test_store_listeners_share_snapshots() {
    let mut store = Store::new();
    let received: Vec<Rc<RefCell<Vec<Snapshot>>>> = (0..3)
        .map(|_| {
            let sink = Rc::new(RefCell::new(Vec::new()));
            let listener_sink = Rc::clone(&sink);
            store.subscribe(move |event| listener_sink.borrow_mut().push(event.snapshot().clone()));
            sink
        })
        .collect();

    store.add("Build App", "A nice app", 3);
    store.add("Write Docs", "Explain it", 1);

    for sink in &received {
        let sink = sink.borrow();
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].len(), 1);
        assert_eq!(sink[1].len(), 2);
        assert_eq!(sink[1].last().map(|e| e.title()), Some("Write Docs"));
    }
    assert_eq!(*received[0].borrow(), *received[2].borrow());
}
