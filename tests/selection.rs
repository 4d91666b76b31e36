// tests/selection.rs
//
// Row selection: callback payloads, select-all over the visible rows,
// pruning when rows are replaced.

use std::cell::RefCell;
use std::rc::Rc;

use resdesk::table::{FilterGroup, Record, RowKey, TableEvent, TabularView, Value};

#[derive(Clone, Debug)]
struct Item {
    id: u64,
    group: &'static str,
}

impl Record for Item {
    fn key(&self) -> RowKey { self.id }
    fn field(&self, name: &str) -> Value {
        match name {
            "group" => Value::text(self.group),
            _ => Value::Empty,
        }
    }
}

fn items() -> Vec<Item> {
    vec![
        Item { id: 1, group: "a" },
        Item { id: 2, group: "b" },
        Item { id: 3, group: "a" },
    ]
}

/// View whose selection callback records every payload it receives.
fn recording_view(rows: Vec<Item>) -> (TabularView<Item>, Rc<RefCell<Vec<Vec<u64>>>>) {
    let calls: Rc<RefCell<Vec<Vec<u64>>>> = Rc::default();
    let sink = Rc::clone(&calls);
    let view = TabularView::new(rows)
        .filter(FilterGroup::new("Group").option("A", "a", |i: &Item| i.group == "a"))
        .selectable(move |sel: &[&Item]| sink.borrow_mut().push(sel.iter().map(|i| i.id).collect()));
    (view, calls)
}

#[test]
fn toggling_twice_reports_empty_selection() {
    let (mut view, calls) = recording_view(items());

    view.toggle_row_selected(2);
    view.toggle_row_selected(2);

    assert_eq!(*calls.borrow(), vec![vec![2], vec![]]);
    assert!(!view.is_selected(2));
}

#[test]
fn callback_always_gets_current_selection_in_row_order() {
    let (mut view, calls) = recording_view(items());

    for key in [3, 1, 2, 3] {
        view.toggle_row_selected(key);
        let expected: Vec<u64> = view.selected_rows().iter().map(|i| i.id).collect();
        assert_eq!(calls.borrow().last(), Some(&expected));
        assert!(expected.iter().all(|k| view.row(*k).is_some()));
    }
    assert_eq!(calls.borrow().last(), Some(&vec![1, 2]));
}

#[test]
fn unknown_row_is_ignored() {
    let (mut view, calls) = recording_view(items());
    view.toggle_row_selected(42);
    assert!(calls.borrow().is_empty());
    assert!(view.selected_rows().is_empty());
}

#[test]
fn not_selectable_ignores_toggles() {
    let mut view = TabularView::new(items());
    view.toggle_row_selected(1);
    view.apply(TableEvent::ToggleAllVisible);
    assert!(view.selected_rows().is_empty());
    assert!(!view.snapshot().selectable);
}

#[test]
fn select_all_covers_visible_rows_only() {
    let (mut view, calls) = recording_view(items());
    view.set_active_filter_option("Group", "a");

    view.toggle_select_all_visible();
    assert_eq!(calls.borrow().last(), Some(&vec![1, 3]));
    assert!(view.snapshot().all_visible_selected);

    // all visible already selected: second toggle clears them
    view.toggle_select_all_visible();
    assert_eq!(calls.borrow().last(), Some(&vec![]));
    assert!(!view.snapshot().all_visible_selected);
}

#[test]
fn select_all_keeps_hidden_selection() {
    let (mut view, calls) = recording_view(items());
    view.toggle_row_selected(2);
    view.set_active_filter_option("Group", "a");

    view.apply(TableEvent::ToggleAllVisible);
    assert_eq!(calls.borrow().last(), Some(&vec![1, 2, 3]));
    assert_eq!(view.snapshot().selected_count, 3);

    view.apply(TableEvent::ToggleAllVisible);
    assert_eq!(calls.borrow().last(), Some(&vec![2]));
}

#[test]
fn replacing_rows_prunes_missing_selection() {
    let (mut view, calls) = recording_view(items());
    view.toggle_row_selected(1);
    view.toggle_row_selected(2);

    view.set_rows(vec![Item { id: 2, group: "b" }, Item { id: 4, group: "a" }]);
    assert_eq!(calls.borrow().last(), Some(&vec![2]));
    assert!(!view.is_selected(1));

    let n = calls.borrow().len();
    view.set_rows(vec![Item { id: 2, group: "b" }]);
    assert_eq!(calls.borrow().len(), n, "nothing pruned, no notification");
}

#[test]
fn snapshot_marks_selected_rows() {
    let (mut view, _) = recording_view(items());
    view.apply(TableEvent::ToggleRow(3));
    let snap = view.snapshot();
    let marked: Vec<u64> = snap.rows().iter().filter(|r| r.selected).map(|r| r.key).collect();
    assert_eq!(marked, vec![3]);
    assert_eq!(snap.selected_count, 1);
}
