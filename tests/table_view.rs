// tests/table_view.rs
//
// TabularView derivation without any UI: filters, search, sort, actions,
// placeholders.

use std::cell::RefCell;
use std::rc::Rc;

use resdesk::table::{
    Cell, ColumnDescriptor, FilterGroup, Invocation, Record, RowAction, RowKey, SortDirection,
    SortState, TableEvent, TabularView, Tone, Value, DEFAULT_EMPTY_TEXT,
};

#[derive(Clone, Debug, PartialEq)]
struct Need {
    id: u64,
    kind: &'static str,
    status: &'static str,
    qty: i64,
}

impl Record for Need {
    fn key(&self) -> RowKey { self.id }
    fn field(&self, name: &str) -> Value {
        match name {
            "type" => Value::text(self.kind),
            "status" => Value::text(self.status),
            "quantity" => Value::Int(self.qty),
            _ => Value::Empty,
        }
    }
}

fn need(id: u64, kind: &'static str, status: &'static str, qty: i64) -> Need {
    Need { id, kind, status, qty }
}

fn two_rows() -> Vec<Need> {
    vec![need(1, "Ordinateur", "pending", 12), need(2, "Imprimante", "validated", 1)]
}

fn status_group() -> FilterGroup<Need> {
    FilterGroup::new("Statut")
        .option("Pending", "pending", |n: &Need| n.status == "pending")
        .option("Validated", "validated", |n: &Need| n.status == "validated")
}

fn ids(view: &TabularView<Need>) -> Vec<u64> {
    view.visible().iter().map(|n| n.id).collect()
}

#[test]
fn filter_option_narrows_rows() {
    let mut view = TabularView::new(two_rows())
        .column(ColumnDescriptor::field("Type", "type"))
        .filter(status_group());

    assert!(view.set_active_filter_option("Statut", "pending"));
    assert_eq!(ids(&view), vec![1]);
    assert_eq!(view.active_filter_option("Statut"), Some("pending"));

    assert!(view.set_active_filter_option("Statut", "all"));
    assert_eq!(ids(&view), vec![1, 2]);
}

#[test]
fn unknown_filter_changes_nothing() {
    let mut view = TabularView::new(two_rows()).filter(status_group());
    view.set_active_filter_option("Statut", "validated");

    assert!(!view.set_active_filter_option("Statut", "archived"));
    assert!(!view.set_active_filter_option("Nope", "pending"));
    assert_eq!(ids(&view), vec![2]);
}

#[test]
fn search_matches_projected_text() {
    let mut view = TabularView::new(two_rows()).search_by(|n: &Need| n.kind.to_string());
    view.set_search_text("imprim");
    assert_eq!(ids(&view), vec![2]);

    view.set_search_text("   ");
    assert_eq!(ids(&view), vec![1, 2]);
}

#[test]
fn search_ignores_case() {
    let rows = vec![need(1, "ABC-box", "pending", 1), need(2, "xyz", "pending", 1), need(3, "abcd", "pending", 1)];
    let mut upper = TabularView::new(rows.clone()).search_by(|n: &Need| n.kind.to_string());
    let mut lower = TabularView::new(rows).search_by(|n: &Need| n.kind.to_string());
    upper.set_search_text("ABC");
    lower.set_search_text("abc");
    assert_eq!(ids(&upper), vec![1, 3]);
    assert_eq!(ids(&upper), ids(&lower));
}

#[test]
fn search_ignores_accents() {
    let rows = vec![need(1, "Vidéoprojecteur", "pending", 1), need(2, "Écran", "pending", 1), need(3, "ecran plat", "pending", 1)];
    let mut view = TabularView::new(rows).search_by(|n: &Need| n.kind.to_string());

    view.set_search_text("ecran");
    let plain = ids(&view);
    view.set_search_text("Écran");
    assert_eq!(ids(&view), plain);
    assert_eq!(plain, vec![2, 3]);

    view.set_search_text("VIDEO");
    assert_eq!(ids(&view), vec![1]);
}

#[test]
fn filters_and_search_combine() {
    let rows = vec![
        need(1, "Ordinateur", "pending", 1),
        need(2, "Ordinateur", "validated", 1),
        need(3, "Imprimante", "pending", 1),
    ];
    let mut view = TabularView::new(rows)
        .filter(status_group())
        .filter(FilterGroup::new("Big").option("Big", "big", |n: &Need| n.qty > 5))
        .search_by(|n: &Need| n.kind.to_string());

    view.set_active_filter_option("Statut", "pending");
    view.set_search_text("ordi");
    assert_eq!(ids(&view), vec![1]);

    view.set_active_filter_option("Big", "big");
    assert!(view.visible().is_empty());
    assert_eq!(view.snapshot().placeholder(), Some("No results"));
}

#[test]
fn filter_order_does_not_matter() {
    let rows = vec![
        need(1, "A", "pending", 9),
        need(2, "B", "validated", 9),
        need(3, "C", "pending", 1),
    ];
    let build = || {
        TabularView::new(rows.clone())
            .filter(status_group())
            .filter(FilterGroup::new("Big").option("Big", "big", |n: &Need| n.qty > 5))
    };

    let mut a = build();
    a.set_active_filter_option("Statut", "validated");
    a.set_active_filter_option("Big", "big");
    a.set_active_filter_option("Statut", "pending");

    let mut b = build();
    b.set_active_filter_option("Big", "big");
    b.set_active_filter_option("Statut", "pending");

    assert_eq!(ids(&a), vec![1]);
    assert_eq!(ids(&a), ids(&b));
}

#[test]
fn sort_cycles_asc_desc_none() {
    let rows = vec![need(1, "x", "p", 3), need(2, "x", "p", 1), need(3, "x", "p", 2)];
    let mut view = TabularView::new(rows).column(ColumnDescriptor::field("Qty", "quantity").sortable());
    let qty = |v: &TabularView<Need>| v.visible().iter().map(|n| n.qty).collect::<Vec<_>>();

    view.toggle_sort(0);
    assert_eq!(qty(&view), vec![1, 2, 3]);
    assert_eq!(view.sort_state().direction, Some(SortDirection::Asc));

    view.toggle_sort(0);
    assert_eq!(qty(&view), vec![3, 2, 1]);

    view.toggle_sort(0);
    assert_eq!(qty(&view), vec![3, 1, 2]);
    assert_eq!(view.sort_state(), SortState::default());
}

#[test]
fn unsortable_column_is_ignored() {
    let mut view = TabularView::new(two_rows())
        .column(ColumnDescriptor::field("Type", "type"))
        .column(ColumnDescriptor::field("Qty", "quantity").sortable());

    view.toggle_sort(0);
    view.toggle_sort(7);
    assert_eq!(view.sort_state(), SortState::default());
    assert_eq!(view.snapshot().headers[0].sorted, None);
}

#[test]
fn sort_is_stable_both_ways() {
    let rows = vec![
        need(1, "a", "p", 2),
        need(2, "b", "p", 1),
        need(3, "c", "p", 2),
        need(4, "d", "p", 1),
    ];
    let mut view = TabularView::new(rows).column(ColumnDescriptor::field("Qty", "quantity").sortable());

    view.toggle_sort(0);
    assert_eq!(ids(&view), vec![2, 4, 1, 3]);
    view.toggle_sort(0);
    assert_eq!(ids(&view), vec![1, 3, 2, 4]);
}

#[test]
fn derived_column_sorts_on_computed_value() {
    let rows = vec![need(1, "x", "validated", 1), need(2, "y", "pending", 1)];
    let mut view = TabularView::new(rows).column(
        ColumnDescriptor::derived("Status", |n: &Need| Cell::badge(n.status.to_uppercase(), Tone::Info)).sortable(),
    );
    view.toggle_sort(0);
    assert_eq!(ids(&view), vec![2, 1]);

    let snap = view.snapshot();
    assert_eq!(snap.rows()[0].cells[0], Cell::badge("PENDING", Tone::Info));
    assert_eq!(snap.headers[0].title(), "Status ▲");
}

#[test]
fn text_sort_folds_accents() {
    let rows = vec![need(1, "Vidéoprojecteur", "p", 1), need(2, "Écran", "p", 1), need(3, "imprimante", "p", 1)];
    let mut view = TabularView::new(rows).column(ColumnDescriptor::field("Type", "type").sortable());
    view.toggle_sort(0);
    assert_eq!(ids(&view), vec![2, 3, 1]);
}

#[test]
fn empty_values_sort_last() {
    let rows = vec![need(1, "", "p", 1), need(2, "b", "p", 1), need(3, "a", "p", 1)];
    let mut view = TabularView::new(rows).column(ColumnDescriptor::derived("Type", |n: &Need| {
        Cell::Value(if n.kind.is_empty() { Value::Empty } else { Value::text(n.kind) })
    }).sortable());

    view.toggle_sort(0);
    assert_eq!(ids(&view), vec![3, 2, 1]);
    view.toggle_sort(0);
    assert_eq!(ids(&view), vec![2, 3, 1]);
}

#[test]
fn disabled_action_is_not_invoked() {
    let clicks: Rc<RefCell<Vec<u64>>> = Rc::default();
    let sink = Rc::clone(&clicks);
    let mut view = TabularView::new(two_rows()).action(
        RowAction::new("Validate", "✔", move |n: &Need| sink.borrow_mut().push(n.id))
            .disabled_when(|n: &Need| n.status != "pending"),
    );

    assert_eq!(view.invoke_action(0, 2), Invocation::Disabled);
    assert!(clicks.borrow().is_empty());

    assert_eq!(view.invoke_action(0, 1), Invocation::Invoked);
    assert_eq!(*clicks.borrow(), vec![1]);

    assert_eq!(view.invoke_action(0, 99), Invocation::UnknownRow);
    assert_eq!(view.invoke_action(3, 1), Invocation::UnknownAction);
}

#[test]
fn hidden_action_is_not_rendered_or_invoked() {
    let clicks = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&clicks);
    let mut view = TabularView::new(two_rows()).action(
        RowAction::new("Close", "🔒", move |_: &Need| *sink.borrow_mut() += 1)
            .shown_if(|n: &Need| n.status == "validated"),
    );

    let snap = view.snapshot();
    assert!(snap.rows()[0].actions.is_empty());
    assert_eq!(snap.rows()[1].actions.len(), 1);
    assert!(snap.rows()[1].actions[0].enabled);

    view.apply(TableEvent::Action { index: 0, key: 1 });
    assert_eq!(view.invoke_action(0, 1), Invocation::Hidden);
    assert_eq!(*clicks.borrow(), 0);
}

#[test]
fn empty_rows_show_placeholder() {
    let view: TabularView<Need> = TabularView::new(Vec::new()).column(ColumnDescriptor::field("Type", "type"));
    let snap = view.snapshot();
    assert_eq!(snap.placeholder(), Some(DEFAULT_EMPTY_TEXT));
    assert!(snap.rows().is_empty());
    assert_eq!(snap.total, 0);
}

#[test]
fn custom_placeholders() {
    let mut view = TabularView::new(two_rows())
        .search_by(|n: &Need| n.kind.to_string())
        .placeholders("Nothing here", "Nothing matches");
    view.set_search_text("zzz");
    assert_eq!(view.snapshot().placeholder(), Some("Nothing matches"));

    view.set_rows(Vec::new());
    assert_eq!(view.snapshot().placeholder(), Some("Nothing here"));
}

#[test]
fn snapshot_describes_controls() {
    let mut view = TabularView::new(two_rows())
        .column(ColumnDescriptor::field("Type", "type"))
        .filter(status_group())
        .search_by(|n: &Need| n.kind.to_string());
    view.apply(TableEvent::Filter { group: "Statut".into(), value: "validated".into() });
    view.apply(TableEvent::Search("IMP".into()));

    let snap = view.snapshot();
    assert_eq!(snap.search.as_deref(), Some("imp"));
    assert_eq!(snap.filters[0].active, "validated");
    assert_eq!(snap.filters[0].active_label(), "Validated");
    assert_eq!(snap.filters[0].options.len(), 3);
    assert!(!snap.selectable);
    assert!(!snap.has_actions);

    let (headers, rows) = snap.to_text_rows();
    assert_eq!(headers, vec!["Type"]);
    assert_eq!(rows, vec![vec!["Imprimante".to_string()]]);
}

#[test]
fn duplicate_group_and_option_are_ignored() {
    let view = TabularView::new(two_rows())
        .filter(status_group())
        .filter(FilterGroup::new("Statut").option("Other", "other", |_: &Need| false))
        .filter(FilterGroup::new("Kind").option("A", "a", |_: &Need| true).option("B", "a", |_: &Need| false));

    let snap = view.snapshot();
    assert_eq!(snap.filters.len(), 2);
    assert_eq!(snap.filters[0].options.len(), 3);
    assert_eq!(snap.filters[1].options.len(), 2);
}

#[test]
fn refresh_keeps_ui_state() {
    let mut view = TabularView::new(two_rows())
        .column(ColumnDescriptor::field("Qty", "quantity").sortable())
        .filter(status_group())
        .search_by(|n: &Need| n.kind.to_string());
    view.set_active_filter_option("Statut", "pending");
    view.set_search_text("o");
    view.toggle_sort(0);

    view.set_rows(vec![need(5, "Ordinateur", "pending", 3), need(6, "Scanner", "pending", 2), need(7, "Moniteur", "validated", 1)]);
    assert_eq!(ids(&view), vec![5]);
    assert!(view.sort_state().is_active());

    view.reset();
    assert_eq!(view.search_text(), "");
    assert_eq!(view.active_filter_option("Statut"), Some("all"));
    assert_eq!(ids(&view), vec![5, 6, 7]);
}
