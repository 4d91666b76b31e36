// src/table/mod.rs
//
// TabularView: searchable, filterable, sortable, optionally selectable view
// over a row collection, with per-row actions.
//
// - The view owns the rows it was handed but never fetches or mutates them.
// - What is visible is re-derived on demand from rows + UI state:
//   filters (AND across groups) → search → stable sort.
// - UI state (search, active filters, sort, selection) survives `set_rows`,
//   so a refresh does not throw away what the user was doing.
// - Misconfiguration (unknown group/option, unsortable column, disabled or
//   hidden action) is a silent no-op.

use std::cmp::Ordering;
use std::collections::HashSet;

pub mod action;
pub mod column;
pub mod filter;
pub mod snapshot;
pub mod sort;
pub mod value;

pub use action::{Invocation, RowAction};
pub use column::{ColumnAccessor, ColumnDescriptor};
pub use filter::{FilterGroup, FilterOption, ALL};
pub use snapshot::{ActionButton, Body, FilterControl, HeaderCell, RenderedRow, TableSnapshot};
pub use sort::{SortDirection, SortState};
pub use value::{fold, Cell, Record, RowKey, Tone, Value};

pub const DEFAULT_EMPTY_TEXT: &str = "No rows";
pub const DEFAULT_NO_RESULTS_TEXT: &str = "No results";

/// A user interaction recorded by a front-end, applied after drawing.
#[derive(Clone, Debug, PartialEq)]
pub enum TableEvent {
    Search(String),
    Filter { group: String, value: String },
    Sort(usize),
    ToggleRow(RowKey),
    ToggleAllVisible,
    Action { index: usize, key: RowKey },
}

type SelectionCallback<T> = Box<dyn FnMut(&[&T])>;

pub struct TabularView<T> {
    rows: Vec<T>,
    columns: Vec<ColumnDescriptor<T>>,
    filters: Vec<FilterGroup<T>>,
    /// Active option index per filter group (parallel to `filters`).
    active: Vec<usize>,
    actions: Vec<RowAction<T>>,
    search_field: Option<Box<dyn Fn(&T) -> String>>,

    // UI state
    search: String,
    sort: SortState,
    selectable: bool,
    selected: HashSet<RowKey>,
    on_selection_change: Option<SelectionCallback<T>>,

    empty_text: String,
    no_results_text: String,
}

impl<T: Record> TabularView<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            columns: Vec::new(),
            filters: Vec::new(),
            active: Vec::new(),
            actions: Vec::new(),
            search_field: None,
            search: s!(),
            sort: SortState::default(),
            selectable: false,
            selected: HashSet::new(),
            on_selection_change: None,
            empty_text: s!(DEFAULT_EMPTY_TEXT),
            no_results_text: s!(DEFAULT_NO_RESULTS_TEXT),
        }
    }

    /* ---------- configuration ---------- */

    pub fn column(mut self, col: ColumnDescriptor<T>) -> Self {
        self.columns.push(col);
        self
    }

    pub fn filter(mut self, group: FilterGroup<T>) -> Self {
        if self.filters.iter().any(|g| g.name == group.name) {
            logd!("Table: duplicate filter group {:?} ignored", group.name);
            return self;
        }
        self.filters.push(group);
        self.active.push(0);
        self
    }

    pub fn action(mut self, action: RowAction<T>) -> Self {
        self.actions.push(action);
        self
    }

    /// Enable search over the text `f` projects from each row.
    pub fn search_by<F: Fn(&T) -> String + 'static>(mut self, f: F) -> Self {
        self.search_field = Some(Box::new(f));
        self
    }

    /// Enable row selection; `on_change` receives the full selection after
    /// every change.
    pub fn selectable<F: FnMut(&[&T]) + 'static>(mut self, on_change: F) -> Self {
        self.selectable = true;
        self.on_selection_change = Some(Box::new(on_change));
        self
    }

    /// Messages shown instead of the table when there are no rows at all,
    /// or none left after filtering.
    pub fn placeholders<A: Into<String>, B: Into<String>>(mut self, empty: A, no_results: B) -> Self {
        self.empty_text = empty.into();
        self.no_results_text = no_results.into();
        self
    }

    /* ---------- inputs ---------- */

    pub fn rows(&self) -> &[T] { &self.rows }
    pub fn columns(&self) -> &[ColumnDescriptor<T>] { &self.columns }
    pub fn search_text(&self) -> &str { &self.search }
    pub fn sort_state(&self) -> SortState { self.sort }
    pub fn is_selectable(&self) -> bool { self.selectable }

    pub fn row(&self, key: RowKey) -> Option<&T> {
        self.rows.iter().find(|r| r.key() == key)
    }

    /// Replace the row snapshot (e.g. after a refetch). Keeps search, filter
    /// and sort; drops selected keys that are no longer present.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        if self.selected.is_empty() {
            return;
        }
        let present: HashSet<RowKey> = self.rows.iter().map(Record::key).collect();
        let before = self.selected.len();
        self.selected.retain(|k| present.contains(k));
        if self.selected.len() != before {
            logd!("Table: pruned {} stale selection(s)", before - self.selected.len());
            self.notify_selection();
        }
    }

    /// Back to defaults, as if the view had just been built.
    pub fn reset(&mut self) {
        self.search.clear();
        self.sort = SortState::default();
        self.active.iter_mut().for_each(|a| *a = 0);
        if !self.selected.is_empty() {
            self.selected.clear();
            self.notify_selection();
        }
    }

    /* ---------- operations ---------- */

    /// Stored folded, so matching ignores case and accents.
    pub fn set_search_text(&mut self, text: &str) {
        self.search = fold(text.trim());
    }

    /// Activate `value` in filter group `group`. Returns false (and changes
    /// nothing) when either is unknown.
    pub fn set_active_filter_option(&mut self, group: &str, value: &str) -> bool {
        let Some(gi) = self.filters.iter().position(|g| g.name == group) else {
            logd!("Table: unknown filter group {:?}", group);
            return false;
        };
        let Some(oi) = self.filters[gi].position(value) else {
            logd!("Table: unknown option {:?} in filter group {:?}", value, group);
            return false;
        };
        self.active[gi] = oi;
        true
    }

    /// Value of the active option in `group`.
    pub fn active_filter_option(&self, group: &str) -> Option<&str> {
        let gi = self.filters.iter().position(|g| g.name == group)?;
        Some(self.filters[gi].get(self.active[gi]).value.as_str())
    }

    /// Header click. Non-sortable or out-of-range columns are ignored.
    pub fn toggle_sort(&mut self, column: usize) {
        match self.columns.get(column) {
            Some(c) if c.enable_sorting => self.sort = self.sort.toggled(column),
            _ => logd!("Table: column {} is not sortable", column),
        }
    }

    pub fn is_selected(&self, key: RowKey) -> bool {
        self.selected.contains(&key)
    }

    /// Selected rows in input order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.rows.iter().filter(|r| self.selected.contains(&r.key())).collect()
    }

    pub fn toggle_row_selected(&mut self, key: RowKey) {
        if !self.selectable {
            return;
        }
        if !self.rows.iter().any(|r| r.key() == key) {
            logd!("Table: toggle on unknown row {}", key);
            return;
        }
        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
        self.notify_selection();
    }

    /// Select every visible row, or unselect them all when they already are.
    pub fn toggle_select_all_visible(&mut self) {
        if !self.selectable {
            return;
        }
        let visible: Vec<RowKey> = self.visible_ix().into_iter().map(|i| self.rows[i].key()).collect();
        if visible.iter().all(|k| self.selected.contains(k)) {
            for k in &visible {
                self.selected.remove(k);
            }
        } else {
            self.selected.extend(visible);
        }
        self.notify_selection();
    }

    /// Run action `index` against the row with `key`, unless it is hidden
    /// or disabled for that row.
    pub fn invoke_action(&mut self, index: usize, key: RowKey) -> Invocation {
        let Some(ri) = self.rows.iter().position(|r| r.key() == key) else {
            return Invocation::UnknownRow;
        };
        let Some(action) = self.actions.get_mut(index) else {
            return Invocation::UnknownAction;
        };
        let row = &self.rows[ri];
        if !action.is_shown(row) {
            return Invocation::Hidden;
        }
        if action.is_disabled(row) {
            logd!("Table: action {:?} rejected for disabled row {}", action.label, key);
            return Invocation::Disabled;
        }
        action.fire(row);
        Invocation::Invoked
    }

    pub fn apply(&mut self, event: TableEvent) {
        match event {
            TableEvent::Search(text) => self.set_search_text(&text),
            TableEvent::Filter { group, value } => {
                self.set_active_filter_option(&group, &value);
            }
            TableEvent::Sort(col) => self.toggle_sort(col),
            TableEvent::ToggleRow(key) => self.toggle_row_selected(key),
            TableEvent::ToggleAllVisible => self.toggle_select_all_visible(),
            TableEvent::Action { index, key } => {
                self.invoke_action(index, key);
            }
        }
    }

    fn notify_selection(&mut self) {
        let selected: Vec<&T> = self.rows.iter().filter(|r| self.selected.contains(&r.key())).collect();
        if let Some(cb) = self.on_selection_change.as_mut() {
            cb(&selected);
        }
    }

    /* ---------- derivation ---------- */

    fn passes_filters(&self, row: &T) -> bool {
        self.filters
            .iter()
            .zip(&self.active)
            .all(|(g, &ix)| g.get(ix).matches(row))
    }

    fn passes_search(&self, row: &T) -> bool {
        match (&self.search_field, self.search.is_empty()) {
            (Some(field), false) => fold(&field(row)).contains(&self.search),
            _ => true,
        }
    }

    /// Positions (into `rows`) of the visible rows, in display order.
    /// Empty sort values stay last in both directions.
    pub fn visible_ix(&self) -> Vec<usize> {
        let mut ix: Vec<usize> = (0..self.rows.len())
            .filter(|&i| self.passes_filters(&self.rows[i]))
            .filter(|&i| self.passes_search(&self.rows[i]))
            .collect();

        if let (Some(col), Some(dir)) = (self.sort.column, self.sort.direction) {
            if let Some(column) = self.columns.get(col) {
                // Keys computed once; sort_by is stable for both directions.
                // Empty values stay at the bottom either way.
                let mut keyed: Vec<(Value, usize)> = ix
                    .iter()
                    .map(|&i| (column.sort_value(&self.rows[i]), i))
                    .collect();
                keyed.sort_by(|(a, _), (b, _)| match (a.is_empty(), b.is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    _ => match dir {
                        SortDirection::Asc => a.compare(b),
                        SortDirection::Desc => b.compare(a),
                    },
                });
                ix = keyed.into_iter().map(|(_, i)| i).collect();
            }
        }
        ix
    }

    pub fn visible(&self) -> Vec<&T> {
        self.visible_ix().into_iter().map(|i| &self.rows[i]).collect()
    }

    /* ---------- rendering ---------- */

    pub fn snapshot(&self) -> TableSnapshot {
        let headers = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| HeaderCell {
                label: c.header.clone(),
                sortable: c.enable_sorting,
                sorted: self.sort.indicator(i),
            })
            .collect();

        let filters = self
            .filters
            .iter()
            .zip(&self.active)
            .map(|(g, &ix)| FilterControl {
                group: g.name.clone(),
                options: g.options().iter().map(|o| (o.label.clone(), o.value.clone())).collect(),
                active: g.get(ix).value.clone(),
            })
            .collect();

        let visible = self.visible_ix();
        let all_visible_selected = !visible.is_empty()
            && visible.iter().all(|&i| self.selected.contains(&self.rows[i].key()));

        let body = if self.rows.is_empty() {
            Body::Placeholder(self.empty_text.clone())
        } else if visible.is_empty() {
            Body::Placeholder(self.no_results_text.clone())
        } else {
            Body::Rows(visible.iter().map(|&i| self.render_row(&self.rows[i])).collect())
        };

        TableSnapshot {
            headers,
            filters,
            search: self.search_field.as_ref().map(|_| self.search.clone()),
            selectable: self.selectable,
            selected_count: self.selected.len(),
            all_visible_selected,
            has_actions: !self.actions.is_empty(),
            total: self.rows.len(),
            body,
        }
    }

    fn render_row(&self, row: &T) -> RenderedRow {
        let actions = self
            .actions
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_shown(row))
            .map(|(index, a)| ActionButton {
                index,
                label: a.label.clone(),
                icon: a.icon,
                enabled: !a.is_disabled(row),
            })
            .collect();

        RenderedRow {
            key: row.key(),
            cells: self.columns.iter().map(|c| c.cell(row)).collect(),
            selected: self.selected.contains(&row.key()),
            actions,
        }
    }
}
