// src/table/snapshot.rs
//
// Owned, front-end agnostic picture of a TabularView. The GUI draws it, the
// CLI prints it, tests assert on it.

use super::sort::SortDirection;
use super::value::{Cell, RowKey};

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCell {
    pub label: String,
    pub sortable: bool,
    pub sorted: Option<SortDirection>,
}

impl HeaderCell {
    /// Label with the sort arrow appended when this column is sorted.
    pub fn title(&self) -> String {
        match self.sorted {
            Some(dir) => format!("{} {}", self.label, dir.arrow()),
            None => self.label.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterControl {
    pub group: String,
    /// (label, value) pairs in declaration order; the first is the baseline.
    pub options: Vec<(String, String)>,
    pub active: String,
}

impl FilterControl {
    pub fn active_label(&self) -> &str {
        self.options
            .iter()
            .find(|(_, v)| *v == self.active)
            .map(|(l, _)| l.as_str())
            .unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActionButton {
    /// Position of the action in the view's action list.
    pub index: usize,
    pub label: String,
    pub icon: &'static str,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedRow {
    pub key: RowKey,
    pub cells: Vec<Cell>,
    pub selected: bool,
    pub actions: Vec<ActionButton>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// Nothing to show; carries the message to display instead of a table.
    Placeholder(String),
    Rows(Vec<RenderedRow>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableSnapshot {
    pub headers: Vec<HeaderCell>,
    pub filters: Vec<FilterControl>,
    /// `None` when the view has no search projection.
    pub search: Option<String>,
    pub selectable: bool,
    pub selected_count: usize,
    pub all_visible_selected: bool,
    pub has_actions: bool,
    /// Rows before filtering.
    pub total: usize,
    pub body: Body,
}

impl TableSnapshot {
    pub fn rows(&self) -> &[RenderedRow] {
        match &self.body {
            Body::Rows(rows) => rows,
            Body::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match &self.body {
            Body::Placeholder(msg) => Some(msg),
            Body::Rows(_) => None,
        }
    }

    /// Plain-text grid (headers + cell text) for copy/export.
    pub fn to_text_rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let headers = self.headers.iter().map(|h| h.label.clone()).collect();
        let rows = self
            .rows()
            .iter()
            .map(|r| r.cells.iter().map(Cell::text).collect())
            .collect();
        (headers, rows)
    }
}
