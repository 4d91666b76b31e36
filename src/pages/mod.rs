// src/pages/mod.rs
//
// List pages: one TabularView per record kind, configured for the session
// (actions only appear for users who may perform them).
//
// Row actions never touch the data source themselves; they push a
// `Command` onto the page's channel and the desk runs it afterwards.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use chrono::NaiveDate;

use crate::api::{ApiResult, DataSource, StatusChange};
use crate::router::PageKind;
use crate::session::Session;
use crate::table::{Cell, Record, RowKey, TableEvent, TableSnapshot, TabularView};

pub mod calls;
pub mod deliveries;
pub mod interventions;
pub mod needs;
pub mod offers;
pub mod reports;
pub mod resources;

/// Work requested by a row action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Change(StatusChange),
    /// Open another page with its search box pre-filled.
    Navigate { page: PageKind, search: String },
}

/// Object-safe face of a list page, so the desk can hold any of them.
pub trait Page {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str { self.kind().title() }

    /// Refetch rows; UI state (search, filters, sort) is kept.
    fn refresh(&mut self, src: &dyn DataSource, session: &Session) -> ApiResult<()>;

    fn snapshot(&self) -> TableSnapshot;
    fn apply(&mut self, event: TableEvent);

    /// Commands queued by actions since the last call.
    fn take_commands(&mut self) -> Vec<Command>;

    /// Keys reported by the last selection-change notification.
    fn selection(&self) -> Vec<RowKey>;

    /// Text grid for copy/export: selected rows if any, else visible rows.
    fn export_rows(&self) -> (Vec<String>, Vec<Vec<String>>);
}

type Loader<T> = fn(&dyn DataSource, &Session) -> ApiResult<Vec<T>>;

pub struct ListPage<T> {
    kind: PageKind,
    view: TabularView<T>,
    load: Loader<T>,
    commands: Receiver<Command>,
    selection: Rc<RefCell<Vec<RowKey>>>,
}

/// Everything a page builder needs besides its own record type.
pub struct PageCtx<'a> {
    pub session: &'a Session,
    pub today: NaiveDate,
    pub tx: Sender<Command>,
}

impl<'a> PageCtx<'a> {
    /// Action callback sending the change built from the clicked row.
    pub fn change<T, F>(&self, f: F) -> impl FnMut(&T) + use<T, F>
    where
        T: 'static,
        F: Fn(&T) -> StatusChange + 'static,
    {
        let tx = self.tx.clone();
        move |row: &T| {
            let _ = tx.send(Command::Change(f(row)));
        }
    }

    pub fn navigate<T, F>(&self, page: PageKind, f: F) -> impl FnMut(&T) + use<T, F>
    where
        T: 'static,
        F: Fn(&T) -> String + 'static,
    {
        let tx = self.tx.clone();
        move |row: &T| {
            let _ = tx.send(Command::Navigate { page, search: f(row) });
        }
    }
}

impl<T: Record + 'static> ListPage<T> {
    /// Wire a page: `configure` adds columns/filters/actions to an empty
    /// view, `load` fetches rows.
    pub fn build<C>(kind: PageKind, session: &Session, today: NaiveDate, load: Loader<T>, configure: C) -> Self
    where
        C: FnOnce(TabularView<T>, &PageCtx) -> TabularView<T>,
    {
        let (tx, commands) = mpsc::channel();
        let ctx = PageCtx { session, today, tx };
        let view = configure(TabularView::new(Vec::new()), &ctx);
        Self { kind, view, load, commands, selection: Rc::new(RefCell::new(Vec::new())) }
    }

    /// Make rows selectable, mirroring the selection into `selection()`.
    pub fn with_selection(mut self) -> Self {
        let shared = Rc::clone(&self.selection);
        self.view = self.view.selectable(move |rows: &[&T]| {
            *shared.borrow_mut() = rows.iter().map(|r| r.key()).collect();
        });
        self
    }

    pub fn view(&self) -> &TabularView<T> { &self.view }
}

impl<T: Record + 'static> Page for ListPage<T> {
    fn kind(&self) -> PageKind { self.kind }

    fn refresh(&mut self, src: &dyn DataSource, session: &Session) -> ApiResult<()> {
        let rows = (self.load)(src, session)?;
        logd!("Page: {:?} loaded {} row(s) from {}", self.kind, rows.len(), src.name());
        self.view.set_rows(rows);
        Ok(())
    }

    fn snapshot(&self) -> TableSnapshot { self.view.snapshot() }

    fn apply(&mut self, event: TableEvent) { self.view.apply(event) }

    fn take_commands(&mut self) -> Vec<Command> {
        self.commands.try_iter().collect()
    }

    fn selection(&self) -> Vec<RowKey> { self.selection.borrow().clone() }

    fn export_rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let rows: Vec<&T> = if self.view.selected_rows().is_empty() {
            self.view.visible()
        } else {
            self.view.selected_rows()
        };
        let headers = self.view.columns().iter().map(|c| c.header.clone()).collect();
        let body = rows
            .iter()
            .map(|r| self.view.columns().iter().map(|c| c.cell(r).text()).collect())
            .collect();
        (headers, body)
    }
}

/// Build the list page for `kind` (the dashboard has none). Access must
/// already have been granted by `router::guard`.
pub fn build(kind: PageKind, session: &Session, today: NaiveDate) -> Option<Box<dyn Page>> {
    let page: Box<dyn Page> = match kind {
        PageKind::Dashboard => return None,
        PageKind::Needs => Box::new(needs::page(session, today)),
        PageKind::Resources => Box::new(resources::page(session, today)),
        PageKind::Reports => Box::new(reports::page(session, today)),
        PageKind::Calls => Box::new(calls::page(session, today)),
        PageKind::Offers => Box::new(offers::page(session, today)),
        PageKind::Interventions => Box::new(interventions::page(session, today)),
        PageKind::Deliveries => Box::new(deliveries::page(session, today)),
    };
    Some(page)
}

/// Status badge cell.
pub fn badge<S: crate::model::Status>(st: S) -> Cell {
    Cell::badge(st.label(), st.tone())
}
