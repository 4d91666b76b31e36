// src/desk.rs
//
// Composition root shared by the GUI and the CLI: one data source, the
// optional session, and the page currently open.

use std::fmt;

use crate::api::{self, ApiResult, DataSource};
use crate::config::options::AppOptions;
use crate::dashboard::{self, Dashboard};
use crate::pages::{self, Command, Page};
use crate::router::{self, Access, PageKind};
use crate::session::{Session, User};
use crate::table::TableEvent;

/// Outcome of a command run on behalf of a row action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Done(String),
    Failed(String),
    Denied(String),
}

impl Notice {
    pub fn is_done(&self) -> bool { matches!(self, Notice::Done(_)) }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Done(m) => write!(f, "{m}"),
            Notice::Failed(m) => write!(f, "Error: {m}"),
            Notice::Denied(m) => write!(f, "Denied: {m}"),
        }
    }
}

pub struct Desk {
    source: Box<dyn DataSource>,
    session: Option<Session>,
    current: PageKind,
    page: Option<Box<dyn Page>>,
    options: AppOptions,
}

impl Desk {
    pub fn new(source: Box<dyn DataSource>, options: AppOptions) -> Self {
        Self { source, session: None, current: PageKind::Dashboard, page: None, options }
    }

    /// Open the data source named by `options.source`.
    pub fn from_options(options: AppOptions) -> ApiResult<Self> {
        let source = api::open(&options.source)?;
        logf!("Desk: using {} data source", source.name());
        Ok(Self::new(source, options))
    }

    /* ---------- session ---------- */

    /// Start a session for `user` and land on their home page.
    pub fn login(&mut self, user: User) -> ApiResult<PageKind> {
        logf!("Session: {} logged in as {}", user.name, user.role);
        let session = Session::new(user);
        let home = router::home_for(&session);
        self.session = Some(session);
        self.open(home)?;
        Ok(home)
    }

    pub fn logout(&mut self) {
        if let Some(s) = self.session.take() {
            logf!("Session: {} logged out", s.user.name);
        }
        self.page = None;
        self.current = PageKind::Dashboard;
    }

    pub fn session(&self) -> Option<&Session> { self.session.as_ref() }

    pub fn options(&self) -> &AppOptions { &self.options }

    pub fn source_name(&self) -> &'static str { self.source.name() }

    /* ---------- navigation ---------- */

    pub fn current(&self) -> PageKind { self.current }

    /// Open `kind` if the session may. A granted list page is rebuilt from
    /// scratch (fresh search, filters, sort and selection) and loaded.
    pub fn open(&mut self, kind: PageKind) -> ApiResult<Access> {
        let access = router::guard(self.session.as_ref(), kind);
        let Some(session) = self.session.as_ref() else {
            logd!("Router: {:?} needs a login", kind);
            return Ok(access);
        };
        if access != Access::Granted {
            logf!("Router: {:?} denied for {}", kind, session.user.name);
            return Ok(access);
        }

        let mut page = pages::build(kind, session, self.source.today());
        if let Some(p) = page.as_mut() {
            p.refresh(self.source.as_ref(), session)?;
        }
        self.page = page;
        self.current = kind;
        logd!("Router: opened {:?}", kind);
        Ok(Access::Granted)
    }

    /// Refetch the open page's rows, keeping its UI state.
    pub fn refresh(&mut self) -> ApiResult<()> {
        match (self.page.as_mut(), self.session.as_ref()) {
            (Some(p), Some(s)) => p.refresh(self.source.as_ref(), s),
            _ => Ok(()),
        }
    }

    pub fn page(&self) -> Option<&dyn Page> { self.page.as_deref() }

    /* ---------- interaction ---------- */

    /// Feed a table event to the open page, then run whatever its row
    /// actions queued. Returns one notice per command.
    pub fn apply(&mut self, event: TableEvent) -> Vec<Notice> {
        let Some(page) = self.page.as_mut() else { return Vec::new() };
        page.apply(event);
        let commands = page.take_commands();

        let mut notices = Vec::with_capacity(commands.len());
        let mut changed = false;
        for cmd in commands {
            match cmd {
                Command::Change(change) => {
                    let notice = self.run_change(change);
                    changed |= notice.is_done();
                    notices.push(notice);
                }
                Command::Navigate { page, search } => notices.push(self.navigate(page, &search)),
            }
        }

        if changed {
            if let Err(e) = self.refresh() {
                loge!("Desk: refresh after change failed: {}", e);
                notices.push(Notice::Failed(e.to_string()));
            }
        }
        notices
    }

    fn run_change(&mut self, change: api::StatusChange) -> Notice {
        let Some(session) = self.session.as_ref() else {
            return Notice::Denied(s!("not logged in"));
        };
        match self.source.apply(session, change) {
            Ok(()) => {
                logf!("Desk: {} #{} → {}", change.kind().label(), change.id(), change.target_label());
                Notice::Done(format!("{} #{} → {}", change.kind().label(), change.id(), change.target_label()))
            }
            Err(e) if e.is_forbidden() => {
                logf!("Desk: {:?} denied: {}", change, e);
                Notice::Denied(e.to_string())
            }
            Err(e) => {
                loge!("Desk: {:?} failed: {}", change, e);
                Notice::Failed(e.to_string())
            }
        }
    }

    fn navigate(&mut self, kind: PageKind, search: &str) -> Notice {
        match self.open(kind) {
            Ok(Access::Granted) => {
                if let Some(p) = self.page.as_mut() {
                    p.apply(TableEvent::Search(s!(search)));
                }
                Notice::Done(format!("{}: \"{}\"", kind.title(), search))
            }
            Ok(Access::NeedsLogin) => Notice::Denied(s!("not logged in")),
            Ok(Access::Forbidden(why)) => Notice::Denied(why),
            Err(e) => Notice::Failed(e.to_string()),
        }
    }

    /// Dashboard for the current session; `None` when logged out.
    pub fn dashboard(&self) -> ApiResult<Option<Dashboard>> {
        let Some(s) = self.session.as_ref() else { return Ok(None) };
        dashboard::build(self.source.as_ref(), s, self.options.dashboard.recent).map(Some)
    }
}
