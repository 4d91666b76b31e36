// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        options::SourceKind,
        state::AppState,
    },
    dashboard::Dashboard,
    desk::{Desk, Notice},
    router::{Access, PageKind},
    session::{demo_users, User},
    table::TableEvent,
};

use super::components::{copy_bar, dashboard_view, data_table, session_panel, tabs};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let mut state = AppState::default();
    state.options.source = SourceKind::default_store();
    crate::log::init(&state.options.log);

    let desk = Desk::from_options(state.options.clone())?;
    eframe::run_native(
        "Resource Desk",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, desk)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub desk: Desk,

    pub users: Vec<User>,

    // search box edit buffer for the open page
    pub search_text: String,

    // dashboard content, rebuilt after login and after every change
    pub dashboard: Option<Dashboard>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState, desk: Desk) -> Self {
        let users = demo_users();
        logf!("Init: {} demo users, source={}", users.len(), desk.source_name());
        Self {
            state,
            desk,
            users,
            search_text: s!(),
            dashboard: None,
            status: s!("Log in to start"),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.desk.current() }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn login(&mut self, user: User) {
        let name = user.name.clone();
        match self.desk.login(user) {
            Ok(home) => {
                self.state.gui.current_page = home;
                self.sync_page();
                self.status(format!("Logged in as {name}"));
            }
            Err(e) => {
                loge!("UI: login failed: {}", e);
                self.status(format!("Login failed: {e}"));
            }
        }
    }

    pub fn logout(&mut self) {
        self.desk.logout();
        self.dashboard = None;
        self.search_text.clear();
        self.state.gui.current_page = PageKind::Dashboard;
        self.status("Logged out");
    }

    pub fn open(&mut self, kind: PageKind) {
        let prev = self.current_page_kind();
        match self.desk.open(kind) {
            Ok(Access::Granted) => {
                logf!("UI: Tab switch {:?} → {:?}", prev, kind);
                self.state.gui.current_page = kind;
                self.sync_page();
                self.status(kind.title());
            }
            Ok(Access::NeedsLogin) => self.status("Log in first"),
            Ok(Access::Forbidden(why)) => self.status(why),
            Err(e) => {
                loge!("UI: opening {:?} failed: {}", kind, e);
                self.status(format!("Error: {e}"));
            }
        }
    }

    /// Pull page-derived state after a page was (re)opened: the search
    /// buffer follows the new view, the dashboard is rebuilt.
    fn sync_page(&mut self) {
        self.search_text = self
            .desk
            .page()
            .and_then(|p| p.snapshot().search)
            .unwrap_or_default();
        self.state.gui.current_page = self.desk.current();
        self.reload_dashboard();
    }

    fn reload_dashboard(&mut self) {
        self.dashboard = match self.desk.dashboard() {
            Ok(d) => d,
            Err(e) => {
                loge!("UI: dashboard failed: {}", e);
                None
            }
        };
    }

    /// Apply events recorded while drawing the table.
    pub fn apply_events(&mut self, events: Vec<TableEvent>) {
        let before = self.current_page_kind();
        for ev in events {
            let notices = self.desk.apply(ev);
            if let Some(last) = notices.last() {
                self.status(last.to_string());
            }
            if notices.iter().any(Notice::is_done) {
                self.reload_dashboard();
            }
        }
        if self.current_page_kind() != before {
            self.sync_page();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("session")
            .resizable(false)
            .show(ctx, |ui| {
                session_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.desk.session().is_none() {
                ui.centered_and_justified(|ui| ui.label("Pick a user on the left to log in."));
                return;
            }

            tabs::draw(ui, self);
            ui.separator();

            if self.current_page_kind() == PageKind::Dashboard {
                dashboard_view::draw(ui, self);
                return;
            }

            copy_bar::draw(ui, self);
            ui.separator();

            let Some(snapshot) = self.desk.page().map(|p| p.snapshot()) else { return };
            let events = data_table::draw(ui, &snapshot, &mut self.search_text);
            if !events.is_empty() {
                self.apply_events(events);
            }
        });
    }
}
