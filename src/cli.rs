// src/cli.rs
//
// Headless front-end: log in as a demo user, open one page, replay the
// table interactions given on the command line and print what is visible.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{bail, eyre, Result};

use crate::config::options::{AppOptions, LogLevel, SourceKind};
use crate::csv::rows_to_string;
use crate::dashboard::Dashboard;
use crate::desk::Desk;
use crate::router::{Access, PageKind};
use crate::session::{demo_users, find_user};
use crate::table::{fold, RowKey, TableEvent, TableSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl Format {
    pub fn sep(self) -> char {
        match self {
            Format::Csv => ',',
            Format::Tsv => '\t',
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "resdesk-cli", version, about = "List and act on resource desk tables from the terminal")]
pub struct Args {
    /// Demo user id or name (see --list-users)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Page to open: needs, resources, reports, calls, offers, interventions, deliveries
    #[arg(short, long, default_value = "needs")]
    pub page: String,

    /// Search text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Activate a filter option (repeatable)
    #[arg(short, long = "filter", value_name = "GROUP=VALUE")]
    pub filters: Vec<String>,

    /// Toggle sorting on a column by header or index (repeat to flip direction)
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    /// Run a row action before printing (repeatable)
    #[arg(short, long = "action", value_name = "LABEL:ROW")]
    pub actions: Vec<String>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Print the dashboard instead of a page
    #[arg(long)]
    pub dashboard: bool,

    /// Use the CSV store in DIR instead of the in-memory fixtures
    #[arg(long, value_name = "DIR")]
    pub store: Option<PathBuf>,

    #[arg(long)]
    pub list_users: bool,

    /// Debug-level file log
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(dir) = &self.store {
            opts.source = SourceKind::Store(dir.clone());
        }
        if self.verbose {
            opts.log.min_level = LogLevel::Debug;
        }
        opts
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let options = args.options();
    crate::log::init(&options.log);

    if args.list_users {
        for u in demo_users() {
            println!("{},{},{},{}", u.id, u.name, u.role, u.department.as_deref().unwrap_or(""));
        }
        return Ok(());
    }

    let mut desk = Desk::from_options(options)?;
    let out = execute(&args, &mut desk)?;
    print!("{out}");
    Ok(())
}

/// Run `args` against `desk` and return what would be printed.
pub fn execute(args: &Args, desk: &mut Desk) -> Result<String> {
    let key = args.user.as_deref().ok_or_else(|| eyre!("--user is required (see --list-users)"))?;
    let user = find_user(key).ok_or_else(|| eyre!("Unknown user: {key}"))?;
    desk.login(user)?;

    if args.dashboard {
        let dash = desk.dashboard()?.ok_or_else(|| eyre!("not logged in"))?;
        return Ok(render_dashboard(&dash));
    }

    let kind = PageKind::parse(&args.page).ok_or_else(|| eyre!("Unknown page: {}", args.page))?;
    match desk.open(kind)? {
        Access::Granted => {}
        Access::NeedsLogin => bail!("not logged in"),
        Access::Forbidden(why) => bail!("{why}"),
    }
    if kind == PageKind::Dashboard {
        let dash = desk.dashboard()?.ok_or_else(|| eyre!("not logged in"))?;
        return Ok(render_dashboard(&dash));
    }

    if let Some(q) = &args.search {
        desk.apply(TableEvent::Search(q.clone()));
    }
    for f in &args.filters {
        let (group, value) = f.split_once('=').ok_or_else(|| eyre!("Filter must be GROUP=VALUE: {f}"))?;
        let snap = snapshot(desk)?;
        let control = snap
            .filters
            .iter()
            .find(|c| fold(&c.group) == fold(group))
            .ok_or_else(|| eyre!("Unknown filter group: {group}"))?;
        if !control.options.iter().any(|(_, v)| v == value) {
            bail!("Unknown value {value:?} for filter {}", control.group);
        }
        desk.apply(TableEvent::Filter { group: control.group.clone(), value: s!(value) });
    }
    for col in &args.sort {
        let ix = column_index(&snapshot(desk)?, col)?;
        desk.apply(TableEvent::Sort(ix));
    }

    let mut out = String::new();
    for a in &args.actions {
        let (index, key) = find_action(&snapshot(desk)?, a)?;
        for notice in desk.apply(TableEvent::Action { index, key }) {
            eprintln!("{notice}");
        }
    }

    let snap = snapshot(desk)?;
    match snap.placeholder() {
        Some(msg) => eprintln!("{msg}"),
        None => {
            let (headers, rows) = snap.to_text_rows();
            out.push_str(&rows_to_string(Some(&headers[..]), &rows, args.format.sep()));
        }
    }
    Ok(out)
}

fn snapshot(desk: &Desk) -> Result<TableSnapshot> {
    desk.page().map(|p| p.snapshot()).ok_or_else(|| eyre!("no page open"))
}

fn column_index(snap: &TableSnapshot, col: &str) -> Result<usize> {
    if let Ok(ix) = col.parse::<usize>() {
        if ix < snap.headers.len() {
            return Ok(ix);
        }
    }
    snap.headers
        .iter()
        .position(|h| fold(&h.label) == fold(col))
        .ok_or_else(|| eyre!("Unknown column: {col}"))
}

fn find_action(snap: &TableSnapshot, spec: &str) -> Result<(usize, RowKey)> {
    let (label, row) = spec.rsplit_once(':').ok_or_else(|| eyre!("Action must be LABEL:ROW: {spec}"))?;
    let key: RowKey = row.trim().parse().map_err(|_| eyre!("Bad row key in {spec}"))?;
    let rendered = snap
        .rows()
        .iter()
        .find(|r| r.key == key)
        .ok_or_else(|| eyre!("Row {key} is not visible"))?;
    let button = rendered
        .actions
        .iter()
        .find(|b| fold(&b.label) == fold(label))
        .ok_or_else(|| eyre!("No action {label:?} on row {key}"))?;
    if !button.enabled {
        bail!("Action {} is disabled for row {key}", button.label);
    }
    Ok((button.index, key))
}

pub fn render_dashboard(d: &Dashboard) -> String {
    let mut out = format!("{} ({})\n", d.user, d.role);
    for s in &d.summaries {
        let counts: Vec<String> = s
            .by_status
            .iter()
            .filter(|c| c.count > 0)
            .map(|c| format!("{} {}", c.count, c.label))
            .collect();
        out.push_str(&format!("{:<22}{:>4}  {}\n", s.page.title(), s.total, counts.join(", ")));
    }
    if !d.recent.is_empty() {
        out.push_str("\nRecent activity\n");
        for a in &d.recent {
            out.push_str(&format!("{}  {:<18} #{:<3} {} [{}]\n", a.date, a.kind.label(), a.id, a.summary, a.status));
        }
    }
    out
}
