// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceKind,
    pub log: LogOptions,
    pub dashboard: DashboardOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceKind::Fixture,
            log: LogOptions::default(),
            dashboard: DashboardOptions::default(),
        }
    }
}

/// Which `DataSource` implementation the desk is composed with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// In-memory demo tables, lost on exit.
    Fixture,
    /// Same tables, persisted as CSV files under the given directory.
    Store(PathBuf),
}

impl SourceKind {
    pub fn default_store() -> Self {
        SourceKind::Store(PathBuf::from(STORE_DIR))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl LogLevel {
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOptions {
    pub path: PathBuf,
    pub min_level: LogLevel,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(LOG_FILE), min_level: LogLevel::Info }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Entries in the "recent activity" list.
    pub recent: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self { recent: RECENT_ACTIVITY }
    }
}
