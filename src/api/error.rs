// src/api/error.rs
use thiserror::Error;

use crate::session::Role;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{user} ({role}) may not {action}")]
    Forbidden {
        user: String,
        role: Role,
        action: &'static str,
    },

    #[error("{kind} #{id} not found")]
    NotFound { kind: &'static str, id: u32 },

    #[error("{kind} #{id} cannot go from {from} to {to}")]
    InvalidTransition {
        kind: &'static str,
        id: u32,
        from: &'static str,
        to: &'static str,
    },

    #[error("store I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt store table {table} (line {line}): {reason}")]
    Corrupt {
        table: &'static str,
        line: usize,
        reason: String,
    },
}

impl ApiError {
    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Forbidden { .. })
    }
}
