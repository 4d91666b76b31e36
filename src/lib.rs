// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod table;
pub mod model;
pub mod session;

pub mod api;
pub mod csv;
pub mod router;
pub mod pages;
pub mod dashboard;
pub mod desk;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
