// src/gui/components/mod.rs
pub mod copy_bar;
pub mod dashboard_view;
pub mod data_table;
pub mod session_panel;
pub mod tabs;
