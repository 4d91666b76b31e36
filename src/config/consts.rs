// src/config/consts.rs

// Local store (StoreSource)
pub const STORE_DIR: &str = ".store";
pub const STORE_EXT: &str = "csv";
pub const STORE_SEP: char = ',';

// Logging
pub const LOG_FILE: &str = ".store/debug.log";

// Dashboard
pub const RECENT_ACTIVITY: usize = 8;

// Window
pub const WINDOW_W: f32 = 1180.0;
pub const WINDOW_H: f32 = 720.0;
