// src/config/state.rs
use super::options::AppOptions;
use crate::router::PageKind;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Page shown in the central panel
    pub current_page: PageKind,

    /// Login panel: demo user picked in the combo box
    pub login_choice: usize,

    /// Clipboard copy: tab separated (true) or comma separated
    pub copy_tsv: bool,
    pub copy_headers: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page: PageKind::Dashboard,
            login_choice: 0,
            copy_tsv: true,
            copy_headers: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
