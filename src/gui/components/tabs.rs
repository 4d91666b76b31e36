// src/gui/components/tabs.rs
//
// Top navigation. Only pages the session may open are listed; the switch
// itself goes through the desk so the route guard still has the last word.

use eframe::egui;

use crate::gui::app::App;
use crate::router;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(session) = app.desk.session() else { return };
    let pages = router::routes_for(session);
    let cur = app.current_page_kind();

    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        for kind in pages {
            let selected = kind == cur;
            if ui.selectable_label(selected, kind.title()).clicked() {
                clicked = Some(kind);
            }
        }
    });

    // Clicking the current tab re-opens it with a fresh view.
    if let Some(kind) = clicked {
        app.open(kind);
    }
}
