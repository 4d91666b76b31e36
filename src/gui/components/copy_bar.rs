// src/gui/components/copy_bar.rs
//
// Copy the selected rows (or every visible row when nothing is selected)
// to the clipboard as CSV/TSV.

use eframe::egui;

use crate::csv::rows_to_string;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let gui = &mut app.state.gui;
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.label("Format:");
        if ui.selectable_label(!gui.copy_tsv, "CSV").clicked() {
            gui.copy_tsv = false;
        }
        if ui.selectable_label(gui.copy_tsv, "TSV").clicked() {
            gui.copy_tsv = true;
        }
        ui.checkbox(&mut gui.copy_headers, "Include headers");

        clicked = ui.button("Copy").clicked();
    });

    if clicked {
        copy(ui.ctx(), app);
    }
}

fn copy(ctx: &egui::Context, app: &mut App) {
    let Some(page) = app.desk.page() else { return };
    let (headers, rows) = page.export_rows();
    if rows.is_empty() {
        logd!("Copy: Clicked, but there's nothing to copy");
        app.status("Nothing to copy");
        return;
    }

    let gui = &app.state.gui;
    let sep = if gui.copy_tsv { '\t' } else { ',' };
    let header_row = gui.copy_headers.then_some(&headers[..]);
    let txt = rows_to_string(header_row, &rows, sep);
    logf!("Copy: page={:?}, rows={}, headers={}", page.kind(), rows.len(), gui.copy_headers);

    ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", rows.len()));
}
