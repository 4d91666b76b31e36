// src/gui/components/dashboard_view.rs

use eframe::egui::{self, RichText};

use super::data_table::tone_color;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(dash) = app.dashboard.as_ref() else {
        ui.label("Dashboard unavailable");
        return;
    };

    ui.heading(format!("Welcome, {}", dash.user));
    ui.label(dash.role.label());
    ui.add_space(8.0);

    let mut open = None;
    egui::Grid::new("dashboard_summary")
        .striped(true)
        .num_columns(3)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            for s in &dash.summaries {
                if ui.link(s.page.title()).clicked() {
                    open = Some(s.page);
                }
                ui.label(RichText::new(s.total.to_string()).strong());
                ui.horizontal(|ui| {
                    for c in s.by_status.iter().filter(|c| c.count > 0) {
                        ui.label(RichText::new(format!("{} {}", c.count, c.label)).color(tone_color(c.tone)));
                    }
                });
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    ui.heading("Recent activity");
    if dash.recent.is_empty() {
        ui.label("Nothing yet");
    }
    egui::Grid::new("dashboard_recent")
        .striped(true)
        .num_columns(4)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for a in &dash.recent {
                ui.label(a.date.to_string());
                ui.label(format!("{} #{}", a.kind.label(), a.id));
                ui.label(a.summary.as_str());
                ui.label(RichText::new(a.status).color(tone_color(a.tone)));
                ui.end_row();
            }
        });

    if let Some(kind) = open {
        app.open(kind);
    }
}
