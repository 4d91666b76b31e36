// src/gui/components/data_table.rs
//
// Draws a TableSnapshot: search box, filter combos, sortable headers,
// selection checkboxes, row action buttons, or the placeholder text.
// Purely a view; interactions are returned as TableEvents for the caller
// to apply once drawing is done.

use eframe::egui::{self, Align, Color32, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::table::{Cell, TableEvent, TableSnapshot, Tone};

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Neutral => Color32::GRAY,
        Tone::Info => Color32::from_rgb(0x64, 0xB4, 0xFF),
        Tone::Success => Color32::from_rgb(0x4C, 0xAF, 0x50),
        Tone::Warning => Color32::from_rgb(0xF0, 0xD2, 0x3C),
        Tone::Danger => Color32::from_rgb(0xDC, 0x61, 0x49),
    }
}

pub fn draw(ui: &mut egui::Ui, snap: &TableSnapshot, search: &mut String) -> Vec<TableEvent> {
    let mut events = Vec::new();

    controls(ui, snap, search, &mut events);
    ui.separator();

    if let Some(msg) = snap.placeholder() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| ui.label(RichText::new(msg).italics()));
        return events;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| table(ui, snap, &mut events));

    events
}

fn controls(ui: &mut egui::Ui, snap: &TableSnapshot, search: &mut String, events: &mut Vec<TableEvent>) {
    ui.horizontal_wrapped(|ui| {
        if snap.search.is_some() {
            ui.label("Search:");
            let resp = ui.add(egui::TextEdit::singleline(search).desired_width(200.0));
            if resp.changed() {
                events.push(TableEvent::Search(search.clone()));
            }
        }

        for f in &snap.filters {
            ui.label(format!("{}:", f.group));
            egui::ComboBox::from_id_salt(("filter", f.group.as_str()))
                .selected_text(f.active_label())
                .show_ui(ui, |ui| {
                    for (label, value) in &f.options {
                        let active = *value == f.active;
                        if ui.selectable_label(active, label.as_str()).clicked() && !active {
                            events.push(TableEvent::Filter { group: f.group.clone(), value: value.clone() });
                        }
                    }
                });
        }

        let shown = snap.rows().len();
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if snap.selectable {
                ui.label(format!("{} selected", snap.selected_count));
            }
            ui.label(format!("{shown} / {}", snap.total));
        });
    });
}

fn table(ui: &mut egui::Ui, snap: &TableSnapshot, events: &mut Vec<TableEvent>) {
    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);

    if snap.selectable {
        builder = builder.column(Column::exact(24.0));
    }
    for _ in &snap.headers {
        builder = builder.column(Column::auto().at_least(40.0).clip(true));
    }
    if snap.has_actions {
        builder = builder.column(Column::remainder().at_least(120.0));
    }

    builder
        .header(24.0, |mut header| {
            if snap.selectable {
                header.col(|ui| {
                    let mut all = snap.all_visible_selected;
                    if ui.checkbox(&mut all, "").on_hover_text("Select all visible").clicked() {
                        events.push(TableEvent::ToggleAllVisible);
                    }
                });
            }
            for (ci, h) in snap.headers.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let text = RichText::new(h.title()).strong();
                    if h.sortable {
                        let resp = ui
                            .add(egui::Label::new(text).selectable(false).sense(Sense::click()))
                            .on_hover_cursor(egui::CursorIcon::PointingHand);
                        if resp.clicked() {
                            events.push(TableEvent::Sort(ci));
                        }
                    } else {
                        ui.add(egui::Label::new(text).selectable(false));
                    }
                });
            }
            if snap.has_actions {
                header.col(|ui| {
                    ui.strong("Actions");
                });
            }
        })
        .body(|body| {
            let rows = snap.rows();
            body.rows(24.0, rows.len(), |mut row| {
                let Some(r) = rows.get(row.index()) else { return };
                row.set_selected(r.selected);

                if snap.selectable {
                    row.col(|ui| {
                        let mut checked = r.selected;
                        if ui.checkbox(&mut checked, "").clicked() {
                            events.push(TableEvent::ToggleRow(r.key));
                        }
                    });
                }
                for cell in &r.cells {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        match cell {
                            Cell::Badge { text, tone } => {
                                ui.label(RichText::new(text.as_str()).strong().color(tone_color(*tone)));
                            }
                            other => {
                                ui.label(other.text());
                            }
                        }
                    });
                }
                if snap.has_actions {
                    row.col(|ui| {
                        for a in &r.actions {
                            let button = egui::Button::new(format!("{} {}", a.icon, a.label)).small();
                            if ui.add_enabled(a.enabled, button).clicked() {
                                events.push(TableEvent::Action { index: a.index, key: r.key });
                            }
                        }
                    });
                }
            });
        });
}
