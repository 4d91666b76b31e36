// src/gui/components/session_panel.rs
//
// Left panel: pick a demo user to log in, or show who is logged in.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Session");
    ui.separator();

    let Some(session) = app.desk.session() else {
        let choice = app.state.gui.login_choice.min(app.users.len().saturating_sub(1));
        let current = app.users.get(choice).map(|u| u.name.clone()).unwrap_or_default();

        egui::ComboBox::from_id_salt("login_user")
            .selected_text(current)
            .width(180.0)
            .show_ui(ui, |ui| {
                for (ix, u) in app.users.iter().enumerate() {
                    let text = format!("{} ({})", u.name, u.role);
                    ui.selectable_value(&mut app.state.gui.login_choice, ix, text);
                }
            });

        if ui.button("Log in").clicked() {
            if let Some(user) = app.users.get(app.state.gui.login_choice).cloned() {
                app.login(user);
            }
        }
        return;
    };

    let user = &session.user;
    egui::Grid::new("session_info").num_columns(2).spacing([8.0, 4.0]).show(ui, |ui| {
        ui.label("User");
        ui.strong(user.name.as_str());
        ui.end_row();
        ui.label("Role");
        ui.label(user.role.label());
        ui.end_row();
        ui.label("Department");
        ui.label(user.department.as_deref().unwrap_or("—"));
        ui.end_row();
    });

    ui.add_space(6.0);
    egui::CollapsingHeader::new("Permissions")
        .default_open(false)
        .show(ui, |ui| {
            for p in session.permissions() {
                ui.label(format!("{p:?}"));
            }
        });

    ui.add_space(6.0);
    ui.label(format!("Data: {}", app.desk.source_name()));

    if ui.button("Log out").clicked() {
        app.logout();
    }
}
