use crate::app::TimelineApp;
use crate::model::{NavDirection, ViewMode};
use crate::ui::theme;
use egui::{menu, RichText, Ui};

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut TimelineApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button("  New Timeline").clicked() {
                app.new_snapshot();
                ui.close_menu();
            }
            if ui.button("  Open...").clicked() {
                app.open_snapshot();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Save          Ctrl+S").clicked() {
                app.save_snapshot();
                ui.close_menu();
            }
            if ui.button("  Save As...").clicked() {
                app.save_snapshot_as();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Export CSV...").clicked() {
                app.export_csv();
                ui.close_menu();
            }
            if ui.button("  Export Agenda...").clicked() {
                app.export_agenda();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Copy Share Link").clicked() {
                app.make_share_link();
                ui.close_menu();
            }
            if ui.button("  Open Share Link...").clicked() {
                app.open_share_dialog.open = true;
                app.open_share_dialog.input.clear();
                app.open_share_dialog.error = None;
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            ui.label(RichText::new("Calendar View").small().weak());
            for mode in [ViewMode::Day, ViewMode::Week, ViewMode::Month] {
                if ui
                    .radio_value(&mut app.view.view_mode, mode, mode.label())
                    .clicked()
                {
                    ui.close_menu();
                }
            }
            ui.separator();
            if ui.button("  Go to Today").clicked() {
                app.view.go_to_today();
                ui.close_menu();
            }
            ui.separator();
            let mut show_holidays = app.prefs.show_holidays;
            if ui.checkbox(&mut show_holidays, "Holidays").changed() {
                app.prefs.show_holidays = show_holidays;
                app.prefs.save();
            }
            ui.separator();
            ui.label(RichText::new("Background").small().weak());
            for gradient in theme::GRADIENTS {
                let selected = app.prefs.gradient_theme == gradient.name;
                if ui.radio(selected, gradient.name).clicked() && !selected {
                    app.prefs.gradient_theme = gradient.name.to_string();
                    app.prefs.save();
                    ui.close_menu();
                }
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.separator();

        // Navigation cluster: prev / today / next plus the visible range.
        if ui.small_button("◀").clicked() {
            app.view.navigate(NavDirection::Prev);
        }
        if ui.small_button("Today").clicked() {
            app.view.go_to_today();
        }
        if ui.small_button("▶").clicked() {
            app.view.navigate(NavDirection::Next);
        }
        ui.label(
            RichText::new(app.view.range_label())
                .font(theme::font_header())
                .strong(),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if app.read_only {
                "shared snapshot (read-only)".to_string()
            } else {
                match &app.file_path {
                    Some(path) => path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    None => "(unsaved)".to_string(),
                }
            };
            ui.label(RichText::new(label).size(11.0).weak());
        });
    });
}
