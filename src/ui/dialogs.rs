use egui::{Color32, Context, RichText, Window};

use crate::app::TimelineApp;
use crate::ui::theme;

/// Render the event editor (create and edit share one window).
pub fn show_event_dialog(app: &mut TimelineApp, ctx: &Context) {
    let mut should_close = false;
    let editing = app.event_dialog.event_id.is_some();
    let title = if editing { "Edit Event" } else { "New Event" };

    Window::new(RichText::new(title).strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);

            egui::Grid::new("event_dialog_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Title").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [200.0, 24.0],
                        egui::TextEdit::singleline(&mut app.event_dialog.title)
                            .hint_text("Event title..."),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Notes").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [200.0, 48.0],
                        egui::TextEdit::multiline(&mut app.event_dialog.description),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Project").color(theme::TEXT_SECONDARY));
                    let selected_name = app
                        .store
                        .project(&app.event_dialog.project_id)
                        .map(|p| p.name.clone())
                        .unwrap_or_default();
                    egui::ComboBox::from_id_salt("event_dialog_project")
                        .selected_text(selected_name)
                        .show_ui(ui, |ui| {
                            for project in app.store.projects() {
                                ui.selectable_value(
                                    &mut app.event_dialog.project_id,
                                    project.id.clone(),
                                    &project.name,
                                );
                            }
                        });
                    ui.end_row();

                    ui.label(RichText::new("Start").color(theme::TEXT_SECONDARY));
                    ui.horizontal(|ui| {
                        ui.add(
                            egui_extras::DatePickerButton::new(
                                &mut app.event_dialog.start_date,
                            )
                            .id_salt("event_dp_start"),
                        );
                        let start_minute = app.event_dialog.start_minute;
                        ui.add_enabled(
                            !app.event_dialog.all_day,
                            egui::DragValue::new(&mut app.event_dialog.start_hour)
                                .range(0..=23)
                                .custom_formatter(move |v, _| {
                                    format!("{:02}:{:02}", v as u32, start_minute)
                                }),
                        );
                    });
                    ui.end_row();

                    ui.label(RichText::new("End").color(theme::TEXT_SECONDARY));
                    ui.horizontal(|ui| {
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut app.event_dialog.end_date)
                                .id_salt("event_dp_end"),
                        );
                        let end_minute = app.event_dialog.end_minute;
                        ui.add_enabled(
                            !app.event_dialog.all_day,
                            egui::DragValue::new(&mut app.event_dialog.end_hour)
                                .range(0..=24)
                                .custom_formatter(move |v, _| {
                                    format!("{:02}:{:02}", v as u32, end_minute)
                                }),
                        );
                    });
                    ui.end_row();

                    ui.label("");
                    ui.checkbox(&mut app.event_dialog.all_day, "All day");
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let save_btn = egui::Button::new(RichText::new("Save").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], save_btn).clicked() {
                    should_close = app.submit_event_dialog();
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    should_close = true;
                }
                if editing {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete_btn = egui::Button::new(
                            RichText::new("Delete").color(Color32::WHITE),
                        )
                        .fill(Color32::from_rgb(180, 60, 60))
                        .rounding(egui::Rounding::same(4.0));
                        if ui.add_sized([70.0, 28.0], delete_btn).clicked() {
                            app.delete_event_from_dialog();
                            should_close = true;
                        }
                    });
                }
            });
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.event_dialog.open = false;
    }
}

/// Render the project editor (create and edit share one window).
pub fn show_project_dialog(app: &mut TimelineApp, ctx: &Context) {
    let mut should_close = false;
    let editing = app.project_dialog.project_id.is_some();
    let title = if editing { "Edit Project" } else { "New Project" };

    Window::new(RichText::new(title).strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([280.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            egui::Grid::new("project_dialog_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Name").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [180.0, 24.0],
                        egui::TextEdit::singleline(&mut app.project_dialog.name)
                            .hint_text("Project name..."),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Color").color(theme::TEXT_SECONDARY));
                    ui.horizontal(|ui| {
                        for hex in theme::PROJECT_COLORS {
                            let (rect, response) = ui.allocate_exact_size(
                                egui::Vec2::splat(16.0),
                                egui::Sense::click(),
                            );
                            ui.painter().rect_filled(
                                rect,
                                egui::Rounding::same(3.0),
                                theme::hex_or_accent(hex),
                            );
                            if app.project_dialog.color == *hex {
                                ui.painter().rect_stroke(
                                    rect.expand(1.5),
                                    egui::Rounding::same(4.0),
                                    egui::Stroke::new(1.5, Color32::WHITE),
                                );
                            }
                            if response.clicked() {
                                app.project_dialog.color = hex.to_string();
                            }
                        }
                    });
                    ui.end_row();

                    ui.label("");
                    ui.add_sized(
                        [90.0, 22.0],
                        egui::TextEdit::singleline(&mut app.project_dialog.color)
                            .hint_text("#rrggbb"),
                    );
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let save_btn = egui::Button::new(RichText::new("Save").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], save_btn).clicked() {
                    app.submit_project_dialog();
                    should_close = true;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    should_close = true;
                }
            });
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.project_dialog.open = false;
    }
}

/// Render the generated share link for copying.
pub fn show_share_dialog(app: &mut TimelineApp, ctx: &Context) {
    let mut should_close = false;
    Window::new(RichText::new("Share Link").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([380.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(
                RichText::new("Anyone with this link gets a read-only view:")
                    .color(theme::TEXT_SECONDARY),
            );
            let mut url = app.share_dialog.url.clone();
            ui.add_sized([360.0, 48.0], egui::TextEdit::multiline(&mut url));
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.add_sized([80.0, 26.0], egui::Button::new("Copy")).clicked() {
                    ui.ctx().copy_text(app.share_dialog.url.clone());
                }
                if ui.add_sized([80.0, 26.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.share_dialog.open = false;
    }
}

/// Render the paste-a-share-link dialog.
pub fn show_open_share_dialog(app: &mut TimelineApp, ctx: &Context) {
    let mut should_close = false;
    Window::new(RichText::new("Open Share Link").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([380.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(
                RichText::new("Paste a share link or its data value:")
                    .color(theme::TEXT_SECONDARY),
            );
            ui.add_sized(
                [360.0, 48.0],
                egui::TextEdit::multiline(&mut app.open_share_dialog.input),
            );
            if let Some(error) = &app.open_share_dialog.error {
                ui.add_space(2.0);
                ui.label(RichText::new(error).color(Color32::from_rgb(240, 100, 100)));
            }
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let load_btn = egui::Button::new(RichText::new("Load").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 26.0], load_btn).clicked() {
                    should_close = app.open_share_link();
                }
                if ui.add_sized([80.0, 26.0], egui::Button::new("Cancel")).clicked() {
                    should_close = true;
                }
            });
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.open_share_dialog.open = false;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut TimelineApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([260.0, 150.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Neo-Timeline").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("A calendar and timeline scheduler");
                ui.label("built with Rust and egui.");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
