use egui::{Color32, RichText, Rounding, Sense, Ui, Vec2};

use crate::config::Preferences;
use crate::model::{Store, ViewState};
use crate::ui::theme;

/// Requests collected from the project sidebar for one frame.
#[derive(Debug, Clone, Default)]
pub struct SidebarInteraction {
    /// Toggle a project's visibility.
    pub toggle_visible: Option<String>,
    /// Toggle single-project focus.
    pub focus: Option<String>,
    /// Open the project editor.
    pub edit_project: Option<String>,
    /// Delete a project.
    pub delete_project: Option<String>,
    pub new_project: bool,
    /// Holiday overlay switch changed.
    pub show_holidays: Option<bool>,
    /// Gradient theme picked.
    pub gradient: Option<String>,
}

/// Render the project sidebar: visibility filter, focus, project CRUD
/// entry points, and the overlay/theme switches.
pub fn show_sidebar(
    store: &Store,
    view: &ViewState,
    prefs: &Preferences,
    read_only: bool,
    ui: &mut Ui,
) -> SidebarInteraction {
    let mut interaction = SidebarInteraction::default();

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Projects").font(theme::font_header()).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if !read_only && ui.small_button("+ New").clicked() {
                interaction.new_project = true;
            }
        });
    });
    ui.add_space(2.0);
    ui.separator();

    for project in store.projects() {
        let focused = view.selected_project_id.as_deref() == Some(project.id.as_str());
        // Checkbox state reflects the session filter when one is
        // materialized, otherwise the project's own flag.
        let mut checked = match &view.visible_project_ids {
            Some(set) => set.contains(&project.id),
            None => project.visible,
        };

        ui.horizontal(|ui| {
            if ui.checkbox(&mut checked, "").changed() && !read_only {
                interaction.toggle_visible = Some(project.id.clone());
            }

            // Color swatch doubles as the edit affordance.
            let (swatch, swatch_response) =
                ui.allocate_exact_size(Vec2::splat(12.0), Sense::click());
            ui.painter().rect_filled(
                swatch,
                Rounding::same(3.0),
                theme::hex_or_accent(&project.color),
            );
            if swatch_response.clicked() && !read_only {
                interaction.edit_project = Some(project.id.clone());
            }

            let name = if focused {
                RichText::new(&project.name).color(theme::ACCENT).strong()
            } else {
                RichText::new(&project.name).color(theme::TEXT_PRIMARY)
            };
            if ui
                .add(egui::Label::new(name).sense(Sense::click()))
                .on_hover_text("Click to focus only this project")
                .clicked()
            {
                interaction.focus = Some(project.id.clone());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !read_only && !project.is_fallback() {
                    let delete = ui
                        .add(egui::Button::new(RichText::new("✕").size(10.0)).frame(false));
                    if delete.on_hover_text("Delete project").clicked() {
                        interaction.delete_project = Some(project.id.clone());
                    }
                }
            });
        });
    }

    ui.add_space(8.0);
    ui.separator();
    ui.label(RichText::new("Overlays").font(theme::font_header()).strong());
    let mut show_holidays = prefs.show_holidays;
    if ui.checkbox(&mut show_holidays, "Holidays").changed() {
        interaction.show_holidays = Some(show_holidays);
    }

    ui.add_space(8.0);
    ui.separator();
    ui.label(RichText::new("Background").font(theme::font_header()).strong());
    for gradient in theme::GRADIENTS {
        let selected = prefs.gradient_theme == gradient.name;
        if ui.radio(selected, gradient.name).clicked() && !selected {
            interaction.gradient = Some(gradient.name.to_string());
        }
    }

    if read_only {
        ui.add_space(12.0);
        ui.label(
            RichText::new("View-only snapshot")
                .color(Color32::from_rgb(240, 180, 90))
                .font(theme::font_sub()),
        );
    }

    interaction
}
