use std::path::PathBuf;

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::config::Preferences;
use crate::interact::{DragController, ResizeController, Slot};
use crate::io::{self, snapshot, SharePayload, Snapshot, SnapshotStore};
use crate::model::{Event, EventDraft, EventPatch, ProjectPatch, Store, ViewState};
use crate::ui;

/// State of the event editor window.
pub struct EventDialogState {
    pub open: bool,
    /// `None` while creating, the event id while editing.
    pub event_id: Option<String>,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub start_hour: u32,
    pub end_date: NaiveDate,
    pub end_hour: u32,
    /// Minute offsets are not editable in the dialog but must survive a
    /// round trip, or editing a title would snap drag-preserved times.
    pub(crate) start_minute: u32,
    pub(crate) end_minute: u32,
    pub all_day: bool,
    pub project_id: String,
}

impl EventDialogState {
    fn closed() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            open: false,
            event_id: None,
            title: String::new(),
            description: String::new(),
            start_date: today,
            start_hour: 9,
            end_date: today,
            end_hour: 10,
            start_minute: 0,
            end_minute: 0,
            all_day: false,
            project_id: crate::model::FALLBACK_PROJECT_ID.to_string(),
        }
    }

    fn for_create(slot: Slot) -> Self {
        let mut dialog = Self::closed();
        dialog.open = true;
        dialog.start_date = slot.date;
        dialog.end_date = slot.date;
        if let Some(hour) = slot.hour {
            dialog.start_hour = hour;
            dialog.end_hour = (hour + 1).min(24);
        }
        dialog
    }

    fn for_edit(event: &Event) -> Self {
        Self {
            open: true,
            event_id: Some(event.id.clone()),
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            start_date: event.start.date(),
            start_hour: event.start.hour(),
            end_date: event.end.date(),
            end_hour: event.end.hour(),
            start_minute: event.start.minute(),
            end_minute: event.end.minute(),
            all_day: event.all_day,
            project_id: event.project_id.clone(),
        }
    }

    /// The `[start, end)` range the dialog currently describes.
    fn resolve_times(&self) -> (NaiveDateTime, NaiveDateTime) {
        if self.all_day {
            // All-day events span whole days, half-open at the next midnight.
            (
                day_start(self.start_date),
                day_start(self.end_date + Duration::days(1)),
            )
        } else {
            (
                hour_on(self.start_date, self.start_hour, self.start_minute),
                hour_on(self.end_date, self.end_hour, self.end_minute),
            )
        }
    }
}

/// State of the project editor window.
#[derive(Default)]
pub struct ProjectDialogState {
    pub open: bool,
    pub project_id: Option<String>,
    pub name: String,
    pub color: String,
}

#[derive(Default)]
pub struct ShareDialogState {
    pub open: bool,
    pub url: String,
}

#[derive(Default)]
pub struct OpenShareDialogState {
    pub open: bool,
    pub input: String,
    pub error: Option<String>,
}

/// Main application state.
pub struct TimelineApp {
    pub store: Store,
    pub view: ViewState,
    pub prefs: Preferences,
    pub drag: DragController,
    pub resize: ResizeController,
    /// Set after loading a share link; all mutation paths are disabled.
    pub read_only: bool,

    pub file_path: Option<PathBuf>,
    persist: Option<io::DirSnapshotStore>,
    identity: String,
    renderer: Box<dyn io::DocumentRenderer>,

    // Dialog state
    pub show_about: bool,
    pub event_dialog: EventDialogState,
    pub project_dialog: ProjectDialogState,
    pub share_dialog: ShareDialogState,
    pub open_share_dialog: OpenShareDialogState,

    pub status_message: String,
}

impl TimelineApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let prefs = Preferences::load();
        let persist = io::DirSnapshotStore::new();
        let identity = "anonymous".to_string();

        let mut store = Store::new();
        match persist.as_ref().map(|p| p.load(&identity)) {
            Some(Ok(Some(snapshot))) => {
                store.replace(snapshot.projects, snapshot.events);
            }
            Some(Err(e)) => {
                log::warn!("ignoring unreadable saved timeline: {}", e);
                Self::seed_sample_data(&mut store);
            }
            _ => Self::seed_sample_data(&mut store),
        }

        Self {
            store,
            view: ViewState::new(chrono::Local::now().date_naive()),
            prefs,
            drag: DragController::new(),
            resize: ResizeController::new(),
            read_only: false,
            file_path: None,
            persist,
            identity,
            renderer: Box::new(io::TextAgendaRenderer),
            show_about: false,
            event_dialog: EventDialogState::closed(),
            project_dialog: ProjectDialogState::default(),
            share_dialog: ShareDialogState::default(),
            open_share_dialog: OpenShareDialogState::default(),
            status_message: "Ready".to_string(),
        }
    }

    /// Populate a first-launch store with a small demo timeline.
    fn seed_sample_data(store: &mut Store) {
        let design = store.create_project("Design", ui::theme::project_color(0));
        let engineering = store.create_project("Engineering", ui::theme::project_color(1));
        let today = chrono::Local::now().date_naive();
        let at = |date: NaiveDate, hour: u32| -> NaiveDateTime { hour_on(date, hour, 0) };

        let mut kickoff = EventDraft::new("Kickoff", at(today, 9), at(today, 10));
        kickoff.description = Some("Opening meeting".to_string());
        kickoff.project_id = Some(design.id.clone());
        let kickoff = match store.create_event(kickoff) {
            Ok(e) => e,
            Err(_) => return,
        };

        let mut notes = EventDraft::new("Kickoff notes", at(today, 10), at(today, 11));
        notes.project_id = Some(design.id.clone());
        notes.parent_event_id = Some(kickoff.id);
        notes.is_sub_event = true;
        let _ = store.create_event(notes);

        let mut review = EventDraft::new(
            "Sprint review",
            at(today + Duration::days(2), 14),
            at(today + Duration::days(2), 15),
        );
        review.project_id = Some(engineering.id);
        let _ = store.create_event(review);

        let mut offsite = EventDraft::new(
            "Team offsite",
            at(today + Duration::days(7), 0),
            at(today + Duration::days(8), 0),
        );
        offsite.all_day = true;
        offsite.project_id = Some(design.id);
        let _ = store.create_event(offsite);
    }

    fn current_snapshot(&self) -> Snapshot {
        Snapshot {
            projects: self.store.projects().to_vec(),
            events: self.store.events().to_vec(),
        }
    }

    /// Opportunistic local save after every mutation. Failures are
    /// surfaced in the status bar but never block or roll back.
    fn after_mutation(&mut self) {
        if self.read_only {
            return;
        }
        let Some(persist) = &self.persist else {
            return;
        };
        if let Err(e) = persist.save(&self.identity, &self.current_snapshot()) {
            log::warn!("background save failed: {}", e);
            self.status_message = format!("Warning: background save failed ({})", e);
        }
    }

    // --- File operations ---

    pub fn new_snapshot(&mut self) {
        self.store = Store::new();
        self.file_path = None;
        self.read_only = false;
        self.status_message = "New timeline created".to_string();
        self.after_mutation();
    }

    pub fn open_snapshot(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Timeline Snapshot", &["json"])
            .pick_file()
        {
            match io::load_snapshot(&path) {
                Ok(snapshot) => {
                    self.store.replace(snapshot.projects, snapshot.events);
                    self.file_path = Some(path);
                    self.read_only = false;
                    self.status_message = "Timeline loaded".to_string();
                    self.after_mutation();
                }
                Err(e) => {
                    self.status_message = format!("Error loading: {}", e);
                }
            }
        }
    }

    pub fn save_snapshot(&mut self) {
        if let Some(path) = self.file_path.clone() {
            match io::save_snapshot(&self.current_snapshot(), &path) {
                Ok(()) => self.status_message = "Timeline saved".to_string(),
                Err(e) => self.status_message = format!("Error saving: {}", e),
            }
        } else {
            self.save_snapshot_as();
        }
    }

    pub fn save_snapshot_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Timeline Snapshot", &["json"])
            .set_file_name("timeline.json")
            .save_file()
        {
            match io::save_snapshot(&self.current_snapshot(), &path) {
                Ok(()) => {
                    self.file_path = Some(path);
                    self.status_message = "Timeline saved".to_string();
                }
                Err(e) => self.status_message = format!("Error saving: {}", e),
            }
        }
    }

    pub fn export_csv(&mut self) {
        if self.store.events().is_empty() {
            self.status_message = "Nothing to export — timeline has no events".to_string();
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("timeline.csv")
            .save_file()
        {
            match io::csv_export::export_csv(&self.store, &path) {
                Ok(count) => {
                    self.status_message = format!("Exported {} events to CSV", count);
                }
                Err(e) => {
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }

    pub fn export_agenda(&mut self) {
        if self.store.events().is_empty() {
            self.status_message = "Nothing to export — timeline has no events".to_string();
            return;
        }
        let visible_ids: Vec<String> = self
            .store
            .projects()
            .iter()
            .filter(|p| self.view.is_project_visible(p))
            .map(|p| p.id.clone())
            .collect();
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Text Files", &["txt"])
            .set_file_name("agenda.txt")
            .save_file()
        {
            let result = self
                .renderer
                .render(self.store.projects(), self.store.events(), &visible_ids)
                .and_then(|bytes| std::fs::write(&path, bytes).map_err(Into::into));
            match result {
                Ok(()) => self.status_message = "Agenda exported".to_string(),
                Err(e) => self.status_message = format!("Agenda export failed: {}", e),
            }
        }
    }

    // --- Share links ---

    pub fn make_share_link(&mut self) {
        let payload = SharePayload {
            snapshot: self.current_snapshot(),
            theme: self.prefs.gradient_theme.clone(),
            show_holidays: self.prefs.show_holidays,
        };
        match snapshot::encode_share(&payload) {
            Ok(data) => {
                self.share_dialog.url =
                    format!("https://neotimeline.example/view?data={}", data);
                self.share_dialog.open = true;
            }
            Err(e) => {
                self.status_message = format!("Could not build share link: {}", e);
            }
        }
    }

    /// Decode the pasted share link. Returns true when the dialog should
    /// close; a bad payload leaves the current state untouched.
    pub fn open_share_link(&mut self) -> bool {
        let data = snapshot::extract_share_data(&self.open_share_dialog.input);
        match snapshot::decode_share(data) {
            Ok(payload) => {
                self.store
                    .replace(payload.snapshot.projects, payload.snapshot.events);
                self.prefs.gradient_theme = payload.theme;
                self.prefs.show_holidays = payload.show_holidays;
                self.read_only = true;
                self.file_path = None;
                self.view.clear_visibility_filter();
                self.view.selected_project_id = None;
                self.status_message = "Opened shared timeline (read-only)".to_string();
                self.open_share_dialog.error = None;
                true
            }
            Err(e) => {
                self.open_share_dialog.error = Some(e.to_string());
                false
            }
        }
    }

    // --- Event dialog ---

    pub fn open_event_dialog_for_create(&mut self, slot: Slot) {
        self.event_dialog = EventDialogState::for_create(slot);
    }

    pub fn open_event_dialog_for_edit(&mut self, event_id: &str) {
        let Some(event) = self.store.event(event_id) else {
            return;
        };
        self.event_dialog = EventDialogState::for_edit(event);
    }

    /// Apply the event dialog. Returns true when the dialog should close;
    /// validation failures keep it open with the error in the status bar.
    pub fn submit_event_dialog(&mut self) -> bool {
        let dialog = &self.event_dialog;
        let title = if dialog.title.trim().is_empty() {
            "Untitled event".to_string()
        } else {
            dialog.title.trim().to_string()
        };
        let description = if dialog.description.trim().is_empty() {
            None
        } else {
            Some(dialog.description.clone())
        };
        let (start, end) = dialog.resolve_times();

        let result = match dialog.event_id.clone() {
            Some(id) => self
                .store
                .update_event(
                    &id,
                    EventPatch {
                        title: Some(title),
                        description: Some(description),
                        start: Some(start),
                        end: Some(end),
                        all_day: Some(dialog.all_day),
                        project_id: Some(dialog.project_id.clone()),
                        color: None,
                    },
                )
                .map(|_| "Event updated"),
            None => {
                let mut draft = EventDraft::new(title, start, end);
                draft.description = description;
                draft.all_day = dialog.all_day;
                draft.project_id = Some(dialog.project_id.clone());
                self.store.create_event(draft).map(|_| "Event created")
            }
        };

        match result {
            Ok(message) => {
                self.status_message = message.to_string();
                self.after_mutation();
                true
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
                false
            }
        }
    }

    pub fn delete_event_from_dialog(&mut self) {
        if let Some(id) = self.event_dialog.event_id.clone() {
            match self.store.delete_event(&id) {
                Ok(()) => {
                    self.status_message = "Event deleted".to_string();
                    self.after_mutation();
                }
                Err(e) => self.status_message = format!("Error: {}", e),
            }
        }
    }

    // --- Project dialog ---

    pub fn open_project_dialog_for_create(&mut self) {
        self.project_dialog = ProjectDialogState {
            open: true,
            project_id: None,
            name: String::new(),
            color: ui::theme::project_color(self.store.projects().len()).to_string(),
        };
    }

    pub fn open_project_dialog_for_edit(&mut self, project_id: &str) {
        let Some(project) = self.store.project(project_id) else {
            return;
        };
        self.project_dialog = ProjectDialogState {
            open: true,
            project_id: Some(project.id.clone()),
            name: project.name.clone(),
            color: project.color.clone(),
        };
    }

    pub fn submit_project_dialog(&mut self) {
        let name = if self.project_dialog.name.trim().is_empty() {
            "Untitled project".to_string()
        } else {
            self.project_dialog.name.trim().to_string()
        };
        let color = self.project_dialog.color.clone();
        match self.project_dialog.project_id.clone() {
            Some(id) => match self.store.update_project(
                &id,
                ProjectPatch {
                    name: Some(name),
                    color: Some(color),
                    visible: None,
                },
            ) {
                Ok(_) => self.status_message = "Project updated".to_string(),
                Err(e) => self.status_message = format!("Error: {}", e),
            },
            None => {
                self.store.create_project(name, color);
                self.status_message = "Project created".to_string();
            }
        }
        self.after_mutation();
    }

    // --- Interaction plumbing ---

    fn apply_calendar_interaction(&mut self, interaction: ui::calendar::CalendarInteraction) {
        if let Some(commit) = interaction.drag_commit {
            if !self.read_only {
                match self.store.update_event(
                    &commit.event_id,
                    EventPatch {
                        start: Some(commit.new_start),
                        end: Some(commit.new_end),
                        ..Default::default()
                    },
                ) {
                    Ok(event) => {
                        self.status_message = format!(
                            "Moved '{}' to {}",
                            event.title,
                            event.start.format("%Y-%m-%d %H:%M")
                        );
                        self.after_mutation();
                    }
                    Err(e) => self.status_message = format!("Error: {}", e),
                }
            }
        }
        if let Some(commit) = interaction.resize_commit {
            if !self.read_only {
                match self.store.update_event(
                    &commit.event_id,
                    EventPatch {
                        end: Some(commit.new_end),
                        ..Default::default()
                    },
                ) {
                    Ok(event) => {
                        self.status_message = format!(
                            "Resized '{}' to end {}",
                            event.title,
                            event.end.format("%H:%M")
                        );
                        self.after_mutation();
                    }
                    Err(e) => self.status_message = format!("Error: {}", e),
                }
            }
        }
        if let Some(event_id) = interaction.open_event {
            if self.read_only {
                // Shared snapshots are inspectable, not editable.
                self.status_message = "This timeline is read-only".to_string();
            } else {
                self.open_event_dialog_for_edit(&event_id);
            }
        }
        if let Some(slot) = interaction.create_at {
            if !self.read_only {
                self.open_event_dialog_for_create(slot);
            }
        }
        if let Some(date) = interaction.navigate_to {
            self.view.set_anchor_date(date);
        }
    }

    fn apply_sidebar_interaction(&mut self, interaction: ui::sidebar::SidebarInteraction) {
        if let Some(id) = interaction.toggle_visible {
            self.view.toggle_project_visibility(
                &id,
                self.store.projects().iter().map(|p| p.id.as_str()),
            );
        }
        if let Some(id) = interaction.focus {
            self.view.focus_project(&id);
        }
        if let Some(id) = interaction.edit_project {
            self.open_project_dialog_for_edit(&id);
        }
        if let Some(id) = interaction.delete_project {
            match self.store.delete_project(&id) {
                Ok(()) => {
                    self.status_message = "Project deleted".to_string();
                    self.after_mutation();
                }
                Err(e) => self.status_message = format!("Error: {}", e),
            }
        }
        if interaction.new_project {
            self.open_project_dialog_for_create();
        }
        if let Some(show) = interaction.show_holidays {
            self.prefs.show_holidays = show;
            self.prefs.save();
        }
        if let Some(name) = interaction.gradient {
            self.prefs.gradient_theme = name;
            self.prefs.save();
        }
    }
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Handle keyboard shortcuts outside closures to avoid borrow issues
        let should_save = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::S));
        if should_save && !self.read_only {
            self.save_snapshot();
        }

        // Escape abandons an in-flight gesture without touching the store.
        let dialog_open = self.event_dialog.open
            || self.project_dialog.open
            || self.share_dialog.open
            || self.open_share_dialog.open
            || self.show_about;
        if !dialog_open && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.drag.cancel();
            self.resize.cancel();
        }
        // A gesture cannot outlive the pointer press that started it. If
        // the press vanished without a release event (focus loss), drop it.
        let (pointer_down, pointer_released) =
            ctx.input(|i| (i.pointer.any_down(), i.pointer.any_released()));
        if !pointer_down
            && !pointer_released
            && (self.drag.is_dragging() || self.resize.is_resizing())
        {
            self.drag.cancel();
            self.resize.cancel();
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_sub())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Events: {}", self.store.events().len()))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                        ui.label(
                            egui::RichText::new(" · ").size(10.5).color(ui::theme::TEXT_DIM),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "Projects: {}",
                                self.store.projects().len()
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: project sidebar
        let mut sidebar_interaction = ui::sidebar::SidebarInteraction::default();
        egui::SidePanel::left("project_panel")
            .default_width(190.0)
            .min_width(150.0)
            .max_width(320.0)
            .resizable(true)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(8.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                sidebar_interaction = ui::sidebar::show_sidebar(
                    &self.store,
                    &self.view,
                    &self.prefs,
                    self.read_only,
                    ui,
                );
            });
        self.apply_sidebar_interaction(sidebar_interaction);

        // Central panel: the calendar, over the gradient background
        let mut calendar_interaction = ui::calendar::CalendarInteraction::default();
        let frame = egui::Frame::default().inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let gradient = ui::theme::gradient_by_name(&self.prefs.gradient_theme);
            ui::theme::paint_gradient(ui.painter(), ui.max_rect(), gradient);
            calendar_interaction = ui::calendar::show_calendar(
                &self.store,
                &self.view,
                &mut self.drag,
                &mut self.resize,
                self.prefs.show_holidays,
                self.read_only,
                ui,
            );
        });
        self.apply_calendar_interaction(calendar_interaction);

        // Dialogs
        if self.event_dialog.open {
            ui::dialogs::show_event_dialog(self, ctx);
        }
        if self.project_dialog.open {
            ui::dialogs::show_project_dialog(self, ctx);
        }
        if self.share_dialog.open {
            ui::dialogs::show_share_dialog(self, ctx);
        }
        if self.open_share_dialog.open {
            ui::dialogs::show_open_share_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is valid")
}

/// Dialog hours range over 0..=24; 24 means midnight of the next day.
fn hour_on(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    if hour >= 24 {
        day_start(date + Duration::days(1))
    } else {
        date.and_hms_opt(hour, minute.min(59), 0)
            .unwrap_or_else(|| day_start(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event_between(start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event {
            id: "evt-1".to_string(),
            title: "Standup".to_string(),
            description: None,
            start,
            end,
            color: "#3b82f6".to_string(),
            all_day: false,
            project_id: crate::model::FALLBACK_PROJECT_ID.to_string(),
            parent_event_id: None,
            is_sub_event: false,
        }
    }

    #[test]
    fn editor_round_trip_keeps_minute_offsets() {
        // Opening the editor and saving without touching the time fields
        // must not snap a 9:30-10:45 event to whole hours.
        let event = event_between(
            date(2025, 3, 10).and_hms_opt(9, 30, 0).unwrap(),
            date(2025, 3, 10).and_hms_opt(10, 45, 0).unwrap(),
        );
        let dialog = EventDialogState::for_edit(&event);
        assert_eq!(dialog.resolve_times(), (event.start, event.end));
    }

    #[test]
    fn editor_rebuilds_all_day_events_as_midnight_spans() {
        let mut event = event_between(
            date(2025, 3, 12).and_hms_opt(0, 0, 0).unwrap(),
            date(2025, 3, 13).and_hms_opt(0, 0, 0).unwrap(),
        );
        event.all_day = true;
        let dialog = EventDialogState::for_edit(&event);
        assert_eq!(dialog.resolve_times(), (event.start, event.end));
    }

    #[test]
    fn hour_slot_create_defaults_to_a_one_hour_range() {
        let dialog = EventDialogState::for_create(Slot::hour(date(2025, 3, 10), 23));
        let (start, end) = dialog.resolve_times();
        assert_eq!(start, date(2025, 3, 10).and_hms_opt(23, 0, 0).unwrap());
        assert_eq!(end, date(2025, 3, 11).and_hms_opt(0, 0, 0).unwrap());
    }
}
