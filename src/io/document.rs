use crate::model::{Event, Project};

use super::snapshot::SnapshotError;

/// External document-export collaborator (PDF or similar). The app hands
/// it the projects, the events, and the ids the current filter keeps
/// visible; layout is entirely the renderer's business.
pub trait DocumentRenderer {
    fn render(
        &self,
        projects: &[Project],
        events: &[Event],
        visible_project_ids: &[String],
    ) -> Result<Vec<u8>, SnapshotError>;
}

/// Built-in renderer: a chronological plain-text agenda, one line per
/// event, grouped under date headers.
pub struct TextAgendaRenderer;

impl DocumentRenderer for TextAgendaRenderer {
    fn render(
        &self,
        projects: &[Project],
        events: &[Event],
        visible_project_ids: &[String],
    ) -> Result<Vec<u8>, SnapshotError> {
        let mut visible: Vec<&Event> = events
            .iter()
            .filter(|e| visible_project_ids.iter().any(|id| *id == e.project_id))
            .collect();
        visible.sort_by_key(|e| e.start);

        let mut out = String::new();
        let mut current_day = None;
        for event in visible {
            let day = event.start.date();
            if current_day != Some(day) {
                if current_day.is_some() {
                    out.push('\n');
                }
                out.push_str(&day.format("%A, %B %-d, %Y").to_string());
                out.push('\n');
                current_day = Some(day);
            }
            let project = projects
                .iter()
                .find(|p| p.id == event.project_id)
                .map(|p| p.name.as_str())
                .unwrap_or("");
            if event.all_day {
                out.push_str(&format!("  all day      {} [{}]\n", event.title, project));
            } else {
                out.push_str(&format!(
                    "  {} - {}  {} [{}]\n",
                    event.start.format("%H:%M"),
                    event.end.format("%H:%M"),
                    event.title,
                    project
                ));
            }
            if let Some(description) = &event.description {
                out.push_str(&format!("               {}\n", description));
            }
        }
        Ok(out.into_bytes())
    }
}
