use chrono::NaiveDateTime;
use uuid::Uuid;

use super::error::{StoreError, StoreResult};
use super::event::{Event, EventDraft, EventPatch};
use super::project::{Project, ProjectPatch, FALLBACK_PROJECT_ID};

/// Authoritative in-memory collection of events and projects for the
/// current session. Persistence lives behind `io::persist`; the store
/// itself never touches a storage medium.
#[derive(Debug, Clone)]
pub struct Store {
    projects: Vec<Project>,
    events: Vec<Event>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            projects: vec![Project::fallback()],
            events: Vec::new(),
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Replace the whole collection, e.g. after a snapshot import. The
    /// fallback project is re-inserted if the payload lacks one, and
    /// events pointing at unknown projects are re-attached to it.
    pub fn replace(&mut self, mut projects: Vec<Project>, mut events: Vec<Event>) {
        if !projects.iter().any(|p| p.id == FALLBACK_PROJECT_ID) {
            projects.insert(0, Project::fallback());
        }
        for event in &mut events {
            if !projects.iter().any(|p| p.id == event.project_id) {
                event.project_id = FALLBACK_PROJECT_ID.to_string();
            }
        }
        self.projects = projects;
        self.events = events;
    }

    // ── Events ──────────────────────────────────────────────────

    pub fn create_event(&mut self, draft: EventDraft) -> StoreResult<Event> {
        if draft.end <= draft.start {
            return Err(StoreError::InvalidRange);
        }
        let project_id = draft
            .project_id
            .filter(|id| self.project(id).is_some())
            .unwrap_or_else(|| FALLBACK_PROJECT_ID.to_string());
        let color = draft.color.unwrap_or_else(|| {
            self.project(&project_id)
                .map(|p| p.color.clone())
                .unwrap_or_else(|| Project::fallback().color)
        });
        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            start: draft.start,
            end: draft.end,
            color,
            all_day: draft.all_day,
            project_id,
            parent_event_id: draft.parent_event_id,
            is_sub_event: draft.is_sub_event,
        };
        self.events.push(event.clone());
        Ok(event)
    }

    pub fn update_event(&mut self, id: &str, patch: EventPatch) -> StoreResult<Event> {
        // A patched project id must resolve; unlike create there is no
        // silent fallback, the caller named a specific project.
        let project_color = match patch.project_id.as_deref() {
            Some(pid) => Some(
                self.project(pid)
                    .ok_or_else(|| StoreError::NotFound(pid.to_string()))?
                    .color
                    .clone(),
            ),
            None => None,
        };
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let start = patch.start.unwrap_or(event.start);
        let end = patch.end.unwrap_or(event.end);
        if end <= start {
            return Err(StoreError::InvalidRange);
        }

        if let Some(title) = patch.title {
            event.title = title;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        event.start = start;
        event.end = end;
        if let Some(all_day) = patch.all_day {
            event.all_day = all_day;
        }
        if let Some(project_id) = patch.project_id {
            event.project_id = project_id;
            // Moving projects re-colors the event unless the patch says otherwise.
            if patch.color.is_none() {
                if let Some(color) = project_color {
                    event.color = color;
                }
            }
        }
        if let Some(color) = patch.color {
            event.color = color;
        }
        Ok(event.clone())
    }

    pub fn delete_event(&mut self, id: &str) -> StoreResult<()> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Events whose `[start, end)` intersects the half-open query window,
    /// in stable insertion order.
    pub fn events_in_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.intersects(start, end))
            .collect()
    }

    // ── Projects ────────────────────────────────────────────────

    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Project {
        let project = Project::new(name, color);
        self.projects.push(project.clone());
        project
    }

    /// Apply a partial update. A color change cascades onto every event
    /// of the project.
    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> StoreResult<Project> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            project.name = name;
        }
        if let Some(visible) = patch.visible {
            project.visible = visible;
        }
        let recolor = patch.color.filter(|c| *c != project.color);
        if let Some(ref color) = recolor {
            project.color = color.clone();
        }
        let project = project.clone();
        if let Some(color) = recolor {
            for event in self.events.iter_mut().filter(|e| e.project_id == id) {
                event.color = color.clone();
            }
        }
        Ok(project)
    }

    /// Delete a project. Its events are not deleted; they are re-attached
    /// to the fallback project. Deleting the fallback itself is refused.
    pub fn delete_project(&mut self, id: &str) -> StoreResult<()> {
        if id == FALLBACK_PROJECT_ID {
            return Err(StoreError::InvalidOperation(
                "the default project cannot be deleted".to_string(),
            ));
        }
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let fallback_color = Project::fallback().color;
        let color = self
            .project(FALLBACK_PROJECT_ID)
            .map(|p| p.color.clone())
            .unwrap_or(fallback_color);
        for event in self.events.iter_mut().filter(|e| e.project_id == id) {
            event.project_id = FALLBACK_PROJECT_ID.to_string();
            event.color = color.clone();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn dt(y: i32, mo: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn create_event_rejects_inverted_range() {
        let mut store = Store::new();
        let draft = EventDraft::new("Broken", dt(2025, 3, 10, 10), dt(2025, 3, 10, 9));
        assert_eq!(store.create_event(draft), Err(StoreError::InvalidRange));
        assert!(store.events().is_empty());
    }

    #[test]
    fn create_event_defaults_project_and_color() {
        let mut store = Store::new();
        let event = store
            .create_event(EventDraft::new("Kickoff", dt(2025, 3, 10, 9), dt(2025, 3, 10, 10)))
            .unwrap();
        assert_eq!(event.project_id, FALLBACK_PROJECT_ID);
        assert_eq!(event.color, Project::fallback().color);
    }

    #[test]
    fn create_event_inherits_project_color() {
        let mut store = Store::new();
        let project = store.create_project("Studio A", "#3b82f6");
        let mut draft = EventDraft::new("Shoot", dt(2025, 3, 10, 9), dt(2025, 3, 10, 10));
        draft.project_id = Some(project.id.clone());
        let event = store.create_event(draft).unwrap();
        assert_eq!(event.color, "#3b82f6");
    }

    #[test]
    fn update_event_revalidates_merged_range() {
        let mut store = Store::new();
        let event = store
            .create_event(EventDraft::new("Kickoff", dt(2025, 3, 10, 9), dt(2025, 3, 10, 10)))
            .unwrap();
        let patch = EventPatch {
            end: Some(dt(2025, 3, 10, 8)),
            ..Default::default()
        };
        assert_eq!(
            store.update_event(&event.id, patch),
            Err(StoreError::InvalidRange)
        );
        // Store untouched after the rejected update.
        assert_eq!(store.event(&event.id).unwrap().end, dt(2025, 3, 10, 10));
    }

    #[test]
    fn update_event_unknown_id_is_not_found() {
        let mut store = Store::new();
        assert_eq!(
            store.update_event("missing", EventPatch::default()),
            Err(StoreError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn update_event_rejects_unknown_project_id() {
        let mut store = Store::new();
        let project = store.create_project("Studio A", "#3b82f6");
        let mut draft = EventDraft::new("Shoot", dt(2025, 3, 10, 9), dt(2025, 3, 10, 10));
        draft.project_id = Some(project.id.clone());
        let event = store.create_event(draft).unwrap();

        // The project disappears while an editor still holds its id.
        store.delete_project(&project.id).unwrap();
        let patch = EventPatch {
            project_id: Some(project.id.clone()),
            ..Default::default()
        };
        assert_eq!(
            store.update_event(&event.id, patch),
            Err(StoreError::NotFound(project.id))
        );
        // The event still points at a project that exists.
        let stored = store.event(&event.id).unwrap();
        assert!(store.project(&stored.project_id).is_some());
    }

    #[test]
    fn delete_event_is_not_silently_idempotent() {
        let mut store = Store::new();
        let event = store
            .create_event(EventDraft::new("Kickoff", dt(2025, 3, 10, 9), dt(2025, 3, 10, 10)))
            .unwrap();
        assert_eq!(store.delete_event(&event.id), Ok(()));
        assert_eq!(
            store.delete_event(&event.id),
            Err(StoreError::NotFound(event.id))
        );
    }

    #[test]
    fn events_in_range_uses_half_open_intersection() {
        let mut store = Store::new();
        store
            .create_event(EventDraft::new("A", dt(2025, 3, 10, 9), dt(2025, 3, 10, 10)))
            .unwrap();
        store
            .create_event(EventDraft::new("B", dt(2025, 3, 10, 10), dt(2025, 3, 10, 11)))
            .unwrap();

        let hits = store.events_in_range(dt(2025, 3, 10, 9), dt(2025, 3, 10, 10));
        let titles: Vec<_> = hits.iter().map(|e| e.title.as_str()).collect();
        // B starts exactly at the window end and must not match.
        assert_eq!(titles, vec!["A"]);
    }

    #[test]
    fn project_color_change_cascades_to_events() {
        let mut store = Store::new();
        let project = store.create_project("Studio A", "#3b82f6");
        let mut draft = EventDraft::new("Shoot", dt(2025, 3, 10, 9), dt(2025, 3, 10, 10));
        draft.project_id = Some(project.id.clone());
        let event = store.create_event(draft).unwrap();

        store
            .update_project(
                &project.id,
                ProjectPatch {
                    color: Some("#ef4444".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.event(&event.id).unwrap().color, "#ef4444");
    }

    #[test]
    fn delete_project_reparents_orphans_to_fallback() {
        let mut store = Store::new();
        let project = store.create_project("Studio A", "#3b82f6");
        let mut draft = EventDraft::new("Shoot", dt(2025, 3, 10, 9), dt(2025, 3, 10, 10));
        draft.project_id = Some(project.id.clone());
        let event = store.create_event(draft).unwrap();

        store.delete_project(&project.id).unwrap();
        assert_eq!(store.events().len(), 1);
        assert_eq!(store.event(&event.id).unwrap().project_id, FALLBACK_PROJECT_ID);
    }

    #[test]
    fn delete_fallback_project_is_refused() {
        let mut store = Store::new();
        let err = store.delete_project(FALLBACK_PROJECT_ID).unwrap_err();
        assert!(matches!(err, StoreError::InvalidOperation(_)));
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn replace_restores_fallback_and_reattaches_unknown_projects() {
        let mut store = Store::new();
        let stray = Event {
            id: "e1".to_string(),
            title: "Stray".to_string(),
            description: None,
            start: dt(2025, 3, 10, 9),
            end: dt(2025, 3, 10, 10),
            color: "#ffffff".to_string(),
            all_day: false,
            project_id: "gone".to_string(),
            parent_event_id: None,
            is_sub_event: false,
        };
        store.replace(vec![Project::new("Only", "#123456")], vec![stray]);
        assert!(store.project(FALLBACK_PROJECT_ID).is_some());
        assert_eq!(store.events()[0].project_id, FALLBACK_PROJECT_ID);
    }
}
