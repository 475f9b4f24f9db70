//! End-to-end flows through the state layer: store mutations driven by
//! the gesture controllers, and the share-link codec applied back into a
//! fresh store.

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

use neo_timeline::interact::{DragController, ResizeController, Slot, PIXELS_PER_HOUR};
use neo_timeline::io::snapshot::{self, SharePayload, Snapshot, SnapshotError};
use neo_timeline::model::{
    EventDraft, EventPatch, NavDirection, Store, ViewMode, ViewState, FALLBACK_PROJECT_ID,
};

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

#[test]
fn drag_to_hour_slot_flows_through_the_store() {
    let mut store = Store::new();
    let project = store.create_project("Studio A", "#3b82f6");

    let mut draft = EventDraft::new("Kickoff", dt(2025, 3, 10, 9, 0), dt(2025, 3, 10, 10, 0));
    draft.project_id = Some(project.id.clone());
    let kickoff = store.create_event(draft).unwrap();
    assert_eq!(kickoff.color, "#3b82f6");

    let mut drag = DragController::new();
    drag.begin(store.event(&kickoff.id).unwrap());
    drag.hover(Some(Slot::hour(
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
        14,
    )));
    let commit = drag.release().unwrap();
    let updated = store
        .update_event(
            &commit.event_id,
            EventPatch {
                start: Some(commit.new_start),
                end: Some(commit.new_end),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.start, dt(2025, 3, 12, 14, 0));
    assert_eq!(updated.end, dt(2025, 3, 12, 15, 0));
    // The drag never touched anything but the times.
    assert_eq!(updated.project_id, project.id);
    assert_eq!(updated.title, "Kickoff");
}

#[test]
fn drag_to_month_cell_keeps_time_of_day() {
    let mut store = Store::new();
    let event = store
        .create_event(EventDraft::new(
            "Standup",
            dt(2025, 3, 10, 9, 30),
            dt(2025, 3, 10, 9, 45),
        ))
        .unwrap();

    let mut drag = DragController::new();
    drag.begin(store.event(&event.id).unwrap());
    drag.hover(Some(Slot::day(NaiveDate::from_ymd_opt(2025, 3, 24).unwrap())));
    let commit = drag.release().unwrap();
    store
        .update_event(
            &commit.event_id,
            EventPatch {
                start: Some(commit.new_start),
                end: Some(commit.new_end),
                ..Default::default()
            },
        )
        .unwrap();

    let moved = store.event(&event.id).unwrap();
    assert_eq!(moved.start, dt(2025, 3, 24, 9, 30));
    assert_eq!(moved.end, dt(2025, 3, 24, 9, 45));
}

#[test]
fn resize_commit_applies_and_clamp_holds_the_floor() {
    let mut store = Store::new();
    let event = store
        .create_event(EventDraft::new(
            "Workshop",
            dt(2025, 3, 10, 9, 0),
            dt(2025, 3, 10, 12, 0),
        ))
        .unwrap();

    // Shrink far past zero; the controller clamps to one hour.
    let mut resize = ResizeController::new();
    resize.begin(store.event(&event.id).unwrap());
    resize.update(-PIXELS_PER_HOUR * 20.0);
    let commit = resize.release().unwrap();
    store
        .update_event(
            &commit.event_id,
            EventPatch {
                end: Some(commit.new_end),
                ..Default::default()
            },
        )
        .unwrap();

    let shrunk = store.event(&event.id).unwrap();
    assert_eq!(shrunk.start, dt(2025, 3, 10, 9, 0));
    assert_eq!(shrunk.end, dt(2025, 3, 10, 10, 0));
}

#[test]
fn share_link_round_trip_restores_state_into_a_fresh_store() {
    let mut store = Store::new();
    let project = store.create_project("Studio A", "#3b82f6");
    let mut draft = EventDraft::new("Kickoff", dt(2025, 3, 10, 9, 0), dt(2025, 3, 10, 10, 0));
    draft.project_id = Some(project.id.clone());
    store.create_event(draft).unwrap();

    let payload = SharePayload {
        snapshot: Snapshot {
            projects: store.projects().to_vec(),
            events: store.events().to_vec(),
        },
        theme: "Ocean".to_string(),
        show_holidays: false,
    };
    let url = format!(
        "https://neotimeline.example/view?data={}",
        snapshot::encode_share(&payload).unwrap()
    );

    let decoded = snapshot::decode_share(snapshot::extract_share_data(&url)).unwrap();
    assert_eq!(decoded.theme, "Ocean");
    assert!(!decoded.show_holidays);

    let mut viewer = Store::new();
    viewer.replace(decoded.snapshot.projects, decoded.snapshot.events);
    assert_eq!(viewer.projects().len(), store.projects().len());
    assert_eq!(viewer.events().to_vec(), store.events().to_vec());
}

#[test]
fn corrupted_share_link_is_rejected_without_side_effects() {
    let mut store = Store::new();
    store
        .create_event(EventDraft::new(
            "Existing",
            dt(2025, 3, 10, 9, 0),
            dt(2025, 3, 10, 10, 0),
        ))
        .unwrap();
    let before_events = store.events().to_vec();

    let data = snapshot::extract_share_data("https://neotimeline.example/view?data=!!corrupt!!");
    let err = snapshot::decode_share(data).unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidPayload(_)));

    // Nothing was applied.
    assert_eq!(store.events().to_vec(), before_events);
}

#[test]
fn month_navigation_and_filtering_compose() {
    let mut store = Store::new();
    let hidden = store.create_project("Hidden", "#ef4444");
    let shown = store.create_project("Shown", "#3b82f6");

    let mut view = ViewState::new(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    view.set_view_mode(ViewMode::Month);
    view.navigate(NavDirection::Next);
    assert_eq!(view.anchor_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());

    view.toggle_project_visibility(
        &hidden.id,
        store.projects().iter().map(|p| p.id.as_str()),
    );
    assert!(!view.is_project_visible(store.project(&hidden.id).unwrap()));
    assert!(view.is_project_visible(store.project(&shown.id).unwrap()));
    assert!(view.is_project_visible(store.project(FALLBACK_PROJECT_ID).unwrap()));

    // Focus wins over the filter in both directions.
    view.focus_project(&hidden.id);
    assert!(view.is_project_visible(store.project(&hidden.id).unwrap()));
    assert!(!view.is_project_visible(store.project(&shown.id).unwrap()));
}
