use chrono::Datelike;
use egui::{Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

use crate::interact::{DragController, Slot};
use crate::model::{grid, holidays, Event, Store, ViewState};
use crate::ui::calendar::CalendarInteraction;
use crate::ui::theme;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MAX_CHIPS_PER_CELL: usize = 3;

/// Render the 6x7 month grid.
pub fn show_month_view(
    store: &Store,
    view: &ViewState,
    drag: &mut DragController,
    show_holidays: bool,
    read_only: bool,
    ui: &mut Ui,
) -> CalendarInteraction {
    let mut interaction = CalendarInteraction::default();
    let today = chrono::Local::now().date_naive();
    let cells = grid::month_cells(view.anchor_date);

    let available = ui.available_size();
    let (response, painter) = ui.allocate_painter(available, Sense::click());
    let origin = response.rect.min;
    let grid_top = origin.y + theme::MONTH_HEADER_HEIGHT;
    let cell_w = response.rect.width() / grid::DAYS_PER_WEEK as f32;
    let cell_h = (response.rect.height() - theme::MONTH_HEADER_HEIGHT) / 6.0;

    // Weekday header row
    for (col, label) in WEEKDAY_LABELS.iter().enumerate() {
        let x = origin.x + col as f32 * cell_w;
        painter.text(
            Pos2::new(x + cell_w / 2.0, origin.y + theme::MONTH_HEADER_HEIGHT / 2.0),
            egui::Align2::CENTER_CENTER,
            *label,
            theme::font_header(),
            theme::TEXT_SECONDARY,
        );
    }

    let cell_rect = |index: usize| -> Rect {
        let col = index % grid::DAYS_PER_WEEK;
        let row = index / grid::DAYS_PER_WEEK;
        Rect::from_min_size(
            Pos2::new(
                origin.x + col as f32 * cell_w,
                grid_top + row as f32 * cell_h,
            ),
            Vec2::new(cell_w, cell_h),
        )
    };

    let pointer = ui.input(|i| i.pointer.interact_pos());
    // The cell currently under the pointer; cells tile the grid without
    // overlap, so a plain scan is the whole hit test.
    let pointer_cell = pointer.and_then(|pos| {
        cells
            .iter()
            .enumerate()
            .find(|(i, _)| cell_rect(*i).contains(pos))
            .map(|(i, c)| (i, *c))
    });

    for (index, cell) in cells.iter().enumerate() {
        let rect = cell_rect(index);

        if cell.outside {
            painter.rect_filled(rect, 0.0, theme::BG_CELL_OUTSIDE);
        }
        let is_drop_target =
            drag.is_dragging() && drag.hover_slot() == Some(Slot::day(cell.date));
        if is_drop_target {
            painter.rect_filled(rect, 0.0, theme::BG_DROP_TARGET);
        } else if pointer_cell.map(|(i, _)| i) == Some(index) {
            painter.rect_filled(rect, 0.0, theme::BG_CELL_HOVER);
        }
        painter.rect_stroke(rect, 0.0, Stroke::new(0.5, theme::GRID_LINE));

        // Day number, ringed when it is today.
        let number_pos = Pos2::new(rect.left() + 12.0, rect.top() + 11.0);
        if grid::is_today(cell.date, today) {
            painter.circle_stroke(number_pos, 9.0, Stroke::new(1.5, theme::TODAY_RING));
        }
        let number_color = if cell.outside {
            theme::TEXT_DIM
        } else {
            theme::TEXT_PRIMARY
        };
        painter.text(
            number_pos,
            egui::Align2::CENTER_CENTER,
            cell.date.day().to_string(),
            theme::font_sub(),
            number_color,
        );

        if show_holidays {
            if let Some(name) = holidays::holiday_on(cell.date) {
                let clipped = painter.with_clip_rect(rect);
                clipped.text(
                    Pos2::new(rect.left() + 24.0, rect.top() + 11.0),
                    egui::Align2::LEFT_CENTER,
                    name,
                    theme::font_small(),
                    theme::HOLIDAY_TEXT,
                );
            }
        }

        // Cell-level interaction: outside cells navigate, inside cells
        // create. Chips are registered afterwards and win overlapping hits.
        let cell_response = ui.interact(
            rect,
            ui.make_persistent_id(("month-cell", index)),
            Sense::click(),
        );
        if cell_response.clicked() && cell.outside {
            interaction.navigate_to = Some(cell.date);
        } else if cell_response.clicked() && !read_only {
            interaction.create_at = Some(Slot::day(cell.date));
        }

        // Event chips
        let day_events = visible_events_on(store, view, cell.date);

        let chip_top = rect.top() + 22.0;
        for (slot_idx, event) in day_events.iter().take(MAX_CHIPS_PER_CELL).enumerate() {
            let chip = Rect::from_min_size(
                Pos2::new(
                    rect.left() + 3.0,
                    chip_top + slot_idx as f32 * (theme::CHIP_HEIGHT + 2.0),
                ),
                Vec2::new(cell_w - 6.0, theme::CHIP_HEIGHT),
            );
            if chip.bottom() > rect.bottom() - 2.0 {
                break;
            }
            draw_chip(&painter, chip, event, drag.dragging_event() == Some(&event.id));

            let sense = if read_only {
                Sense::hover()
            } else {
                Sense::click_and_drag()
            };
            let chip_response = ui.interact(
                chip,
                ui.make_persistent_id(("month-chip", &event.id, cell.date)),
                sense,
            );

            if chip_response.clicked() {
                interaction.open_event = Some(event.id.clone());
            }
            if chip_response.drag_started() {
                drag.begin(event);
            }
            if chip_response.dragged() && drag.dragging_event() == Some(&event.id) {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                drag.hover(pointer_cell.map(|(_, c)| Slot::day(c.date)));
            }
            if chip_response.drag_stopped() && drag.dragging_event() == Some(&event.id) {
                interaction.drag_commit = drag.release();
            }
            if chip_response.hovered() {
                egui::show_tooltip_at_pointer(
                    ui.ctx(),
                    ui.layer_id(),
                    egui::Id::new(("month-chip-tip", &event.id)),
                    |ui| {
                        ui.strong(&event.title);
                        if event.all_day {
                            ui.label("All day");
                        } else {
                            ui.label(format!(
                                "{} – {}",
                                event.start.format("%H:%M"),
                                event.end.format("%H:%M"),
                            ));
                        }
                        if let Some(desc) = &event.description {
                            ui.label(desc);
                        }
                    },
                );
            }
        }
        if day_events.len() > MAX_CHIPS_PER_CELL {
            painter.text(
                Pos2::new(rect.left() + 5.0, rect.bottom() - 9.0),
                egui::Align2::LEFT_CENTER,
                format!("+{} more", day_events.len() - MAX_CHIPS_PER_CELL),
                theme::font_small(),
                theme::TEXT_DIM,
            );
        }
    }

    interaction
}

/// Events to chip into a day cell, earliest first so truncation keeps the
/// morning entries rather than whichever happened to be inserted first.
fn visible_events_on<'a>(
    store: &'a Store,
    view: &ViewState,
    date: chrono::NaiveDate,
) -> Vec<&'a Event> {
    let mut events: Vec<&Event> = store
        .events()
        .iter()
        .filter(|e| e.occurs_on(date))
        .filter(|e| {
            store
                .project(&e.project_id)
                .map(|p| view.is_project_visible(p))
                .unwrap_or(true)
        })
        .collect();
    events.sort_by_key(|e| e.start);
    events
}

fn draw_chip(painter: &egui::Painter, rect: Rect, event: &Event, lifted: bool) {
    let mut color = theme::hex_or_accent(&event.color);
    if lifted {
        color = color.gamma_multiply(0.6);
    }
    painter.rect_filled(rect, Rounding::same(theme::CHIP_ROUNDING), color);
    let label = if event.all_day {
        event.title.clone()
    } else {
        format!("{} {}", event.start.format("%H:%M"), event.title)
    };
    let clipped = painter.with_clip_rect(rect);
    clipped.text(
        Pos2::new(rect.left() + 4.0, rect.center().y),
        egui::Align2::LEFT_CENTER,
        label,
        theme::font_chip(),
        theme::TEXT_ON_CHIP,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventDraft;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn day_chips_come_out_earliest_first() {
        let mut store = Store::new();
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let at = |h: u32| day.and_hms_opt(h, 0, 0).unwrap();
        // Inserted out of order on purpose.
        for (title, start_hour) in [("Lunch", 12), ("Standup", 9), ("Review", 16)] {
            store
                .create_event(EventDraft::new(title, at(start_hour), at(start_hour + 1)))
                .unwrap();
        }
        let view = ViewState::new(day);

        let titles: Vec<&str> = visible_events_on(&store, &view, day)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Standup", "Lunch", "Review"]);
    }
}
