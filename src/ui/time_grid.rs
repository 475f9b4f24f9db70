use chrono::{NaiveDate, Timelike};
use egui::{Id, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

use crate::interact::{DragController, ResizeController, Slot, PIXELS_PER_HOUR};
use crate::model::{grid, holidays, Event, Store, ViewMode, ViewState};
use crate::ui::calendar::CalendarInteraction;
use crate::ui::theme;

const ALL_DAY_STRIP_HEIGHT: f32 = 20.0;

/// Render the hour grid shared by the day and week views.
pub fn show_time_grid(
    store: &Store,
    view: &ViewState,
    drag: &mut DragController,
    resize: &mut ResizeController,
    show_holidays: bool,
    read_only: bool,
    ui: &mut Ui,
) -> CalendarInteraction {
    let mut interaction = CalendarInteraction::default();
    let today = chrono::Local::now().date_naive();
    let days: Vec<NaiveDate> = match view.view_mode {
        ViewMode::Day => vec![view.anchor_date],
        _ => grid::week_days(view.anchor_date),
    };

    let has_all_day = days.iter().any(|date| {
        store
            .events()
            .iter()
            .any(|e| e.all_day && e.occurs_on(*date) && is_visible(store, view, e))
    });
    let header_h = theme::DAY_HEADER_HEIGHT + if has_all_day { ALL_DAY_STRIP_HEIGHT } else { 0.0 };

    let available = ui.available_size();
    let canvas_h = header_h + grid::HOURS_PER_DAY as f32 * PIXELS_PER_HOUR;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                Vec2::new(available.x, canvas_h.max(available.y)),
                Sense::click(),
            );
            let origin = response.rect.min;
            let body_top = origin.y + header_h;
            let col_w =
                (response.rect.width() - theme::TIME_GUTTER_WIDTH) / days.len() as f32;
            let col_left =
                |col: usize| origin.x + theme::TIME_GUTTER_WIDTH + col as f32 * col_w;

            draw_header(
                &painter,
                origin,
                &days,
                col_w,
                header_h,
                today,
                show_holidays,
            );

            // Hour labels and horizontal grid lines
            for hour in 0..grid::HOURS_PER_DAY as u32 {
                let y = body_top + hour as f32 * PIXELS_PER_HOUR;
                painter.text(
                    Pos2::new(origin.x + theme::TIME_GUTTER_WIDTH - 6.0, y + 2.0),
                    egui::Align2::RIGHT_TOP,
                    format!("{hour:02}:00"),
                    theme::font_small(),
                    theme::TEXT_DIM,
                );
                painter.line_segment(
                    [
                        Pos2::new(origin.x + theme::TIME_GUTTER_WIDTH, y),
                        Pos2::new(response.rect.right(), y),
                    ],
                    Stroke::new(0.5, theme::GRID_LINE),
                );
            }
            // Vertical column separators
            for col in 0..=days.len() {
                let x = col_left(col);
                painter.line_segment(
                    [Pos2::new(x, origin.y), Pos2::new(x, response.rect.bottom())],
                    Stroke::new(0.5, theme::GRID_LINE),
                );
            }

            // Drop-target highlight for an in-flight drag
            if let Some(slot) = drag.hover_slot() {
                if let (Some(hour), Some(col)) =
                    (slot.hour, days.iter().position(|d| *d == slot.date))
                {
                    let rect = Rect::from_min_size(
                        Pos2::new(col_left(col), body_top + hour as f32 * PIXELS_PER_HOUR),
                        Vec2::new(col_w, PIXELS_PER_HOUR),
                    );
                    painter.rect_filled(rect, 0.0, theme::BG_DROP_TARGET);
                }
            }

            // Resolve the pointer to an hour slot; used for drag hit-testing.
            let slot_under = |pos: Pos2| -> Option<Slot> {
                if pos.y < body_top || pos.x < origin.x + theme::TIME_GUTTER_WIDTH {
                    return None;
                }
                let col = ((pos.x - origin.x - theme::TIME_GUTTER_WIDTH) / col_w) as usize;
                let hour = ((pos.y - body_top) / PIXELS_PER_HOUR) as u32;
                let date = *days.get(col)?;
                (hour < 24).then(|| Slot::hour(date, hour))
            };

            // Empty-slot clicks create events. Registered before the event
            // blocks so blocks win overlapping hits.
            if !read_only {
                for (col, date) in days.iter().enumerate() {
                    for hour in 0..grid::HOURS_PER_DAY as u32 {
                        let rect = Rect::from_min_size(
                            Pos2::new(col_left(col), body_top + hour as f32 * PIXELS_PER_HOUR),
                            Vec2::new(col_w, PIXELS_PER_HOUR),
                        );
                        let slot_response = ui.interact(
                            rect,
                            ui.make_persistent_id(("hour-slot", col, hour)),
                            Sense::click(),
                        );
                        if slot_response.clicked() {
                            interaction.create_at = Some(Slot::hour(*date, hour));
                        }
                    }
                }
            }

            // All-day strip
            if has_all_day {
                let strip_top = origin.y + theme::DAY_HEADER_HEIGHT;
                for (col, date) in days.iter().enumerate() {
                    let all_day: Vec<&Event> = store
                        .events()
                        .iter()
                        .filter(|e| e.all_day && e.occurs_on(*date) && is_visible(store, view, e))
                        .collect();
                    if let Some(event) = all_day.first() {
                        let chip = Rect::from_min_size(
                            Pos2::new(col_left(col) + 3.0, strip_top + 2.0),
                            Vec2::new(col_w - 6.0, theme::CHIP_HEIGHT),
                        );
                        painter.rect_filled(
                            chip,
                            Rounding::same(theme::CHIP_ROUNDING),
                            theme::hex_or_accent(&event.color),
                        );
                        let label = if all_day.len() > 1 {
                            format!("{} (+{})", event.title, all_day.len() - 1)
                        } else {
                            event.title.clone()
                        };
                        painter.with_clip_rect(chip).text(
                            Pos2::new(chip.left() + 4.0, chip.center().y),
                            egui::Align2::LEFT_CENTER,
                            label,
                            theme::font_chip(),
                            theme::TEXT_ON_CHIP,
                        );
                        let chip_response = ui.interact(
                            chip,
                            ui.make_persistent_id(("all-day-chip", col)),
                            Sense::click(),
                        );
                        if chip_response.clicked() && !read_only {
                            interaction.open_event = Some(event.id.clone());
                        }
                    }
                }
            }

            // Timed event blocks
            for (col, date) in days.iter().enumerate() {
                let events: Vec<&Event> = store
                    .events()
                    .iter()
                    .filter(|e| !e.all_day && e.occurs_on(*date) && is_visible(store, view, e))
                    .collect();

                for event in events {
                    let start_h = if event.start.date() < *date {
                        0.0
                    } else {
                        event.start.hour() as f32 + event.start.minute() as f32 / 60.0
                    };
                    // A live resize preview replaces the stored end.
                    let end = if resize.resizing_event() == Some(&event.id) {
                        resize.preview_end().unwrap_or(event.end)
                    } else {
                        event.end
                    };
                    let end_h = if end.date() > *date {
                        24.0
                    } else {
                        end.hour() as f32 + end.minute() as f32 / 60.0
                    };
                    if end_h <= start_h {
                        continue;
                    }

                    let block = Rect::from_min_size(
                        Pos2::new(col_left(col) + 3.0, body_top + start_h * PIXELS_PER_HOUR),
                        Vec2::new(
                            col_w - 6.0,
                            ((end_h - start_h) * PIXELS_PER_HOUR).max(14.0),
                        ),
                    );
                    draw_block(&painter, block, event, drag.dragging_event() == Some(&event.id));

                    if read_only {
                        continue;
                    }

                    let block_response = ui.interact(
                        block,
                        ui.make_persistent_id(("event-block", &event.id, col)),
                        Sense::click_and_drag(),
                    );
                    if block_response.clicked() {
                        interaction.open_event = Some(event.id.clone());
                    }
                    // A resize in flight suppresses drag on the same
                    // pointer sequence.
                    if block_response.drag_started() && !resize.is_resizing() {
                        drag.begin(event);
                    }
                    if block_response.dragged() && drag.dragging_event() == Some(&event.id) {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                        let pos = block_response.interact_pointer_pos();
                        drag.hover(pos.and_then(slot_under));
                    }
                    if block_response.drag_stopped() && drag.dragging_event() == Some(&event.id)
                    {
                        interaction.drag_commit = drag.release();
                    }

                    // Resize affordance on the bottom edge; only where the
                    // block actually ends on this day.
                    if end.date() > *date {
                        continue;
                    }
                    let handle = Rect::from_min_max(
                        Pos2::new(block.left(), block.bottom() - theme::RESIZE_HANDLE_HEIGHT),
                        Pos2::new(block.right(), block.bottom() + 2.0),
                    );
                    let handle_response = ui.interact(
                        handle,
                        ui.make_persistent_id(("event-resize", &event.id, col)),
                        Sense::drag(),
                    );
                    if handle_response.hovered() || handle_response.dragged() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeVertical);
                        // Grip line so the handle reads as grabbable.
                        let grip_y = block.bottom() - theme::RESIZE_HANDLE_HEIGHT / 2.0;
                        ui.painter().line_segment(
                            [
                                Pos2::new(block.left() + 6.0, grip_y),
                                Pos2::new(block.right() - 6.0, grip_y),
                            ],
                            Stroke::new(1.5, theme::HANDLE_COLOR),
                        );
                    }
                    if handle_response.drag_started() {
                        resize.begin(event);
                        let y = handle_response
                            .interact_pointer_pos()
                            .map(|p| p.y)
                            .unwrap_or(handle.center().y);
                        ui.ctx().data_mut(|data| {
                            data.insert_temp(resize_origin_id(&event.id), y);
                        });
                    }
                    if handle_response.dragged()
                        && resize.resizing_event() == Some(&event.id)
                    {
                        let y = handle_response
                            .interact_pointer_pos()
                            .map(|p| p.y)
                            .unwrap_or(handle.center().y);
                        let origin_y = ui.ctx().data_mut(|data| {
                            data.get_temp::<f32>(resize_origin_id(&event.id))
                        });
                        if let Some(origin_y) = origin_y {
                            resize.update(y - origin_y);
                        }
                    }
                    if handle_response.drag_stopped()
                        && resize.resizing_event() == Some(&event.id)
                    {
                        interaction.resize_commit = resize.release();
                        ui.ctx().data_mut(|data| {
                            data.remove::<f32>(resize_origin_id(&event.id));
                        });
                    }
                }
            }
        });

    interaction
}

fn resize_origin_id(event_id: &str) -> Id {
    Id::new(("resize-origin", event_id))
}

fn is_visible(store: &Store, view: &ViewState, event: &Event) -> bool {
    store
        .project(&event.project_id)
        .map(|p| view.is_project_visible(p))
        .unwrap_or(true)
}

fn draw_header(
    painter: &egui::Painter,
    origin: Pos2,
    days: &[NaiveDate],
    col_w: f32,
    header_h: f32,
    today: NaiveDate,
    show_holidays: bool,
) {
    let width = theme::TIME_GUTTER_WIDTH + days.len() as f32 * col_w;
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, header_h)),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + header_h),
            Pos2::new(origin.x + width, origin.y + header_h),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    for (col, date) in days.iter().enumerate() {
        let x = origin.x + theme::TIME_GUTTER_WIDTH + col as f32 * col_w;
        let is_today = grid::is_today(*date, today);
        let color = if is_today {
            theme::ACCENT
        } else {
            theme::TEXT_PRIMARY
        };
        painter.text(
            Pos2::new(x + 6.0, origin.y + 12.0),
            egui::Align2::LEFT_CENTER,
            date.format("%a %-d").to_string(),
            theme::font_header(),
            color,
        );
        if is_today {
            painter.line_segment(
                [
                    Pos2::new(x, origin.y + theme::DAY_HEADER_HEIGHT - 2.0),
                    Pos2::new(x + col_w, origin.y + theme::DAY_HEADER_HEIGHT - 2.0),
                ],
                Stroke::new(2.0, theme::ACCENT),
            );
        }
        if show_holidays {
            if let Some(name) = holidays::holiday_on(*date) {
                painter.text(
                    Pos2::new(x + 6.0, origin.y + 25.0),
                    egui::Align2::LEFT_CENTER,
                    name,
                    theme::font_small(),
                    theme::HOLIDAY_TEXT,
                );
            }
        }
    }
}

fn draw_block(painter: &egui::Painter, rect: Rect, event: &Event, lifted: bool) {
    let mut color = theme::hex_or_accent(&event.color);
    if lifted {
        color = color.gamma_multiply(0.6);
    }
    let rounding = Rounding::same(4.0);
    painter.rect_filled(rect, rounding, color);
    painter.rect_stroke(rect, rounding, Stroke::new(0.5, egui::Color32::from_black_alpha(60)));

    let clipped = painter.with_clip_rect(rect);
    clipped.text(
        Pos2::new(rect.left() + 5.0, rect.top() + 9.0),
        egui::Align2::LEFT_CENTER,
        &event.title,
        theme::font_chip(),
        theme::TEXT_ON_CHIP,
    );
    if rect.height() > 26.0 {
        clipped.text(
            Pos2::new(rect.left() + 5.0, rect.top() + 21.0),
            egui::Align2::LEFT_CENTER,
            format!(
                "{} – {}",
                event.start.format("%H:%M"),
                event.end.format("%H:%M")
            ),
            theme::font_small(),
            theme::TEXT_ON_CHIP,
        );
    }
}
