use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_HEADER: Color32 = Color32::from_rgb(34, 37, 48);
pub const BG_CELL_OUTSIDE: Color32 = Color32::from_rgb(27, 27, 36);
pub const BG_CELL_HOVER: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 14);
pub const BG_DROP_TARGET: Color32 = Color32::from_rgba_premultiplied(80, 140, 220, 45);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);
pub const TEXT_ON_CHIP: Color32 = Color32::from_rgb(255, 255, 255);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const TODAY_RING: Color32 = Color32::from_rgb(240, 75, 75);
pub const GRID_LINE: Color32 = Color32::from_rgb(44, 46, 58);
pub const HANDLE_COLOR: Color32 = Color32::from_rgb(255, 255, 255);
pub const HOLIDAY_TEXT: Color32 = Color32::from_rgb(120, 200, 160);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const MONTH_HEADER_HEIGHT: f32 = 26.0;
pub const TIME_GUTTER_WIDTH: f32 = 46.0;
pub const DAY_HEADER_HEIGHT: f32 = 34.0;
pub const CHIP_HEIGHT: f32 = 16.0;
pub const CHIP_ROUNDING: f32 = 3.0;
pub const RESIZE_HANDLE_HEIGHT: f32 = 6.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_sub() -> FontId {
    FontId::proportional(10.5)
}

pub fn font_chip() -> FontId {
    FontId::proportional(10.5)
}

pub fn font_small() -> FontId {
    FontId::proportional(9.5)
}

pub fn font_menu() -> FontId {
    FontId::proportional(12.5)
}

// ── Project color palette (hex, mirrors the event payload format) ────────────

pub const PROJECT_COLORS: &[&str] = &[
    "#4285f4", // Google blue
    "#34a853", // Green
    "#ab47bc", // Purple
    "#fb8c00", // Orange
    "#03a9f4", // Light blue
    "#e53935", // Red
    "#00bcd4", // Cyan
    "#ffc107", // Amber
];

pub fn project_color(index: usize) -> &'static str {
    PROJECT_COLORS[index % PROJECT_COLORS.len()]
}

// ── Background gradient presets (share-payload theme names) ──────────────────

pub struct Gradient {
    pub name: &'static str,
    pub top: Color32,
    pub bottom: Color32,
}

pub const GRADIENTS: &[Gradient] = &[
    Gradient {
        name: "Midnight",
        top: Color32::from_rgb(24, 24, 32),
        bottom: Color32::from_rgb(16, 18, 30),
    },
    Gradient {
        name: "Aurora",
        top: Color32::from_rgb(18, 32, 38),
        bottom: Color32::from_rgb(24, 24, 44),
    },
    Gradient {
        name: "Sunset",
        top: Color32::from_rgb(40, 24, 32),
        bottom: Color32::from_rgb(22, 18, 30),
    },
    Gradient {
        name: "Ocean",
        top: Color32::from_rgb(18, 28, 44),
        bottom: Color32::from_rgb(14, 20, 32),
    },
];

pub fn gradient_by_name(name: &str) -> &'static Gradient {
    GRADIENTS
        .iter()
        .find(|g| g.name == name)
        .unwrap_or(&GRADIENTS[0])
}

/// Paint the background gradient behind the calendar as stacked bands.
pub fn paint_gradient(painter: &egui::Painter, rect: egui::Rect, gradient: &Gradient) {
    const BANDS: usize = 24;
    let band_h = rect.height() / BANDS as f32;
    for i in 0..BANDS {
        let t = i as f32 / (BANDS - 1) as f32;
        let color = lerp_color(gradient.top, gradient.bottom, t);
        let band = egui::Rect::from_min_size(
            egui::Pos2::new(rect.left(), rect.top() + i as f32 * band_h),
            egui::Vec2::new(rect.width(), band_h + 1.0),
        );
        painter.rect_filled(band, 0.0, color);
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

// ── Hex color helpers ────────────────────────────────────────────────────────

/// Parse `#RRGGBB` or `#RRGGBBAA` into a `Color32`. Model colors are
/// free-form hex strings; unparseable values fall back to the accent.
pub fn parse_hex_color(s: &str) -> Option<Color32> {
    let s = s.trim().trim_start_matches('#');
    match s.len() {
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        8 => {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            let a = u8::from_str_radix(&s[6..8], 16).ok()?;
            Some(Color32::from_rgba_unmultiplied(r, g, b, a))
        }
        _ => None,
    }
}

pub fn hex_or_accent(s: &str) -> Color32 {
    parse_hex_color(s).unwrap_or(ACCENT)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = Color32::from_rgb(20, 20, 28); // TextEdit bg
    visuals.faint_bg_color = Color32::from_rgb(30, 30, 40);

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(42, 44, 56);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 54, 68);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = Color32::from_rgb(60, 62, 76);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.widgets.open.bg_fill = Color32::from_rgb(50, 52, 66);
    visuals.widgets.open.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.open.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.open.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = BG_DROP_TARGET;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);

    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
