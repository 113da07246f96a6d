//! Centralized theme palettes for Liquid Landing
//! All colors, sizes, and styling should reference these constants

use crate::settings::Theme;
use egui::Color32;

/// Full color table for one theme. Applying a palette replaces the
/// context's visuals wholesale, so no color from the previous theme
/// survives a toggle.
pub struct Palette {
    // Backgrounds
    pub bg_base: Color32,
    pub bg_elevated: Color32,
    pub bg_input: Color32,
    pub bg_surface: Color32,
    pub bg_hover: Color32,

    // Accent
    pub accent: Color32,
    pub accent_light: Color32,

    // Text
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub text_dim: Color32,

    // Borders
    pub border_subtle: Color32,
    pub border_default: Color32,

    // Buttons
    pub btn_default: Color32,
    pub btn_accent: Color32,
    pub btn_accent_text: Color32,

    // Decorative
    pub blobs: [Color32; 3],
    pub trail: Color32,
    pub burst: Color32,
    pub toast_bg: Color32,
}

pub const LIGHT: Palette = Palette {
    bg_base: Color32::from_rgb(0xfa, 0xfa, 0xfa), // zinc-50
    bg_elevated: Color32::from_rgb(0xff, 0xff, 0xff),
    bg_input: Color32::from_rgb(0xf4, 0xf4, 0xf5), // zinc-100
    bg_surface: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
    bg_hover: Color32::from_rgb(0xcc, 0xfb, 0xf1), // teal-100

    accent: Color32::from_rgb(0x0d, 0x94, 0x88), // teal-600
    accent_light: Color32::from_rgb(0x14, 0xb8, 0xa6), // teal-500

    text_primary: Color32::from_rgb(0x18, 0x18, 0x1b), // zinc-900
    text_secondary: Color32::from_rgb(0x3f, 0x3f, 0x46), // zinc-700
    text_muted: Color32::from_rgb(0x52, 0x52, 0x5b), // zinc-600
    text_dim: Color32::from_rgb(0xa1, 0xa1, 0xaa), // zinc-400

    border_subtle: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
    border_default: Color32::from_rgb(0xd4, 0xd4, 0xd8), // zinc-300

    btn_default: Color32::from_rgb(0xe4, 0xe4, 0xe7),
    btn_accent: Color32::from_rgb(0x0d, 0x94, 0x88),
    btn_accent_text: Color32::from_rgb(0xf0, 0xfd, 0xfa), // teal-50

    blobs: [
        Color32::from_rgba_premultiplied(4, 21, 19, 26), // teal-400 @ 10%
        Color32::from_rgba_premultiplied(4, 16, 21, 22), // sky-400 @ 9%
        Color32::from_rgba_premultiplied(17, 8, 12, 18), // pink-400 @ 7%
    ],
    trail: Color32::from_rgba_premultiplied(2, 26, 24, 46), // teal-600 @ 18%
    burst: Color32::from_rgba_premultiplied(9, 86, 78, 120), // teal-500 @ 47%
    toast_bg: Color32::from_rgb(0xff, 0xff, 0xff),
};

pub const DARK: Palette = Palette {
    bg_base: Color32::from_rgb(0x09, 0x09, 0x0b), // zinc-950
    bg_elevated: Color32::from_rgb(0x18, 0x18, 0x1b), // zinc-900
    bg_input: Color32::from_rgb(0x14, 0x14, 0x18),
    bg_surface: Color32::from_rgb(0x27, 0x27, 0x2a), // zinc-800
    bg_hover: Color32::from_rgb(0x0f, 0x1a, 0x19), // subtle teal hover

    accent: Color32::from_rgb(0x2d, 0xd4, 0xbf), // teal-400
    accent_light: Color32::from_rgb(0x5e, 0xea, 0xd4), // teal-300

    text_primary: Color32::WHITE,
    text_secondary: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
    text_muted: Color32::from_rgb(0xa1, 0xa1, 0xaa), // zinc-400
    text_dim: Color32::from_rgb(0x71, 0x71, 0x7a), // zinc-500

    border_subtle: Color32::from_rgb(0x27, 0x27, 0x2a), // zinc-800
    border_default: Color32::from_rgb(0x3f, 0x3f, 0x46), // zinc-700

    btn_default: Color32::from_rgb(0x3f, 0x3f, 0x46),
    btn_accent: Color32::from_rgb(0x2d, 0xd4, 0xbf),
    btn_accent_text: Color32::from_rgb(0x04, 0x2f, 0x2e), // teal-950

    blobs: [
        Color32::from_rgba_premultiplied(3, 14, 13, 18), // teal-400 @ 7%
        Color32::from_rgba_premultiplied(3, 10, 13, 14), // sky-400 @ 5%
        Color32::from_rgba_premultiplied(11, 5, 8, 12),  // pink-400 @ 5%
    ],
    trail: Color32::from_rgba_premultiplied(7, 33, 29, 40), // teal-400 @ 16%
    burst: Color32::from_rgba_premultiplied(40, 100, 91, 110), // teal-300 @ 43%
    toast_bg: Color32::from_rgb(0x1a, 0x1a, 0x1e),
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HERO: f32 = 34.0;
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS & SPACING
// =============================================================================
pub const HEADER_HEIGHT: f32 = 52.0;
pub const FOOTER_HEIGHT: f32 = 40.0;
pub const CONTENT_MAX_WIDTH: f32 = 720.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, theme: Theme) {
    let pal = palette(theme);
    let base = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: theme == Theme::Dark,
        panel_fill: pal.bg_base,
        window_fill: pal.bg_elevated,
        extreme_bg_color: pal.bg_input,
        faint_bg_color: pal.bg_elevated,
        hyperlink_color: pal.accent,
        selection: egui::style::Selection {
            bg_fill: pal.bg_surface,
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: pal.bg_elevated,
                weak_bg_fill: pal.bg_surface,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: pal.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.text_secondary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: pal.bg_hover,
                weak_bg_fill: pal.bg_surface,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(1.5, pal.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: pal.bg_surface,
                weak_bg_fill: pal.bg_surface,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: pal.bg_surface,
                weak_bg_fill: pal.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, pal.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(1.0, pal.border_subtle),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..base
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Card frame used for feature tiles and the newsletter box
pub fn card_frame(pal: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(pal.bg_elevated)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, pal.border_subtle))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

/// Section panel frame with fill and border
pub fn section_frame(pal: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(pal.bg_input)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, pal.border_default))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(12))
}

// =============================================================================
// HELPER - Button visuals
// =============================================================================

/// Returns (fill, draw_rect) for a custom-painted button with hover/press
/// effects. Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

/// Fade a color toward fully transparent. Works on premultiplied colors.
pub fn faded(c: Color32, alpha: f32) -> Color32 {
    c.gamma_multiply(alpha.clamp(0.0, 1.0))
}
