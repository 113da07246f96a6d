//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme::{self, Palette};
use eframe::egui;

/// Floating scroll-to-top button at the bottom-right of the content panel.
/// Returns true when clicked.
pub fn scroll_top_button(ctx: &egui::Context, pal: &Palette, panel_rect: egui::Rect) -> bool {
    let margin = 16.0;
    let pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
    let mut clicked = false;

    egui::Area::new(egui::Id::new("scroll_top_btn"))
        .fixed_pos(pos)
        .pivot(egui::Align2::RIGHT_BOTTOM)
        .show(ctx, |ui| {
            let size = 36.0;
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            let (fill, draw_rect) = theme::button_visual(&response, pal.btn_accent, rect);
            ui.painter()
                .circle_filled(draw_rect.center(), draw_rect.width() / 2.0, fill);
            ui.painter().text(
                draw_rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::ARROW_UP,
                egui::FontId::proportional(16.0),
                pal.btn_accent_text,
            );
            clicked = response.clicked();
        });

    clicked
}

/// Painted hamburger that morphs into an X as `open_progress` goes 0 → 1.
pub fn hamburger_button(
    ui: &mut egui::Ui,
    pal: &Palette,
    open_progress: f32,
) -> egui::Response {
    let size = 30.0;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let painter = ui.painter();
    let center = rect.center();
    let half = 9.0;
    let gap = 7.0;
    let t = open_progress.clamp(0.0, 1.0);
    let stroke = egui::Stroke::new(2.0, pal.text_primary);

    // Top and bottom bars slide to the middle while rotating into an X;
    // the middle bar fades out.
    let angle = t * std::f32::consts::FRAC_PI_4;
    let down = egui::vec2(angle.cos(), angle.sin()) * half;
    let up = egui::vec2(angle.cos(), -angle.sin()) * half;

    let top_center = egui::pos2(center.x, center.y - gap * (1.0 - t));
    painter.line_segment([top_center - down, top_center + down], stroke);

    painter.line_segment(
        [
            egui::pos2(center.x - half, center.y),
            egui::pos2(center.x + half, center.y),
        ],
        egui::Stroke::new(2.0, theme::faded(pal.text_primary, 1.0 - t)),
    );

    let bottom_center = egui::pos2(center.x, center.y + gap * (1.0 - t));
    painter.line_segment([bottom_center - up, bottom_center + up], stroke);

    response
}

/// A nav entry; the active one gets the accent color and an underline.
pub fn nav_link_button(
    ui: &mut egui::Ui,
    pal: &Palette,
    label: &str,
    active: bool,
) -> egui::Response {
    let font = egui::FontId::proportional(theme::FONT_BODY);
    let text_width = ui.fonts(|f| {
        f.layout_no_wrap(label.to_string(), font.clone(), pal.text_secondary)
            .rect
            .width()
    });
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(text_width + 8.0, 28.0),
        egui::Sense::click(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let color = if active {
        pal.accent
    } else if response.hovered() {
        pal.text_primary
    } else {
        pal.text_secondary
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        font,
        color,
    );
    if active {
        let y = rect.bottom() - 2.0;
        ui.painter().line_segment(
            [
                egui::pos2(rect.left() + 2.0, y),
                egui::pos2(rect.right() - 2.0, y),
            ],
            egui::Stroke::new(2.0, pal.accent),
        );
    }

    response
}

/// Phosphor glyph for a footer link, keyed loosely on its label.
pub fn social_icon(label: &str) -> &'static str {
    match label.to_ascii_lowercase().as_str() {
        "github" => egui_phosphor::regular::GITHUB_LOGO,
        "twitter" | "x" => egui_phosphor::regular::TWITTER_LOGO,
        "discord" => egui_phosphor::regular::DISCORD_LOGO,
        "linkedin" => egui_phosphor::regular::LINKEDIN_LOGO,
        "mail" | "email" | "contact" => egui_phosphor::regular::ENVELOPE,
        _ => egui_phosphor::regular::LINK,
    }
}
