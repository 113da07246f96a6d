#![windows_subsystem = "windows"]
//! Liquid Landing - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::nav::{self, Page};
use app::{effects, App};
use constants::*;
use eframe::egui;
use settings::Theme;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "liquid-landing.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,liquid_landing=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Liquid Landing starting");

    // Load saved theme and window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(980.0, 720.0)))
        .with_min_inner_size([420.0, 480.0])
        .with_title(APP_NAME);

    // Window/taskbar icon rasterized from the embedded SVG mark
    {
        let (rgba, w, h) = utils::rasterize_logo_square(64);
        let icon = egui::IconData { rgba, width: w, height: h };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Kick off fragment composition on the first frame
        if !self.fragments_started {
            self.fragments_started = true;
            self.start_fragment_compose(ctx);
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        let narrow = ctx.screen_rect().width() < NARROW_WIDTH;
        if !narrow {
            self.menu_open = false;
        }
        let menu_progress = ctx.animate_bool(egui::Id::new("mobile_menu"), self.menu_open);

        self.render_header(ctx, narrow, menu_progress);
        if narrow {
            self.render_menu(ctx, menu_progress);
        }
        self.render_footer(ctx);

        // Central panel - page content (must be added LAST after all panels)
        self.render_content(ctx);

        self.render_toast(ctx);
        self.render_pointer_decor(ctx);

        // The decorative layers animate continuously; cap the repaint rate
        ctx.request_repaint_after(Duration::from_millis(33));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Saving settings on exit");
        self.save_settings();
    }
}

// ============================================================================
// CHROME - HEADER / MENU / FOOTER
// ============================================================================

impl App {
    fn render_header(&mut self, ctx: &egui::Context, narrow: bool, menu_progress: f32) {
        let pal = self.palette();
        let header = self.header_fragment();

        let logo_id = self
            .logo_texture
            .get_or_insert_with(|| {
                let (pixels, w, h) = utils::rasterize_logo(56);
                ctx.load_texture(
                    "logo",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            })
            .id();

        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(pal.bg_elevated)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.image(egui::load::SizedTexture::new(logo_id, egui::vec2(26.0, 26.0)));

                    let brand = header
                        .as_ref()
                        .map(|h| h.brand.as_str())
                        .unwrap_or(APP_NAME);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(brand)
                                .size(theme::FONT_TITLE)
                                .strong()
                                .color(pal.text_primary),
                        )
                        .selectable(false),
                    );
                    if !narrow {
                        if let Some(tagline) = header
                            .as_ref()
                            .map(|h| h.tagline.as_str())
                            .filter(|t| !t.is_empty())
                        {
                            ui.add_space(4.0);
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(tagline)
                                        .size(theme::FONT_SMALL)
                                        .color(pal.text_dim),
                                )
                                .selectable(false),
                            );
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Theme toggle
                        let icon = match self.current_theme() {
                            Theme::Light => egui_phosphor::regular::MOON,
                            Theme::Dark => egui_phosphor::regular::SUN,
                        };
                        if ui
                            .add(egui::Button::new(egui::RichText::new(icon).size(16.0)).frame(false))
                            .on_hover_text("Toggle theme")
                            .clicked()
                        {
                            self.toggle_theme(ctx);
                        }

                        if narrow {
                            if components::hamburger_button(ui, pal, menu_progress).clicked() {
                                self.menu_open = !self.menu_open;
                            }
                        } else {
                            // Right-to-left layout: iterate reversed to keep reading order
                            let links = self.nav_links();
                            for link in links.iter().rev() {
                                let active = nav::is_active(self.page.slug(), link);
                                if components::nav_link_button(ui, pal, &link.label, active)
                                    .clicked()
                                {
                                    self.follow_nav_target(&link.target);
                                }
                            }
                        }
                    });
                });
            });
    }

    fn render_menu(&mut self, ctx: &egui::Context, menu_progress: f32) {
        if menu_progress <= 0.01 {
            return;
        }
        let pal = self.palette();
        let links = self.nav_links();

        egui::TopBottomPanel::top("menu")
            .frame(
                egui::Frame::new()
                    .fill(pal.bg_elevated)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.multiply_opacity(menu_progress);
                for link in &links {
                    let active = nav::is_active(self.page.slug(), link);
                    if components::nav_link_button(ui, pal, &link.label, active).clicked() {
                        self.follow_nav_target(&link.target);
                    }
                }
                ui.add_space(4.0);
            });
    }

    fn follow_nav_target(&mut self, target: &str) {
        match Page::from_target(target) {
            Some(page) => self.set_page(page),
            None => {
                debug!(link_target = target, "Nav link with unknown target");
                self.menu_open = false;
            }
        }
    }

    fn render_footer(&mut self, ctx: &egui::Context) {
        let pal = self.palette();
        let footer = self.footer_fragment();

        egui::TopBottomPanel::bottom("footer")
            .exact_height(theme::FOOTER_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(pal.bg_elevated)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let text = footer.as_ref().map(|f| f.text.clone()).unwrap_or_else(|| {
                        use chrono::Datelike;
                        format!("© {} Liquid Labs", chrono::Local::now().year())
                    });
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(text)
                                .size(theme::FONT_SMALL)
                                .color(pal.text_dim),
                        )
                        .selectable(false),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(footer) = &footer {
                            for link in footer.links.iter().rev() {
                                let icon = components::social_icon(&link.label);
                                let response = ui
                                    .add(
                                        egui::Button::new(
                                            egui::RichText::new(icon)
                                                .size(15.0)
                                                .color(pal.text_muted),
                                        )
                                        .frame(false),
                                    )
                                    .on_hover_text(&link.label);
                                if response.clicked() {
                                    info!(url = %link.url, "Opening external link");
                                    let _ = open::that(&link.url);
                                }
                            }
                        }
                    });
                });
            });
    }
}

// ============================================================================
// CONTENT PAGES
// ============================================================================

impl App {
    fn render_content(&mut self, ctx: &egui::Context) {
        let pal = self.palette();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(pal.bg_base))
            .show(ctx, |ui| {
                // Store panel rect for toast / scroll-top positioning
                self.central_panel_rect = Some(ui.max_rect());

                effects::paint_blobs(ui.painter(), ui.max_rect(), pal, ctx.input(|i| i.time));

                let mut scroll = egui::ScrollArea::vertical().auto_shrink([false; 2]);
                if self.scroll_to_top {
                    // Ease back to the top over a few frames
                    let next = (self.scroll_offset * 0.8 - 2.0).max(0.0);
                    scroll = scroll.vertical_scroll_offset(next);
                    if next <= 0.0 {
                        self.scroll_to_top = false;
                    }
                }

                let output = scroll.show(ui, |ui| {
                    let max_w = theme::CONTENT_MAX_WIDTH.min(ui.available_width() - 32.0);
                    let pad = ((ui.available_width() - max_w) / 2.0).max(16.0);
                    ui.horizontal(|ui| {
                        ui.add_space(pad);
                        ui.vertical(|ui| {
                            ui.set_max_width(max_w);
                            ui.add_space(28.0);
                            match self.page {
                                Page::Home => self.render_home(ui),
                                Page::Features => self.render_features(ui),
                                Page::About => self.render_about(ui),
                                Page::Contact => self.render_contact(ui),
                            }
                            ui.add_space(56.0);
                        });
                    });
                });
                self.scroll_offset = output.state.offset.y;
            });

        if self.scroll_offset > SCROLL_TOP_THRESHOLD {
            if let Some(rect) = self.central_panel_rect {
                if components::scroll_top_button(ctx, pal, rect) {
                    self.scroll_to_top = true;
                }
            }
        }
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        let pal = self.palette();
        let elapsed = self.page_entered.elapsed().as_secs_f32();
        let mut go_features = false;
        let mut submitted = false;

        stagger_block(ui, elapsed, 0, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Design that flows.")
                        .size(theme::FONT_HERO)
                        .strong()
                        .color(pal.text_primary),
                )
                .selectable(false),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(
                    "Liquid is a small studio crafting fluid, organic interfaces \
                     for ambitious products. Everything moves; nothing gets in the way.",
                )
                .size(theme::FONT_BODY)
                .color(pal.text_muted),
            );
        });

        ui.add_space(theme::SPACING_XL);
        stagger_block(ui, elapsed, 1, |ui| {
            let cta = egui::Button::new(
                egui::RichText::new(format!(
                    "{}  Explore features",
                    egui_phosphor::regular::SPARKLE
                ))
                .color(pal.btn_accent_text),
            )
            .fill(pal.btn_accent)
            .corner_radius(theme::RADIUS_DEFAULT);
            if ui.add(cta).clicked() {
                go_features = true;
            }
        });

        ui.add_space(theme::SPACING_XL * 2.0);
        stagger_block(ui, elapsed, 2, |ui| {
            ui.columns(3, |cols| {
                let highlights = [
                    (
                        egui_phosphor::regular::DROP,
                        "Fluid",
                        "Interfaces that ripple and settle like water.",
                    ),
                    (
                        egui_phosphor::regular::MOON_STARS,
                        "Adaptive",
                        "Light by day, dark by night, remembered for you.",
                    ),
                    (
                        egui_phosphor::regular::LIGHTNING,
                        "Fast",
                        "Pages land instantly; the chrome streams in behind.",
                    ),
                ];
                for (col, (icon, title, blurb)) in cols.iter_mut().zip(highlights) {
                    theme::card_frame(pal).show(col, |ui| {
                        ui.label(egui::RichText::new(icon).size(22.0).color(pal.accent));
                        ui.label(
                            egui::RichText::new(title)
                                .size(theme::FONT_BODY)
                                .strong()
                                .color(pal.text_primary),
                        );
                        ui.label(
                            egui::RichText::new(blurb)
                                .size(theme::FONT_SMALL)
                                .color(pal.text_muted),
                        );
                    });
                }
            });
        });

        ui.add_space(theme::SPACING_XL * 2.0);
        stagger_block(ui, elapsed, 3, |ui| {
            theme::card_frame(pal).show(ui, |ui| {
                ui.label(
                    egui::RichText::new("Stay in the loop")
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(pal.text_primary),
                );
                ui.label(
                    egui::RichText::new("Monthly notes on fluid design. No spam, ever.")
                        .size(theme::FONT_LABEL)
                        .color(pal.text_muted),
                );
                ui.add_space(theme::SPACING_MD);
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.newsletter.email)
                            .hint_text("you@example.com")
                            .desired_width(240.0),
                    );
                    let subscribe = egui::Button::new(
                        egui::RichText::new(format!(
                            "{}  Subscribe",
                            egui_phosphor::regular::PAPER_PLANE_TILT
                        ))
                        .color(pal.btn_accent_text),
                    )
                    .fill(pal.btn_accent)
                    .corner_radius(theme::RADIUS_DEFAULT);
                    let enter =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.add(subscribe).clicked() || enter {
                        submitted = true;
                    }
                });
            });
        });

        ui.add_space(theme::SPACING_XL * 2.0);
        stagger_block(ui, elapsed, 4, |ui| {
            theme::section_frame(pal).show(ui, |ui| {
                ui.label(
                    egui::RichText::new(
                        "“They made our product feel alive without making it feel busy.”",
                    )
                    .size(theme::FONT_BODY)
                    .italics()
                    .color(pal.text_secondary),
                );
                ui.label(
                    egui::RichText::new("— a very happy client")
                        .size(theme::FONT_SMALL)
                        .color(pal.text_dim),
                );
            });
        });

        if go_features {
            self.set_page(Page::Features);
        }
        if submitted {
            if let Some(message) = self.newsletter.submit() {
                self.show_toast(message);
            }
        }
    }

    fn render_features(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Size, StripBuilder};

        let pal = self.palette();
        let elapsed = self.page_entered.elapsed().as_secs_f32();

        stagger_block(ui, elapsed, 0, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Features")
                        .size(theme::FONT_HERO)
                        .strong()
                        .color(pal.text_primary),
                )
                .selectable(false),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Everything the studio ships, in one window.")
                    .color(pal.text_muted),
            );
        });

        const FEATURES: [(&str, &str, &str); 4] = [
            (
                egui_phosphor::regular::DROP,
                "Liquid Motion",
                "Organic entrance animations and a playful cursor trail give \
                 every page a sense of depth.",
            ),
            (
                egui_phosphor::regular::MOON_STARS,
                "Dual Themes",
                "A light and a dark palette, remembered across visits and \
                 applied before the first frame.",
            ),
            (
                egui_phosphor::regular::LIGHTNING,
                "Instant Pages",
                "Navigation is immediate; shared chrome streams in behind the \
                 scenes without ever blocking.",
            ),
            (
                egui_phosphor::regular::ENVELOPE_SIMPLE,
                "Newsletter",
                "A one-field signup that stays out of the way until you \
                 want it.",
            ),
        ];

        ui.add_space(theme::SPACING_XL);
        stagger_block(ui, elapsed, 1, |ui| {
            let row_height = 120.0;
            StripBuilder::new(ui)
                .size(Size::exact(row_height))
                .size(Size::exact(row_height))
                .vertical(|mut strip| {
                    for row in FEATURES.chunks(2) {
                        strip.strip(|builder| {
                            builder
                                .size(Size::remainder())
                                .size(Size::remainder())
                                .horizontal(|mut strip| {
                                    for &(icon, title, blurb) in row {
                                        strip.cell(|ui| {
                                            feature_card(ui, pal, icon, title, blurb);
                                        });
                                    }
                                });
                        });
                    }
                });
        });
    }

    fn render_about(&mut self, ui: &mut egui::Ui) {
        let pal = self.palette();
        let elapsed = self.page_entered.elapsed().as_secs_f32();

        stagger_block(ui, elapsed, 0, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("About")
                        .size(theme::FONT_HERO)
                        .strong()
                        .color(pal.text_primary),
                )
                .selectable(false),
            );
        });

        ui.add_space(theme::SPACING_XL);
        stagger_block(ui, elapsed, 1, |ui| {
            ui.label(
                egui::RichText::new(
                    "We started Liquid because most software feels like furniture: \
                     rigid, square, bolted to the floor. We think it should feel \
                     like water. It should respond when you touch it and settle \
                     when you let go.",
                )
                .size(theme::FONT_BODY)
                .color(pal.text_secondary),
            );
        });

        ui.add_space(theme::SPACING_LG);
        stagger_block(ui, elapsed, 2, |ui| {
            ui.label(
                egui::RichText::new(
                    "The studio is three people across two time zones, with an \
                     unreasonable number of opinions about easing curves.",
                )
                .size(theme::FONT_BODY)
                .color(pal.text_secondary),
            );
        });

        ui.add_space(theme::SPACING_XL);
        stagger_block(ui, elapsed, 3, |ui| {
            theme::section_frame(pal).show(ui, |ui| {
                ui.label(
                    egui::RichText::new("What we value")
                        .size(theme::FONT_BODY)
                        .strong()
                        .color(pal.text_primary),
                );
                ui.add_space(theme::SPACING_SM);
                for value in [
                    "Motion with purpose, never decoration for its own sake",
                    "Interfaces that work the same in sunlight and at midnight",
                    "Shipping small, polished things often",
                ] {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::CHECK)
                                .color(pal.accent),
                        );
                        ui.label(
                            egui::RichText::new(value)
                                .size(theme::FONT_LABEL)
                                .color(pal.text_muted),
                        );
                    });
                }
            });
        });
    }

    fn render_contact(&mut self, ui: &mut egui::Ui) {
        let pal = self.palette();
        let elapsed = self.page_entered.elapsed().as_secs_f32();

        stagger_block(ui, elapsed, 0, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Contact")
                        .size(theme::FONT_HERO)
                        .strong()
                        .color(pal.text_primary),
                )
                .selectable(false),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Tell us about the thing you want to build.")
                    .color(pal.text_muted),
            );
        });

        ui.add_space(theme::SPACING_XL);
        stagger_block(ui, elapsed, 1, |ui| {
            theme::card_frame(pal).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(egui_phosphor::regular::ENVELOPE)
                            .size(18.0)
                            .color(pal.accent),
                    );
                    let response = ui.add(
                        egui::Button::new(
                            egui::RichText::new("hello@liquidlabs.studio")
                                .size(theme::FONT_BODY)
                                .color(pal.text_primary),
                        )
                        .frame(false),
                    );
                    if response.clicked() {
                        info!("Opening mail client");
                        let _ = open::that("mailto:hello@liquidlabs.studio");
                    }
                });
                ui.label(
                    egui::RichText::new("We read everything. Replies within two days.")
                        .size(theme::FONT_SMALL)
                        .color(pal.text_dim),
                );
            });
        });

        ui.add_space(theme::SPACING_LG);
        stagger_block(ui, elapsed, 2, |ui| {
            let browse = egui::Button::new(
                egui::RichText::new(format!(
                    "{}  See recent work",
                    egui_phosphor::regular::ARROW_SQUARE_OUT
                ))
                .color(pal.text_primary),
            )
            .fill(pal.btn_default)
            .corner_radius(theme::RADIUS_DEFAULT);
            if ui.add(browse).clicked() {
                info!("Opening portfolio in browser");
                let _ = open::that("https://liquidlabs.studio/work");
            }
        });
    }
}

/// One entrance-animated content block: fades in and slides up on a
/// per-index delay after the page switch.
fn stagger_block(
    ui: &mut egui::Ui,
    elapsed: f32,
    index: usize,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let (alpha, rise) = effects::stagger(elapsed, index);
    ui.scope(|ui| {
        ui.add_space(rise);
        ui.multiply_opacity(alpha);
        add_contents(ui);
    });
    if alpha < 1.0 {
        ui.ctx().request_repaint();
    }
}

fn feature_card(ui: &mut egui::Ui, pal: &theme::Palette, icon: &str, title: &str, blurb: &str) {
    theme::card_frame(pal).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(icon).size(20.0).color(pal.accent));
            ui.label(
                egui::RichText::new(title)
                    .size(theme::FONT_BODY)
                    .strong()
                    .color(pal.text_primary),
            );
        });
        ui.add_space(2.0);
        ui.label(
            egui::RichText::new(blurb)
                .size(theme::FONT_SMALL)
                .color(pal.text_muted),
        );
    });
}

// ============================================================================
// OVERLAYS - TOAST & POINTER DECOR
// ============================================================================

impl App {
    /// Toast notification (bottom-right, 3s visible then fade, pause on hover)
    fn render_toast(&mut self, ctx: &egui::Context) {
        let pal = self.palette();
        let (Some(message), Some(panel_rect)) =
            (self.toast_message.clone(), self.central_panel_rect)
        else {
            return;
        };

        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);

        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                let elapsed = self
                    .toast_start
                    .map(|t| t.elapsed().as_secs_f32())
                    .unwrap_or(0.0);
                let alpha = if elapsed > visible_duration {
                    (total_duration - elapsed) / fade_duration
                } else {
                    1.0
                };

                egui::Frame::new()
                    .fill(theme::faded(pal.toast_bg, alpha))
                    .stroke(egui::Stroke::new(1.0, theme::faded(pal.accent, 0.4 * alpha)))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&message)
                                .color(theme::faded(pal.text_primary, alpha)),
                        );
                    });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(Instant::now());
        }

        let elapsed = self
            .toast_start
            .map(|t| t.elapsed().as_secs_f32())
            .unwrap_or(0.0);
        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }

    /// Cursor trail and click bursts, painted above everything else.
    fn render_pointer_decor(&mut self, ctx: &egui::Context) {
        let pal = self.palette();

        if ctx.input(|i| i.pointer.any_pressed()) {
            if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
                self.effects.spawn_burst(pos);
            }
        }

        let pointer = ctx.input(|i| i.pointer.latest_pos());
        self.effects.advance_trail(pointer);
        self.effects.prune_bursts();

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("pointer_decor"),
        ));
        self.effects.paint_pointer_decor(&painter, pal);
    }
}
