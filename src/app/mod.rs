//! App module - contains the main application state and logic

pub mod effects;
mod fragments;
pub mod nav;
pub mod newsletter;

use crate::settings::{self, DiskPreferences, PreferenceStore, Settings, Theme};
use crate::theme::{self, Palette};
use crate::types::{FooterFragment, FragmentSlots, HeaderFragment, NavLink};
use eframe::egui;
use self::effects::Effects;
use self::nav::Page;
use self::newsletter::NewsletterForm;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) prefs: DiskPreferences,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Fragment composition
    pub(crate) fragment_slots: Arc<Mutex<FragmentSlots>>,
    pub(crate) fragments_started: bool,
    // Navigation
    pub(crate) page: Page,
    pub(crate) page_entered: Instant,
    pub(crate) menu_open: bool,
    // Content widgets
    pub(crate) newsletter: NewsletterForm,
    pub(crate) effects: Effects,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Scroll state
    pub(crate) scroll_offset: f32,
    pub(crate) scroll_to_top: bool,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<Instant>,
    // Window bookkeeping
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Restore the persisted theme before anything is painted
        theme::apply_visuals(&cc.egui_ctx, settings.theme);

        Self {
            prefs: DiskPreferences::new(data_dir, settings),
            runtime: tokio::runtime::Runtime::new().unwrap(),
            fragment_slots: Arc::new(Mutex::new(FragmentSlots::default())),
            fragments_started: false,
            page: Page::Home,
            page_entered: Instant::now(),
            menu_open: false,
            newsletter: NewsletterForm::default(),
            effects: Effects::default(),
            logo_texture: None,
            scroll_offset: 0.0,
            scroll_to_top: false,
            toast_message: None,
            toast_start: None,
            window_pos: None,
            window_size: None,
            central_panel_rect: None,
            needs_center: false,
        }
    }

    pub fn current_theme(&self) -> Theme {
        self.prefs.theme()
    }

    pub fn palette(&self) -> &'static Palette {
        theme::palette(self.current_theme())
    }

    /// Flip the theme, repaint the whole visual set, and persist the flag.
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        let next = settings::toggle_theme(&mut self.prefs);
        theme::apply_visuals(ctx, next);
        info!(theme = ?next, "Theme toggled");
    }

    /// Switch pages, restarting the entrance animation. Picking a link also
    /// closes the collapsed menu.
    pub fn set_page(&mut self, page: Page) {
        if page != self.page {
            self.page = page;
            self.page_entered = Instant::now();
            self.scroll_to_top = true;
        }
        self.menu_open = false;
    }

    /// Nav links currently bound: the header fragment's once substituted,
    /// the built-in page list otherwise.
    pub fn nav_links(&self) -> Vec<NavLink> {
        self.fragment_slots
            .lock()
            .unwrap()
            .header
            .loaded()
            .map(|h| h.links.clone())
            .unwrap_or_else(nav::builtin_links)
    }

    pub fn header_fragment(&self) -> Option<HeaderFragment> {
        self.fragment_slots.lock().unwrap().header.loaded().cloned()
    }

    pub fn footer_fragment(&self) -> Option<FooterFragment> {
        self.fragment_slots.lock().unwrap().footer.loaded().cloned()
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some(message);
        self.toast_start = Some(Instant::now());
    }

    pub fn save_settings(&mut self) {
        self.prefs.set_window_geometry(
            self.window_pos.map(|p| (p.x, p.y)),
            self.window_size.map(|s| (s.x, s.y)),
        );
        self.prefs.save();
    }
}
