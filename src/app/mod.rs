//! App module - contains the main application state and logic

mod filters;
mod scan;

pub use filters::compute_stats;

use crate::catalog::{municipality_by_code, Municipality};
use crate::constants::*;
use crate::generator::HotelListing;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Scan target & results
    pub(crate) selected_code: Option<String>,
    pub(crate) listings: Vec<HotelListing>,
    pub(crate) visible_indices: Vec<usize>,
    pub(crate) stats: Option<ScanStats>,
    pub(crate) has_scanned: bool,
    pub(crate) expanded: Option<String>,
    // Filters
    pub(crate) min_revenue: i64,
    pub(crate) min_equity: u8,
    pub(crate) show_filters: bool,
    // Sorting
    pub(crate) sort_key: SortKey,
    pub(crate) sort_direction: SortDirection,
    // View mode
    pub(crate) compact_view: bool,
    // Scan state
    pub(crate) scan_state: Arc<Mutex<ScanState>>,
    pub(crate) cancel_token: Option<CancellationToken>,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Chrome
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        // Restore last selection only if the code still exists in the catalog
        let selected_code = settings
            .municipality_code
            .filter(|code| municipality_by_code(code).is_some());

        Self {
            selected_code,
            listings: Vec::new(),
            visible_indices: Vec::new(),
            stats: None,
            has_scanned: false,
            expanded: None,
            min_revenue: settings
                .min_revenue
                .clamp(MIN_REVENUE_FLOOR, MIN_REVENUE_CEIL),
            min_equity: settings.min_equity.clamp(MIN_EQUITY_FLOOR, MIN_EQUITY_CEIL),
            show_filters: settings.show_filters,
            sort_key: settings.sort_key,
            sort_direction: settings.sort_key.default_direction(),
            compact_view: settings.compact_view,
            scan_state: Arc::new(Mutex::new(ScanState::default())),
            cancel_token: None,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            logo_texture: None,
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            municipality_code: self.selected_code.clone(),
            min_revenue: self.min_revenue,
            min_equity: self.min_equity,
            sort_key: self.sort_key,
            compact_view: self.compact_view,
            show_filters: self.show_filters,
        };
        settings.save(&self.data_dir);
    }

    pub fn selected_municipality(&self) -> Option<&'static Municipality> {
        self.selected_code
            .as_deref()
            .and_then(municipality_by_code)
    }

    pub fn is_scanning(&self) -> bool {
        self.scan_state.lock().unwrap().phase == ScanPhase::Running
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }
}
