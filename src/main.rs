#![windows_subsystem = "windows"]
//! Hotel SEO Scanner - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod catalog;
mod constants;
mod export;
mod generator;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use catalog::MUNICIPALITIES;
use constants::*;
use eframe::egui;
use generator::HotelListing;
use tracing::{info, warn};
use types::*;
use ui::components::{issue_chip, opportunity_badge, score_color, score_gauge};
use utils::format_nok;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "hotel-seo-scanner.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hotel_seo_scanner=debug"));

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

    info!(version = APP_VERSION, "Hotel SEO Scanner starting");

    // Load saved window position/size
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
        .with_inner_size(win_size.unwrap_or(egui::vec2(1180.0, 780.0)))
        .with_min_inner_size([980.0, 640.0])
        .with_title(APP_NAME);

    // Window/taskbar icon rasterized from the in-source SVG
    {
        let (rgba, w, h) = utils::rasterize_logo_square(64);
        let icon = egui::IconData {
            rgba,
            width: w,
            height: h,
        };
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

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Collect finished scans from the background task
        self.poll_scan();

        // Keyboard shortcuts
        let mut export_shortcut = false;
        let mut collapse = false;
        ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::E) {
                export_shortcut = true;
            }
            if i.key_pressed(egui::Key::Escape) {
                collapse = true;
            }
        });
        if collapse {
            self.expanded = None;
        }
        if export_shortcut && !self.visible_indices.is_empty() {
            self.export_csv();
        }

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.cancel_scan();
        self.save_settings();
    }
}

// ============================================================================
// SIDE PANEL (selector, filters, scan controls)
// ============================================================================

impl App {
    fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("control_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new().fill(theme::BG_BASE).inner_margin(egui::Margin {
                    left: 16,
                    right: 16,
                    top: 0,
                    bottom: 12,
                }),
            )
            .show(ctx, |ui| {
                let panel_max_rect = ui.max_rect();
                let avail_w = ui.available_width();

                // Header with logo, centered
                ui.add_space(20.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    let texture = self.logo_texture.get_or_insert_with(|| {
                        let (pixels, w, h) = utils::rasterize_logo(avail_w as u32 * 2);
                        ctx.load_texture(
                            "logo",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [w as usize, h as usize],
                                &pixels,
                            ),
                            egui::TextureOptions::LINEAR,
                        )
                    });

                    let aspect = texture.size()[1] as f32 / texture.size()[0] as f32;
                    let logo_w = avail_w * 0.38;
                    let logo_size = egui::vec2(logo_w, logo_w * aspect);
                    ui.image(egui::load::SizedTexture::new(texture.id(), logo_size));

                    ui.add_space(6.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("HOTEL SEO SCANNER")
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Norwegian Hotel Intelligence")
                                .size(theme::FONT_CAPTION)
                                .color(theme::ACCENT_SOFT),
                        )
                        .selectable(false),
                    );
                });
                ui.add_space(14.0);

                // MUNICIPALITY section
                theme::section_frame().show(ui, |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("MUNICIPALITY")
                                .color(theme::TEXT_DIM)
                                .size(theme::FONT_SMALL),
                        )
                        .selectable(false),
                    );
                    ui.add_space(6.0);

                    let selected_text = self
                        .selected_municipality()
                        .map(|m| m.display_label())
                        .unwrap_or_else(|| "Choose a municipality...".to_string());
                    let scanning = self.is_scanning();

                    ui.add_enabled_ui(!scanning, |ui| {
                        egui::ComboBox::from_id_salt("municipality_select")
                            .selected_text(selected_text)
                            .width(ui.available_width())
                            .show_ui(ui, |ui| {
                                for municipality in &MUNICIPALITIES {
                                    let checked =
                                        self.selected_code.as_deref() == Some(municipality.code);
                                    if ui
                                        .selectable_label(checked, municipality.display_label())
                                        .clicked()
                                    {
                                        self.selected_code =
                                            Some(municipality.code.to_string());
                                    }
                                }
                            });
                    });
                });

                ui.add_space(theme::SPACING_SM);

                // FILTERS section (collapsible)
                theme::section_frame().show(ui, |ui| {
                    let caret = if self.show_filters {
                        egui_phosphor::regular::CARET_UP
                    } else {
                        egui_phosphor::regular::CARET_DOWN
                    };
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!(
                                    "{}  FILTERS",
                                    egui_phosphor::regular::FUNNEL
                                ))
                                .color(theme::TEXT_DIM)
                                .size(theme::FONT_SMALL),
                            )
                            .selectable(false),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui
                                    .add(egui::Button::new(caret).frame(false))
                                    .clicked()
                                {
                                    self.show_filters = !self.show_filters;
                                }
                            },
                        );
                    });

                    if self.show_filters {
                        let mut filters_changed = false;
                        ui.add_space(8.0);

                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!(
                                    "Minimum Revenue: {}",
                                    format_nok(self.min_revenue)
                                ))
                                .size(theme::FONT_SECTION)
                                .color(theme::TEXT_MUTED),
                            )
                            .selectable(false),
                        );
                        if theme::threshold_slider(
                            ui,
                            &mut self.min_revenue,
                            MIN_REVENUE_FLOOR,
                            MIN_REVENUE_CEIL,
                            MIN_REVENUE_STEP,
                        ) {
                            filters_changed = true;
                        }

                        ui.add_space(6.0);

                        let mut equity = self.min_equity as i64;
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!(
                                    "Minimum Equity Ratio: {}%",
                                    self.min_equity
                                ))
                                .size(theme::FONT_SECTION)
                                .color(theme::TEXT_MUTED),
                            )
                            .selectable(false),
                        );
                        if theme::threshold_slider(
                            ui,
                            &mut equity,
                            MIN_EQUITY_FLOOR as i64,
                            MIN_EQUITY_CEIL as i64,
                            MIN_EQUITY_STEP as i64,
                        ) {
                            self.min_equity = equity as u8;
                            filters_changed = true;
                        }

                        if filters_changed {
                            self.apply_filters();
                        }
                    }
                });

                ui.add_space(theme::SPACING_MD);

                // Scan controls
                let scanning = self.is_scanning();
                if scanning {
                    let (progress, message) = {
                        let state = self.scan_state.lock().unwrap();
                        (state.progress, state.message.clone())
                    };
                    let municipality_name = self
                        .selected_municipality()
                        .map(|m| m.name)
                        .unwrap_or("...");

                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("Scanning {}...", municipality_name))
                                    .size(theme::FONT_SECTION)
                                    .color(theme::TEXT_MUTED),
                            )
                            .selectable(false),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(format!("{}%", progress))
                                            .size(theme::FONT_SECTION)
                                            .color(theme::TEXT_MUTED),
                                    )
                                    .selectable(false),
                                );
                            },
                        );
                    });
                    ui.add(
                        egui::ProgressBar::new(progress as f32 / 100.0)
                            .desired_width(ui.available_width())
                            .corner_radius(3.0)
                            .fill(theme::ACCENT),
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(message)
                                .size(theme::FONT_CAPTION)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );

                    ui.add_space(6.0);
                    let cancel_text = format!("{}  Cancel Scan", egui_phosphor::regular::X);
                    if ui
                        .add_sized(
                            [ui.available_width(), theme::BUTTON_HEIGHT],
                            theme::button_danger(cancel_text),
                        )
                        .clicked()
                    {
                        self.cancel_scan();
                    }
                } else {
                    let scan_enabled = self.selected_code.is_some();

                    let scan_rect = ui.available_rect_before_wrap();
                    let scan_rect = egui::Rect::from_min_size(
                        scan_rect.min,
                        egui::vec2(scan_rect.width(), theme::BUTTON_HEIGHT_LARGE),
                    );
                    let response = ui.allocate_rect(scan_rect, egui::Sense::click());

                    let fill = if scan_enabled {
                        theme::BTN_ACCENT
                    } else {
                        theme::BTN_DISABLED
                    };
                    let (fill, draw_rect) = if scan_enabled {
                        theme::button_visual(&response, fill, scan_rect)
                    } else {
                        (fill, scan_rect)
                    };
                    ui.painter()
                        .rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
                    let text_color = if scan_enabled {
                        egui::Color32::from_rgb(0x50, 0x07, 0x24)
                    } else {
                        theme::TEXT_DIM
                    };
                    ui.painter().text(
                        draw_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        format!("{}  Start Scan", egui_phosphor::regular::MAGNIFYING_GLASS),
                        egui::FontId::proportional(theme::FONT_BODY),
                        text_color,
                    );
                    if response.hovered() {
                        ui.ctx().set_cursor_icon(if scan_enabled {
                            egui::CursorIcon::PointingHand
                        } else {
                            egui::CursorIcon::NotAllowed
                        });
                    }
                    if !scan_enabled {
                        response.on_hover_text("Select a municipality first");
                    } else if response.clicked() {
                        self.start_scan(ctx);
                    }
                }

                // Version line at absolute panel bottom
                let font = egui::FontId::proportional(theme::FONT_CAPTION);
                let version_color = egui::Color32::from_rgb(0x3b, 0x47, 0x5e);
                ui.painter().text(
                    egui::pos2(panel_max_rect.center().x, panel_max_rect.bottom() - 10.0),
                    egui::Align2::CENTER_CENTER,
                    format!("v{}  •  simulated data only", APP_VERSION),
                    font,
                    version_color,
                );
            });
    }
}

// ============================================================================
// CENTRAL PANEL (stats, results)
// ============================================================================

impl App {
    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                // Store panel rect for toast positioning
                self.central_panel_rect = Some(ui.max_rect());

                let scanning = self.is_scanning();

                // Header bar
                ui.horizontal(|ui| {
                    let header = if self.visible_indices.is_empty() {
                        if self.has_scanned {
                            format!("Scanned {} hotels", self.listings.len())
                        } else {
                            "Hotel SEO Scanner".to_string()
                        }
                    } else {
                        format!("Found {} Opportunities", self.visible_indices.len())
                    };
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(header)
                                .size(theme::FONT_HEADING)
                                .strong(),
                        )
                        .selectable(false),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Export CSV
                        let export_enabled = !self.visible_indices.is_empty() && !scanning;
                        let export_text = format!(
                            "{}  Export CSV",
                            egui_phosphor::regular::DOWNLOAD_SIMPLE
                        );
                        if ui
                            .add_enabled(export_enabled, theme::button(export_text))
                            .on_hover_text("Ctrl+E")
                            .clicked()
                        {
                            self.export_csv();
                        }

                        // View toggle (cards/table) - show icon for the view we'll switch TO
                        let view_icon = if self.compact_view {
                            egui_phosphor::regular::SQUARES_FOUR
                        } else {
                            egui_phosphor::regular::LIST
                        };
                        let view_tooltip = if self.compact_view {
                            "Switch to Card view"
                        } else {
                            "Switch to Table view"
                        };
                        if ui
                            .add(egui::Button::new(view_icon).frame(false))
                            .on_hover_text(view_tooltip)
                            .clicked()
                        {
                            self.compact_view = !self.compact_view;
                        }

                        // Sort dropdown
                        let selected_text = if SortKey::DROPDOWN.contains(&self.sort_key) {
                            self.sort_key.dropdown_label()
                        } else {
                            "Custom sort"
                        };
                        egui::ComboBox::from_id_salt("sort_select")
                            .selected_text(selected_text)
                            .show_ui(ui, |ui| {
                                for key in SortKey::DROPDOWN {
                                    if ui
                                        .selectable_label(
                                            self.sort_key == key,
                                            key.dropdown_label(),
                                        )
                                        .clicked()
                                    {
                                        self.set_sort_key(key);
                                    }
                                }
                            });
                    });
                });

                ui.add_space(theme::SPACING_MD);

                // Stats summary row
                if let Some(stats) = self.stats.clone() {
                    self.render_stats_row(ui, &stats);
                    ui.add_space(theme::SPACING_MD);
                }

                if scanning {
                    ui.vertical_centered(|ui| {
                        ui.add_space(ui.available_height() / 3.0);
                        ui.spinner();
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new("Scanning for hotel businesses...")
                                .size(theme::FONT_HEADING)
                                .color(theme::TEXT_MUTED),
                        );
                    });
                } else if !self.has_scanned {
                    self.render_empty_state(ui);
                } else if self.visible_indices.is_empty() {
                    self.render_no_results(ui);
                } else if self.compact_view {
                    self.render_table_view(ui);
                } else {
                    self.render_card_list(ui);
                }
            });
    }

    fn render_stats_row(&mut self, ui: &mut egui::Ui, stats: &ScanStats) {
        ui.columns(4, |cols| {
            let tiles: [(&str, String, egui::Color32); 4] = [
                (
                    "Hotels Scanned",
                    stats.total_scanned.to_string(),
                    theme::TEXT_PRIMARY,
                ),
                (
                    "Opportunities Found",
                    stats.qualifying.to_string(),
                    theme::ACCENT_SOFT,
                ),
                (
                    "Avg. Opportunity Score",
                    stats.avg_opportunity.to_string(),
                    theme::ACCENT_SOFT,
                ),
                (
                    "Most Common Issue",
                    stats.top_issue.clone(),
                    theme::STATUS_WARNING,
                ),
            ];
            for (col, (caption, value, color)) in cols.iter_mut().zip(tiles) {
                theme::stat_tile_frame().show(col, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        let size = if value.len() > 6 { 14.0 } else { 22.0 };
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(value).size(size).strong().color(color),
                            )
                            .selectable(false),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(caption)
                                    .size(theme::FONT_SECTION)
                                    .color(theme::TEXT_MUTED),
                            )
                            .selectable(false),
                        );
                    });
                });
            }
        });
    }

    fn render_empty_state(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(
                egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                    .size(48.0)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Ready to Scan")
                    .size(theme::FONT_HEADING)
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(
                    "Select a Norwegian municipality and click \"Start Scan\" to discover \
                     hotels with strong finances and weak SEO presence.",
                )
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_DIM),
            );
        });
    }

    fn render_no_results(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(
                egui::RichText::new(egui_phosphor::regular::FUNNEL_X)
                    .size(48.0)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("No hotels match your filters")
                    .size(theme::FONT_HEADING)
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(16.0);
            if ui
                .add(theme::button(format!(
                    "{}  Reset Filters",
                    egui_phosphor::regular::FUNNEL_X
                )))
                .clicked()
            {
                self.min_revenue = DEFAULT_MIN_REVENUE;
                self.min_equity = DEFAULT_MIN_EQUITY;
                self.apply_filters();
            }
        });
    }

    // ========================================================================
    // CARD VIEW
    // ========================================================================

    fn render_card_list(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let indices = self.visible_indices.clone();
                for idx in indices {
                    let listing = self.listings[idx].clone();
                    self.render_card(ui, &listing);
                    ui.add_space(theme::SPACING_MD);
                }

                ui.add_space(theme::SPACING_MD);
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(
                                "Data sourced from Brønnøysundregistrene (simulated) • \
                                 SEO analysis powered by on-page metrics",
                            )
                            .size(theme::FONT_CAPTION)
                            .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
            });
    }

    fn render_card(&mut self, ui: &mut egui::Ui, listing: &HotelListing) {
        let is_expanded = self.expanded.as_deref() == Some(listing.id.as_str());

        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            // Top row: identity on the left, scores on the right
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(egui_phosphor::regular::BUILDINGS)
                                    .size(theme::FONT_BODY)
                                    .color(theme::ACCENT_SOFT),
                            )
                            .selectable(false),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&listing.name)
                                    .size(theme::FONT_HEADING)
                                    .strong(),
                            )
                            .truncate()
                            .selectable(false),
                        );
                    });
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{}  {}, {}",
                                egui_phosphor::regular::MAP_PIN,
                                listing.municipality,
                                listing.region
                            ))
                            .size(theme::FONT_SECTION)
                            .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    opportunity_badge(ui, listing.opportunity_score);
                    score_gauge(ui, listing.seo_score, "SEO", false);
                    score_gauge(ui, listing.financial_score, "Financial", true);
                });
            });

            ui.add_space(theme::SPACING_MD);
            ui.separator();
            ui.add_space(theme::SPACING_SM);

            // Metrics row
            ui.columns(3, |cols| {
                let metrics: [(&str, egui::Color32, &str, String); 3] = [
                    (
                        egui_phosphor::regular::CURRENCY_CIRCLE_DOLLAR,
                        theme::STATUS_SUCCESS,
                        "Revenue",
                        format_nok(listing.revenue),
                    ),
                    (
                        egui_phosphor::regular::TREND_UP,
                        egui::Color32::from_rgb(0x60, 0xa5, 0xfa),
                        "Equity Ratio",
                        format!("{}%", listing.equity),
                    ),
                    (
                        egui_phosphor::regular::USERS,
                        egui::Color32::from_rgb(0xc0, 0x84, 0xfc),
                        "Employees",
                        listing.employees.to_string(),
                    ),
                ];
                for (col, (icon, icon_color, caption, value)) in cols.iter_mut().zip(metrics) {
                    col.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(icon)
                                    .size(theme::FONT_BODY)
                                    .color(icon_color),
                            )
                            .selectable(false),
                        );
                        ui.vertical(|ui| {
                            ui.spacing_mut().item_spacing.y = 0.0;
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(caption)
                                        .size(theme::FONT_CAPTION)
                                        .color(theme::TEXT_DIM),
                                )
                                .selectable(false),
                            );
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(value).size(theme::FONT_LABEL).strong(),
                                )
                                .selectable(false),
                            );
                        });
                    });
                }
            });

            ui.add_space(theme::SPACING_SM);

            // Expand/collapse toggle
            let toggle_text = if is_expanded {
                format!("Hide Details  {}", egui_phosphor::regular::CARET_UP)
            } else {
                format!("View Details  {}", egui_phosphor::regular::CARET_DOWN)
            };
            ui.vertical_centered(|ui| {
                let resp = ui.add(
                    egui::Label::new(
                        egui::RichText::new(toggle_text)
                            .size(theme::FONT_SECTION)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false)
                    .sense(egui::Sense::click()),
                );
                if resp.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if resp.clicked() {
                    self.expanded = if is_expanded {
                        None
                    } else {
                        Some(listing.id.clone())
                    };
                }
            });

            if is_expanded {
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!(
                            "{}  SEO Issues Found",
                            egui_phosphor::regular::WARNING
                        ))
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(theme::STATUS_WARNING),
                    )
                    .selectable(false),
                );
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for issue in &listing.seo_issues {
                        issue_chip(ui, issue);
                    }
                });

                ui.add_space(theme::SPACING_MD);

                ui.columns(2, |cols| {
                    cols[0].vertical(|ui| {
                        detail_caption(ui, "Website");
                        let resp = ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!(
                                    "{}  {}  {}",
                                    egui_phosphor::regular::GLOBE,
                                    listing.website.trim_start_matches("https://"),
                                    egui_phosphor::regular::ARROW_SQUARE_OUT
                                ))
                                .size(theme::FONT_LABEL)
                                .color(theme::ACCENT_SOFT),
                            )
                            .selectable(false)
                            .sense(egui::Sense::click()),
                        );
                        if resp.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        if resp.clicked() {
                            let _ = open::that(&listing.website);
                        }

                        ui.add_space(6.0);
                        detail_caption(ui, "Email");
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&listing.contact)
                                    .size(theme::FONT_LABEL)
                                    .color(theme::ACCENT_SOFT),
                            )
                            .selectable(false),
                        );
                    });
                    cols[1].vertical(|ui| {
                        detail_caption(ui, "Organization Number");
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&listing.org_number)
                                    .size(theme::FONT_LABEL)
                                    .monospace(),
                            )
                            .selectable(false),
                        );

                        ui.add_space(6.0);
                        detail_caption(ui, "Phone");
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&listing.phone).size(theme::FONT_LABEL),
                            )
                            .selectable(false),
                        );
                    });
                });
            }
        });
    }

    // ========================================================================
    // TABLE VIEW
    // ========================================================================

    fn render_table_view(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        let row_height = 30.0;
        let header_height = 36.0;

        // Proportional widths based on the available space
        let available_width = ui.available_width();
        let total_parts = 10.5; // Name(2.5)+Municipality(1.5)+Revenue(1.5)+Equity(1)+Employees(1)+SEO(1)+Financial(1)+Opportunity(1)
        let part = available_width / total_parts;

        let mut table = TableBuilder::new(ui)
            .striped(false)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0);

        table = table.column(Column::exact(part * 2.5).clip(true)); // Name
        table = table.column(Column::exact(part * 1.5).clip(true)); // Location
        table = table.column(Column::exact(part * 1.5).clip(true)); // Revenue
        table = table.column(Column::exact(part * 1.0)); // Equity
        table = table.column(Column::exact(part * 1.0)); // Employees
        table = table.column(Column::exact(part * 1.0)); // SEO
        table = table.column(Column::exact(part * 1.0)); // Financial
        table = table.column(Column::exact(part * 1.0)); // Opportunity

        let header_cols: [(Option<SortKey>, &str); 8] = [
            (Some(SortKey::Name), "NAME"),
            (None, "LOCATION"),
            (Some(SortKey::Revenue), "REVENUE"),
            (Some(SortKey::Equity), "EQUITY"),
            (Some(SortKey::Employees), "STAFF"),
            (Some(SortKey::Seo), "SEO"),
            (Some(SortKey::Financial), "FINANCIAL"),
            (Some(SortKey::Opportunity), "OPPORTUNITY"),
        ];

        table
            .header(header_height, |mut header| {
                let mut sort_request: Option<SortKey> = None;

                for (key, title) in header_cols {
                    header.col(|ui| {
                        if let Some(key) = key {
                            let is_sorted = self.sort_key == key;
                            let icon = if is_sorted {
                                match self.sort_direction {
                                    SortDirection::Ascending => egui_phosphor::regular::CARET_UP,
                                    SortDirection::Descending => {
                                        egui_phosphor::regular::CARET_DOWN
                                    }
                                }
                            } else {
                                egui_phosphor::regular::CARET_UP_DOWN
                            };
                            let color = if is_sorted {
                                egui::Color32::WHITE
                            } else {
                                theme::TEXT_MUTED
                            };
                            let resp = ui.add(
                                egui::Label::new(
                                    egui::RichText::new(format!("{} {}", title, icon))
                                        .size(theme::FONT_SECTION)
                                        .strong()
                                        .color(color),
                                )
                                .selectable(false)
                                .sense(egui::Sense::click()),
                            );
                            if resp.clicked() {
                                sort_request = Some(key);
                            }
                        } else {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(title)
                                        .size(theme::FONT_SECTION)
                                        .strong()
                                        .color(theme::TEXT_MUTED),
                                )
                                .selectable(false),
                            );
                        }
                    });
                }

                if let Some(key) = sort_request {
                    self.toggle_sort_column(key);
                }
            })
            .body(|body| {
                let indices = self.visible_indices.clone();
                body.rows(row_height, indices.len(), |mut row| {
                    let listing = &self.listings[indices[row.index()]];

                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&listing.name)
                                    .size(theme::FONT_BODY)
                                    .strong(),
                            )
                            .truncate()
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&listing.municipality)
                                    .color(theme::TEXT_MUTED),
                            )
                            .truncate()
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(egui::RichText::new(format_nok(listing.revenue)))
                                .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(egui::RichText::new(format!(
                                "{}%",
                                listing.equity
                            )))
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(egui::RichText::new(
                                listing.employees.to_string(),
                            ))
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(listing.seo_score.to_string())
                                    .color(score_color(listing.seo_score, false)),
                            )
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(listing.financial_score.to_string())
                                    .color(score_color(listing.financial_score, true)),
                            )
                            .selectable(false),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(listing.opportunity_score.to_string())
                                    .strong()
                                    .color(theme::ACCENT),
                            )
                            .selectable(false),
                        );
                    });
                });
            });
    }

    // ========================================================================
    // EXPORT & TOASTS
    // ========================================================================

    fn export_csv(&mut self) {
        if self.visible_indices.is_empty() {
            return;
        }

        let code = self
            .selected_code
            .clone()
            .unwrap_or_else(|| "all".to_string());
        let file_name = export::export_file_name(&code, chrono::Local::now().date_naive());

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&file_name)
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };

        let listings: Vec<&HotelListing> = self
            .visible_indices
            .iter()
            .map(|&i| &self.listings[i])
            .collect();

        match export::export_to_path(&path, &listings) {
            Ok(rows) => self.show_toast(format!("Exported {} listings", rows)),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "CSV export failed");
                self.show_toast(format!("Export failed: {}", e));
            }
        }
    }

    /// Bottom-right toast, 3s visible then fade, pause on hover
    fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect)
        else {
            return;
        };

        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);

        let response = egui::Area::new(egui::Id::new("status_toast"))
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
                    .fill(egui::Color32::from_rgba_unmultiplied(
                        0x10,
                        0x18,
                        0x2b,
                        (230.0 * alpha) as u8,
                    ))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgba_unmultiplied(
                            theme::ACCENT.r(),
                            theme::ACCENT.g(),
                            theme::ACCENT.b(),
                            (100.0 * alpha) as u8,
                        ),
                    ))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(msg).color(
                            egui::Color32::from_rgba_unmultiplied(
                                255,
                                255,
                                255,
                                (255.0 * alpha) as u8,
                            ),
                        ));
                    });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
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
}

fn detail_caption(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_CAPTION)
                .color(theme::TEXT_DIM),
        )
        .selectable(false),
    );
}
