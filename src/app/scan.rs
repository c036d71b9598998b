//! Simulated scan driver
//!
//! The scan is a fixed sequence of timed progress steps followed by
//! synthetic listing generation, running as a background task so the UI
//! stays responsive. The task publishes into the shared `ScanState` and the
//! update loop polls it each frame.

use super::App;
use crate::catalog::Municipality;
use crate::constants::{LISTINGS_PER_SCAN, SCAN_STEPS, SCAN_STEP_MILLIS};
use crate::generator::generate_listings;
use crate::types::{ScanPhase, ScanState};
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Advance through the progress table, then fabricate the batch.
fn spawn_scan_task(
    municipality: &'static Municipality,
    state: Arc<Mutex<ScanState>>,
    token: CancellationToken,
    ctx: egui::Context,
    runtime: &tokio::runtime::Runtime,
) {
    runtime.spawn(async move {
        for &(progress, message) in SCAN_STEPS {
            tokio::select! {
                _ = token.cancelled() => {
                    let mut s = state.lock().unwrap();
                    s.phase = ScanPhase::Cancelled;
                    s.progress = 0;
                    s.message.clear();
                    drop(s);
                    ctx.request_repaint();
                    info!(municipality = municipality.name, "Scan cancelled");
                    return;
                }
                _ = tokio::time::sleep(Duration::from_millis(SCAN_STEP_MILLIS)) => {
                    let mut s = state.lock().unwrap();
                    s.progress = progress;
                    s.message = message.to_string();
                    drop(s);
                    ctx.request_repaint();
                }
            }
        }

        let mut rng = StdRng::from_os_rng();
        let listings = generate_listings(&mut rng, municipality, LISTINGS_PER_SCAN);

        let mut s = state.lock().unwrap();
        s.results = Some(listings);
        s.phase = ScanPhase::Complete;
        drop(s);
        ctx.request_repaint();
        info!(
            municipality = municipality.name,
            count = LISTINGS_PER_SCAN,
            "Scan finished"
        );
    });
}

impl App {
    pub fn start_scan(&mut self, ctx: &egui::Context) {
        let Some(municipality) = self.selected_municipality() else {
            return;
        };
        if self.is_scanning() {
            return;
        }

        self.listings.clear();
        self.visible_indices.clear();
        self.stats = None;
        self.expanded = None;

        {
            let mut s = self.scan_state.lock().unwrap();
            s.phase = ScanPhase::Running;
            s.progress = 0;
            s.message = "Starting scan...".to_string();
            s.results = None;
        }

        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());

        info!(
            municipality = municipality.name,
            code = municipality.code,
            "Starting scan"
        );

        spawn_scan_task(
            municipality,
            self.scan_state.clone(),
            token,
            ctx.clone(),
            &self.runtime,
        );
    }

    pub fn cancel_scan(&mut self) {
        if let Some(token) = &self.cancel_token {
            token.cancel();
        }
    }

    /// Collect finished or cancelled scans from the shared state.
    pub fn poll_scan(&mut self) {
        let mut state = self.scan_state.lock().unwrap();
        match state.phase {
            ScanPhase::Complete => {
                let results = state.results.take().unwrap_or_default();
                state.phase = ScanPhase::Idle;
                drop(state);

                self.listings = results;
                self.has_scanned = true;
                self.cancel_token = None;
                self.apply_filters();

                let qualifying = self.visible_indices.len();
                self.show_toast(format!(
                    "Scan complete: {} of {} hotels qualify",
                    qualifying,
                    self.listings.len()
                ));
            }
            ScanPhase::Cancelled => {
                state.phase = ScanPhase::Idle;
                drop(state);
                self.cancel_token = None;
                self.show_toast("Scan cancelled");
            }
            _ => {}
        }
    }
}
