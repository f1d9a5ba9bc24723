//! Frontend module for the egui UI
//!
//! The window owns the serial connection and the history. Acquisition runs on
//! the UI thread: every frame checks whether the tick interval has elapsed,
//! and if so performs one synchronous read/parse/store step before drawing.
//!
//! # Main Types
//!
//! - [`DistanceGraphApp`] - Application state implementing [`eframe::App`]
//! - [`ChartSnapshot`] - What the chart currently shows
//!
//! # Lifecycle
//!
//! `Connected` until the first tick, `Running` afterwards. A read error moves
//! the app to `Stalled`: no further ticks are run and the chart keeps showing
//! the last snapshot. There is no reconnect.

pub mod plot;
pub mod status_bar;

pub use plot::{render_chart, y_bounds, ChartSnapshot, ChartStyle};
pub use status_bar::{render_status_bar, StatusBarContext};

use crate::backend::{tick, LineSource};
use crate::config::AppConfig;
use crate::types::{ConnectionStatus, History, TickOutcome, TickStats};
use std::time::{Duration, Instant};

/// Window title
pub const WINDOW_TITLE: &str = "Distance Graph";

/// Main application state
pub struct DistanceGraphApp {
    source: Box<dyn LineSource>,
    port_name: String,
    history: History,
    snapshot: Option<ChartSnapshot>,
    status: ConnectionStatus,
    stats: TickStats,
    tick_interval: Duration,
    last_tick: Option<Instant>,
    last_error: Option<String>,
    style: ChartStyle,
}

impl DistanceGraphApp {
    /// Create the app around an already-open line source
    pub fn new(
        source: Box<dyn LineSource>,
        port_name: impl Into<String>,
        config: &AppConfig,
    ) -> Self {
        Self {
            source,
            port_name: port_name.into(),
            history: History::new(),
            snapshot: None,
            status: ConnectionStatus::Connected,
            stats: TickStats::default(),
            tick_interval: config.tick_interval(),
            last_tick: None,
            last_error: None,
            style: ChartStyle {
                line_width: config.ui.line_width,
                ..Default::default()
            },
        }
    }

    /// Run a tick if one is due at `now`. Returns whether a tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.status == ConnectionStatus::Stalled {
            return false;
        }

        let due = self
            .last_tick
            .map_or(true, |last| now.duration_since(last) >= self.tick_interval);
        if !due {
            return false;
        }

        self.last_tick = Some(now);
        self.run_tick();
        true
    }

    /// One read/parse/store step; the snapshot only changes on an accepted sample
    pub fn run_tick(&mut self) -> Option<TickOutcome> {
        if self.status == ConnectionStatus::Stalled {
            return None;
        }

        match tick(self.source.as_mut(), &mut self.history) {
            Ok((outcome, bytes)) => {
                if self.status == ConnectionStatus::Connected {
                    tracing::info!("Receiving from {}", self.port_name);
                    self.status = ConnectionStatus::Running;
                }

                self.stats.record(outcome, bytes);
                if outcome.is_appended() {
                    self.snapshot = ChartSnapshot::capture(&self.history);
                }
                Some(outcome)
            }
            Err(e) => {
                tracing::error!("Acquisition stopped on {}: {}", self.port_name, e);
                self.status = ConnectionStatus::Stalled;
                self.last_error = Some(e.to_string());
                None
            }
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn snapshot(&self) -> Option<&ChartSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn stats(&self) -> &TickStats {
        &self.stats
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl eframe::App for DistanceGraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll(Instant::now());

        if self.status != ConnectionStatus::Stalled {
            ctx.request_repaint_after(self.tick_interval);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            render_status_bar(
                ui,
                &StatusBarContext {
                    status: self.status,
                    port_name: &self.port_name,
                    stats: &self.stats,
                    last_error: self.last_error.as_deref(),
                },
            );
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            render_chart(ui, self.snapshot.as_ref(), self.style);
        });
    }
}
