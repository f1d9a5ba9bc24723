//! Chart rendering using egui_plot
//!
//! Rendering is split from acquisition: the app captures a [`ChartSnapshot`]
//! after every accepted sample and [`render_chart`] draws whatever snapshot it
//! is given. Frames between accepted samples repaint the same snapshot.
//!
//! # Axes
//!
//! - X: sample index within the history, `0..len`
//! - Y: fixed to `[min(history) - Y_MARGIN, 0]`

use crate::types::History;
use egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

/// Headroom below the smallest stored value
pub const Y_MARGIN: f64 = 10.0;

/// Visible Y range for a set of stored values, `None` when there are none
pub fn y_bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let min = values.into_iter().reduce(f64::min)?;
    Some((min - Y_MARGIN, 0.0))
}

/// Immutable copy of the history as it should be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSnapshot {
    /// (sample index, value) pairs, oldest first
    pub points: Vec<[f64; 2]>,
    /// Lower and upper Y bound
    pub y_bounds: (f64, f64),
}

impl ChartSnapshot {
    /// Capture the current history; an empty history has nothing to draw
    pub fn capture(history: &History) -> Option<Self> {
        let y_bounds = y_bounds(history.iter())?;
        Some(Self {
            points: history.as_plot_points(),
            y_bounds,
        })
    }

    /// Visible X range covering every sample
    pub fn x_bounds(&self) -> (f64, f64) {
        let last = self.points.len().saturating_sub(1) as f64;
        (0.0, last.max(1.0))
    }

    /// Y bounds ordered low to high for the plot transform
    ///
    /// When every stored value is above `Y_MARGIN` the lower bound exceeds
    /// zero; egui_plot collapses an inverted range, so the pair is sorted.
    pub fn plot_y_range(&self) -> (f64, f64) {
        let (y0, y1) = self.y_bounds;
        (y0.min(y1), y0.max(y1))
    }
}

/// Style options for the chart
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub line_width: f32,
    pub color: Color32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: 1.5,
            color: Color32::from_rgb(31, 119, 180),
        }
    }
}

/// Draw a snapshot, or an empty placeholder plot if nothing has arrived yet
pub fn render_chart(ui: &mut Ui, snapshot: Option<&ChartSnapshot>, style: ChartStyle) {
    let plot = Plot::new("distance_plot")
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(true)
        .x_axis_label("Sample")
        .y_axis_label("Distance");

    plot.show(ui, |plot_ui| {
        let Some(snapshot) = snapshot else {
            return;
        };

        let (x_min, x_max) = snapshot.x_bounds();
        let (y_min, y_max) = snapshot.plot_y_range();
        plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
        plot_ui.set_auto_bounds(egui::Vec2b::new(false, false));

        let line = Line::new("distance", PlotPoints::from(snapshot.points.clone()))
            .color(style.color)
            .width(style.line_width);
        plot_ui.line(line);
    });
}
