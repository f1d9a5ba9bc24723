//! Status bar panel — bottom bar showing link state, counters, and error info.

use egui::{Color32, RichText, Ui};

use crate::types::{ConnectionStatus, TickStats};

/// Context needed to render the status bar.
pub struct StatusBarContext<'a> {
    pub status: ConnectionStatus,
    pub port_name: &'a str,
    pub stats: &'a TickStats,
    pub last_error: Option<&'a str>,
}

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, ctx: &StatusBarContext<'_>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // === Link status dot + port name ===
        let status_color = match ctx.status {
            ConnectionStatus::Running => Color32::GREEN,
            ConnectionStatus::Connected => Color32::YELLOW,
            ConnectionStatus::Stalled => Color32::RED,
        };
        ui.colored_label(status_color, "●");
        ui.label(RichText::new(format!("{}: {}", ctx.status, ctx.port_name)).small());

        ui.separator();

        ui.label(RichText::new(format!("Samples: {}", ctx.stats.accepted)).small());

        ui.separator();

        let rejected_color = if ctx.stats.rejected > 0 {
            Color32::LIGHT_RED
        } else {
            Color32::GRAY
        };
        ui.colored_label(
            rejected_color,
            RichText::new(format!("Rejected: {}", ctx.stats.rejected)).small(),
        );

        ui.separator();

        let last = match ctx.stats.last_value {
            Some(value) => format!("Last: {:.2}", -value),
            None => "Last: --".to_string(),
        };
        ui.label(RichText::new(last).small());

        if let Some(error) = ctx.last_error {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(Color32::RED, RichText::new(error).small());
            });
        }
    });
}
