//! Distance Graph - Main Entry Point
//!
//! Checks that the configured serial port exists, opens it, and shows the
//! live distance chart until the window is closed.

use distance_graph::{
    backend::{ensure_port_available, list_serial_ports, SerialConnection},
    config::AppConfig,
    error::DistanceGraphError,
    frontend::{DistanceGraphApp, WINDOW_TITLE},
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,distance_graph=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Distance Graph");

    let config = AppConfig::load_or_default();
    let port_name = config.serial.port_name.clone();

    let available_ports = list_serial_ports();
    if !available_ports.is_empty() {
        println!("Available serial ports: {:?}", available_ports);
    }

    if let Err(e) = ensure_port_available(&available_ports, &port_name) {
        eprintln!("{}", e);
        tracing::debug!("Startup aborted: {:?}", e);
        return ExitCode::FAILURE;
    }

    let connection = match SerialConnection::open(&port_name) {
        Ok(connection) => connection,
        Err(e) => {
            tracing::error!("{}", e);
            show_serial_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let result = eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| {
            if config.ui.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            let port_name = connection.port_name().to_string();
            Ok(Box::new(DistanceGraphApp::new(
                Box::new(connection),
                port_name,
                &config,
            )))
        }),
    );

    tracing::info!("Shutting down...");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Window error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Blocking dialog for a port that exists but could not be opened
fn show_serial_error(error: &DistanceGraphError) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Serial Port Error")
        .set_description(error.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
