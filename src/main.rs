use std::process::ExitCode;

use drone::{App, FrameDriver, SimConfig};
use eframe::egui;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    let config = match std::env::args_os().nth(1) {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::error!(%err, path = ?path, "failed to load config");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };
    let from_file = config.is_some();

    let driver = match FrameDriver::new(config.unwrap_or_default()) {
        Ok(driver) => driver,
        Err(err) => {
            tracing::error!(%err, "invalid config");
            return ExitCode::FAILURE;
        }
    };

    let result = eframe::run_native(
        "Drone Simulator",
        eframe::NativeOptions {
            renderer: eframe::Renderer::Wgpu,
            initial_window_size: Some(egui::vec2(800.0, 800.0)),
            ..Default::default()
        },
        Box::new(move |cc| Box::new(App::new(cc, driver, from_file))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "window closed with an error");
            ExitCode::FAILURE
        }
    }
}
