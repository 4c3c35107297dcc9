mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::{commands::BackendCommand, runtime::spawn_backend_thread};
use controller::events::UiEvent;
use ui::app::DirectoryApp;

#[derive(Parser, Debug)]
#[command(about = "Desktop client for the employee directory")]
struct Args {
    /// Base URL of the employee API, e.g. http://localhost:8080/api/v1
    #[arg(long)]
    api_base_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let mut settings = config::load_settings();
    if let Some(url) = args.api_base_url {
        settings.api_base_url = config::normalize_base_url(&url);
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    spawn_backend_thread(settings.api_base_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Management System")
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Employee Management System",
        options,
        Box::new(|_cc| Ok(Box::new(DirectoryApp::new(cmd_tx, ui_rx)))),
    )
}
