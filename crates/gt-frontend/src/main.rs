//! Gear train viewer entry point

use std::path::Path;

use gt_frontend::{CONFIG_FILE, GearTrainApp, load_kinematics_config};

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gt_frontend=debug,gt_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting gear train viewer");

    let config = load_kinematics_config(Path::new(CONFIG_FILE));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gear Train"),
        ..Default::default()
    };

    eframe::run_native(
        "gt",
        native_options,
        Box::new(move |cc| Ok(Box::new(GearTrainApp::new(cc, config)))),
    )
}
