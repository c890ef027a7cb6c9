//! Main application module

use gt_core::KinematicsConfig;

use crate::actions::dispatch_action;
use crate::panels::{Panel, StatsPanel, ViewportPanel};
use crate::state::{AppAction, SharedAppState, create_shared_state};

/// Main application
pub struct GearTrainApp {
    app_state: SharedAppState,
    stats_panel: StatsPanel,
    viewport_panel: ViewportPanel,
}

impl GearTrainApp {
    /// Create a new app holding the default gear train
    pub fn new(_cc: &eframe::CreationContext<'_>, config: KinematicsConfig) -> Self {
        let app_state = create_shared_state(config);
        tracing::info!(
            "Created scene with {} gears",
            app_state.lock().scene.gear_count()
        );

        Self {
            app_state,
            stats_panel: StatsPanel::new(),
            viewport_panel: ViewportPanel::new(),
        }
    }

    /// Process pending actions
    fn process_actions(&mut self) {
        let actions = self.app_state.lock().take_pending_actions();

        for action in actions {
            if matches!(action, AppAction::ResetScene) {
                self.viewport_panel.request_fit();
            }
            dispatch_action(action, &self.app_state);
        }
    }
}

impl eframe::App for GearTrainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_actions();

        egui::SidePanel::right("gear_stats")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.stats_panel.ui(ui, &self.app_state);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.viewport_panel.ui(ui, &self.app_state);
            });
    }

    fn on_exit(&mut self) {
        self.app_state.lock().scene.teardown();
        tracing::info!("Gear train viewer closed");
    }
}
