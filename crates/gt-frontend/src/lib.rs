//! Gear Train Viewer
//!
//! egui-based application for turning meshed gears by hand.

pub mod actions;
pub mod app;
pub mod camera;
pub mod config;
pub mod panels;
pub mod state;

// Re-exports for convenience
pub use app::GearTrainApp;
pub use camera::Camera2d;
pub use config::{CONFIG_FILE, load_kinematics_config};
pub use state::{AppAction, AppState, SharedAppState};
