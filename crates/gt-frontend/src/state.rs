//! Application state module

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use gt_core::{KinematicsConfig, PropagationRequest, RotateGesture, Scene};

/// Actions that can be performed on the app state
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Rotate a gear and everything meshed with it
    RotateGear(PropagationRequest),
    /// Set every gear back to angle zero
    ResetRotations,
    /// Recompute meshed pairs from current positions
    RebuildAdjacency,
    /// Replace the scene with the default three-gear train
    ResetScene,
}

/// Application state
pub struct AppState {
    /// Current scene
    pub scene: Scene,
    /// Right-drag rotate gesture
    pub gesture: RotateGesture,
    /// Gear under the pointer
    pub hovered_gear: Option<Uuid>,
    /// Draw lines between meshed gears
    pub show_mesh_links: bool,
    /// Pending actions
    pending_actions: Vec<AppAction>,
}

impl AppState {
    /// Create a new app state holding the default gear train
    pub fn new(config: KinematicsConfig) -> Self {
        Self {
            scene: Scene::default_train(config),
            gesture: RotateGesture::default(),
            hovered_gear: None,
            show_mesh_links: true,
            pending_actions: Vec::new(),
        }
    }

    /// Queue an action
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take pending actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Gear being rotated, if any
    pub fn active_gear(&self) -> Option<Uuid> {
        self.gesture.active_gear()
    }

    /// Replace the scene with a fresh default train, keeping the configuration
    pub fn reset_scene(&mut self) {
        let config = self.scene.config().clone();
        self.scene.teardown();
        self.scene = Scene::default_train(config);
        self.gesture.end();
        self.hovered_gear = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(KinematicsConfig::default())
    }
}

pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared app state
pub fn create_shared_state(config: KinematicsConfig) -> SharedAppState {
    Arc::new(Mutex::new(AppState::new(config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_pending_actions_drains() {
        let mut state = AppState::default();
        state.queue_action(AppAction::ResetRotations);
        state.queue_action(AppAction::RebuildAdjacency);

        assert_eq!(state.take_pending_actions().len(), 2);
        assert!(state.take_pending_actions().is_empty());
    }

    #[test]
    fn test_reset_scene_replaces_gears() {
        let mut state = AppState::default();
        let old_ids: Vec<Uuid> = state.scene.gears().iter().map(|g| g.id()).collect();
        state.gesture.begin(old_ids[0], 10.0);

        state.reset_scene();

        assert_eq!(state.scene.gear_count(), 3);
        assert!(state.scene.gears().iter().all(|g| !old_ids.contains(&g.id())));
        assert!(state.active_gear().is_none());
    }
}
