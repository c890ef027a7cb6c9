//! Action handling
//!
//! Actions are queued in AppState by panels and processed once per frame.

use crate::state::{AppAction, SharedAppState};

/// Dispatch an action to the scene
pub fn dispatch_action(action: AppAction, app_state: &SharedAppState) {
    let mut state = app_state.lock();

    match action {
        AppAction::RotateGear(request) => {
            if let Err(e) = state.scene.apply(request) {
                tracing::warn!("Failed to rotate gear: {}", e);
                state.gesture.end();
            }
        }
        AppAction::ResetRotations => {
            state.scene.reset_rotations();
            tracing::info!("Reset all gear rotations");
        }
        AppAction::RebuildAdjacency => {
            state.scene.rebuild_adjacency();
            tracing::info!(
                "Rebuilt adjacency: {} meshed pairs",
                state.scene.adjacency().edge_count()
            );
        }
        AppAction::ResetScene => {
            state.reset_scene();
            tracing::info!("Reset scene to the default gear train");
        }
    }
}

#[cfg(test)]
mod tests {
    use gt_core::{KinematicsConfig, PropagationRequest};
    use uuid::Uuid;

    use super::*;
    use crate::state::create_shared_state;

    #[test]
    fn test_rotate_action_propagates() {
        let app_state = create_shared_state(KinematicsConfig::default());
        let ids: Vec<Uuid> = app_state.lock().scene.gears().iter().map(|g| g.id()).collect();

        dispatch_action(AppAction::RotateGear(PropagationRequest::new(ids[1], 0.1)), &app_state);

        let state = app_state.lock();
        let left = state.scene.gear(ids[0]).unwrap().rotation();
        assert!((left - (-0.18)).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_unknown_gear_ends_gesture() {
        let app_state = create_shared_state(KinematicsConfig::default());
        let ghost = Uuid::new_v4();
        app_state.lock().gesture.begin(ghost, 0.0);

        dispatch_action(AppAction::RotateGear(PropagationRequest::new(ghost, 0.1)), &app_state);

        assert!(app_state.lock().active_gear().is_none());
    }

    #[test]
    fn test_reset_rotations_action() {
        let app_state = create_shared_state(KinematicsConfig::default());
        let center = app_state.lock().scene.gears()[1].id();
        dispatch_action(AppAction::RotateGear(PropagationRequest::new(center, 1.0)), &app_state);

        dispatch_action(AppAction::ResetRotations, &app_state);

        assert!(app_state.lock().scene.gears().iter().all(|g| g.rotation() == 0.0));
    }
}
