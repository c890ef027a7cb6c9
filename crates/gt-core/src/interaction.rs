//! Pointer drag to gear rotation
//!
//! A rotate gesture starts on a gear picked by the caller and turns every
//! horizontal pointer move into one propagation request. There is no batching
//! or easing: one move, one request.

use uuid::Uuid;

use crate::config::InteractionConfig;
use crate::propagation::PropagationRequest;

/// Rotate gesture state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RotateGesture {
    #[default]
    Idle,
    Rotating {
        gear: Uuid,
        /// Pointer x of the previous event (pixels)
        last_x: f32,
    },
}

impl RotateGesture {
    /// Start rotating `gear` with the pointer at `pointer_x`
    pub fn begin(&mut self, gear: Uuid, pointer_x: f32) {
        *self = RotateGesture::Rotating {
            gear,
            last_x: pointer_x,
        };
    }

    /// Pointer moved to `pointer_x`; returns the rotation to propagate while active
    pub fn drag(&mut self, pointer_x: f32, config: &InteractionConfig) -> Option<PropagationRequest> {
        match self {
            RotateGesture::Idle => None,
            RotateGesture::Rotating { gear, last_x } => {
                let delta_x = pointer_x - *last_x;
                *last_x = pointer_x;
                Some(PropagationRequest::new(
                    *gear,
                    delta_x * config.rotate_sensitivity,
                ))
            }
        }
    }

    /// Release the gesture
    pub fn end(&mut self) {
        *self = RotateGesture::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RotateGesture::Rotating { .. })
    }

    /// Gear being rotated, if any
    pub fn active_gear(&self) -> Option<Uuid> {
        match self {
            RotateGesture::Idle => None,
            RotateGesture::Rotating { gear, .. } => Some(*gear),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_drag_yields_nothing() {
        let mut gesture = RotateGesture::default();
        assert!(gesture.drag(120.0, &InteractionConfig::default()).is_none());
        assert!(!gesture.is_active());
    }

    #[test]
    fn test_drag_uses_delta_from_previous_event() {
        let config = InteractionConfig::default();
        let gear = Uuid::new_v4();
        let mut gesture = RotateGesture::default();
        gesture.begin(gear, 100.0);

        let first = gesture.drag(110.0, &config).unwrap();
        assert_eq!(first.source, gear);
        assert!((first.delta_angle - 0.1).abs() < 1e-6);

        let second = gesture.drag(105.0, &config).unwrap();
        assert!((second.delta_angle - (-0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_move_still_yields_request() {
        let mut gesture = RotateGesture::default();
        gesture.begin(Uuid::new_v4(), 50.0);
        let request = gesture.drag(50.0, &InteractionConfig::default()).unwrap();
        assert_eq!(request.delta_angle, 0.0);
    }

    #[test]
    fn test_custom_sensitivity() {
        let config = InteractionConfig {
            rotate_sensitivity: 0.5,
        };
        let mut gesture = RotateGesture::default();
        gesture.begin(Uuid::new_v4(), 0.0);
        assert_eq!(gesture.drag(4.0, &config).unwrap().delta_angle, 2.0);
    }

    #[test]
    fn test_end_releases_gear() {
        let gear = Uuid::new_v4();
        let mut gesture = RotateGesture::default();
        gesture.begin(gear, 0.0);
        assert_eq!(gesture.active_gear(), Some(gear));

        gesture.end();
        assert_eq!(gesture.active_gear(), None);
        assert!(gesture.drag(10.0, &InteractionConfig::default()).is_none());
    }
}
