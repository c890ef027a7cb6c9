//! Gear entity

use std::f32::consts::TAU;

use glam::Vec2;
use uuid::Uuid;

use crate::config::GearGeometryConfig;
use crate::constants::{DEFAULT_MODULE, DEFAULT_TEETH, DEFAULT_WIDTH, PICK_RADIUS_FRACTION};

/// A single gear disc.
///
/// Tooth count and radius are fixed at construction. Rotation is an unbounded
/// accumulated angle in radians; it is not wrapped into `[0, 2π)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gear {
    id: Uuid,
    teeth: u32,
    module: f32,
    width: f32,
    radius: f32,
    rotation: f32,
    position: Vec2,
}

impl Default for Gear {
    fn default() -> Self {
        Self::new(DEFAULT_TEETH, DEFAULT_MODULE, DEFAULT_WIDTH)
    }
}

impl Gear {
    /// Create a gear with the default geometry constants.
    ///
    /// Tooth counts below the floor are raised to it rather than rejected.
    pub fn new(teeth: u32, module: f32, width: f32) -> Self {
        Self::with_geometry(teeth, module, width, &GearGeometryConfig::default())
    }

    /// Create a gear with retuned geometry constants
    pub fn with_geometry(teeth: u32, module: f32, width: f32, geometry: &GearGeometryConfig) -> Self {
        let teeth = geometry.clamp_teeth(teeth);
        Self {
            id: Uuid::new_v4(),
            teeth,
            module,
            width,
            radius: geometry.radius(teeth, module),
            rotation: 0.0,
            position: Vec2::ZERO,
        }
    }

    /// Place the gear at a position (builder style)
    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn teeth(&self) -> u32 {
        self.teeth
    }

    pub fn module(&self) -> f32 {
        self.module
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current rotation in radians
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Current rotation in degrees (for display)
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation.to_degrees()
    }

    /// Set the rotation to an absolute angle
    pub fn set_rotation(&mut self, angle: f32) {
        self.rotation = angle;
    }

    /// Add `delta` radians to the rotation
    pub fn rotate_by(&mut self, delta: f32) {
        self.set_rotation(self.rotation + delta);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the gear. Any adjacency built from the old position is stale afterwards.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Radial depth of a tooth beyond the radius
    pub fn tooth_depth(&self) -> f32 {
        self.module * 0.16 + 0.04
    }

    /// Angles of the tooth centers, including the current rotation
    pub fn tooth_angles(&self) -> impl Iterator<Item = f32> + '_ {
        let step = TAU / self.teeth as f32;
        (0..self.teeth).map(move |i| self.rotation + i as f32 * step)
    }

    /// Whether a point lies on the gear body for picking purposes
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.position.distance(point) <= self.radius * PICK_RADIUS_FRACTION
    }
}
