//! Gear scene: owned gears, their adjacency and the session lifecycle
//!
//! The adjacency graph is a snapshot. Adding or moving a gear marks it stale
//! and it stays stale until `rebuild_adjacency` is called; propagation on a
//! stale graph still runs against the old snapshot.

use glam::Vec2;
use uuid::Uuid;

use crate::adjacency::Adjacency;
use crate::config::KinematicsConfig;
use crate::gear::Gear;
use crate::gear_set::GearSet;
use crate::propagation::{PropagationReport, PropagationRequest, propagate};
use crate::stats::SceneStats;

/// Teeth of the demonstration train, left to right
pub const DEFAULT_TRAIN_TEETH: [u32; 3] = [20, 36, 48];

/// Module of the demonstration train
pub const DEFAULT_TRAIN_MODULE: f32 = 1.0;

/// Width of the demonstration train
pub const DEFAULT_TRAIN_WIDTH: f32 = 0.8;

/// A gear scene
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: String,
    gears: GearSet,
    adjacency: Adjacency,
    /// Whether gears changed since the last adjacency rebuild
    adjacency_stale: bool,
    config: KinematicsConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("gears")
    }
}

impl Scene {
    /// Create an empty scene with default configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, KinematicsConfig::default())
    }

    /// Create an empty scene
    pub fn with_config(name: impl Into<String>, config: KinematicsConfig) -> Self {
        Self {
            name: name.into(),
            gears: GearSet::new(),
            adjacency: Adjacency::default(),
            adjacency_stale: false,
            config,
        }
    }

    /// Three meshed gears in a row, the middle one at the origin, adjacency built
    pub fn default_train(config: KinematicsConfig) -> Self {
        let mut scene = Self::with_config("gear train", config);
        let geometry = scene.config.geometry;
        let [left, center, right] = DEFAULT_TRAIN_TEETH
            .map(|teeth| Gear::with_geometry(teeth, DEFAULT_TRAIN_MODULE, DEFAULT_TRAIN_WIDTH, &geometry));

        let left_x = -(left.radius() + center.radius());
        let right_x = center.radius() + right.radius();

        scene.add_gear(left.at(Vec2::new(left_x, 0.0)));
        scene.add_gear(center.at(Vec2::ZERO));
        scene.add_gear(right.at(Vec2::new(right_x, 0.0)));

        scene.rebuild_adjacency();
        scene
    }

    pub fn config(&self) -> &KinematicsConfig {
        &self.config
    }

    /// Replace the configuration. Tolerances may have changed, so adjacency is stale.
    pub fn set_config(&mut self, config: KinematicsConfig) {
        self.config = config;
        self.adjacency_stale = true;
    }

    // ============== Gear Management ==============

    /// Add a gear, returns its ID
    pub fn add_gear(&mut self, gear: Gear) -> Uuid {
        self.adjacency_stale = true;
        self.gears.insert(gear)
    }

    /// Create a gear at the origin using the scene's geometry settings
    pub fn create_gear(&mut self, teeth: u32, module: f32, width: f32) -> Uuid {
        let gear = Gear::with_geometry(teeth, module, width, &self.config.geometry);
        self.add_gear(gear)
    }

    /// Move `gear` so it touches `anchor` on the side given by `direction`
    pub fn place_tangent(&mut self, gear: Uuid, anchor: Uuid, direction: Vec2) -> Result<Vec2, SceneError> {
        let anchor_gear = self.gears.get(anchor).ok_or(SceneError::GearNotFound(anchor))?;
        let moving = self.gears.get(gear).ok_or(SceneError::GearNotFound(gear))?;

        let direction = direction.try_normalize().unwrap_or(Vec2::X);
        let position =
            anchor_gear.position() + direction * (anchor_gear.radius() + moving.radius());

        self.set_gear_position(gear, position)?;
        Ok(position)
    }

    /// Create a gear already touching `anchor` on the side given by `direction`
    pub fn place_meshed(
        &mut self,
        anchor: Uuid,
        teeth: u32,
        module: f32,
        width: f32,
        direction: Vec2,
    ) -> Result<Uuid, SceneError> {
        if !self.gears.contains(anchor) {
            return Err(SceneError::GearNotFound(anchor));
        }
        let id = self.create_gear(teeth, module, width);
        self.place_tangent(id, anchor, direction)?;
        Ok(id)
    }

    /// Move a gear; adjacency is stale until rebuilt
    pub fn set_gear_position(&mut self, id: Uuid, position: Vec2) -> Result<(), SceneError> {
        let gear = self.gears.get_mut(id).ok_or(SceneError::GearNotFound(id))?;
        gear.set_position(position);
        self.adjacency_stale = true;
        Ok(())
    }

    /// Set a gear's rotation directly (initialization or reset)
    pub fn set_rotation(&mut self, id: Uuid, angle: f32) -> Result<(), SceneError> {
        let gear = self.gears.get_mut(id).ok_or(SceneError::GearNotFound(id))?;
        gear.set_rotation(angle);
        Ok(())
    }

    /// Set every rotation back to zero
    pub fn reset_rotations(&mut self) {
        for gear in self.gears.iter_mut() {
            gear.set_rotation(0.0);
        }
    }

    // ============== Adjacency ==============

    /// Recompute which gears are meshed from current positions
    pub fn rebuild_adjacency(&mut self) {
        self.adjacency = Adjacency::build(self.gears.as_slice(), &self.config.tolerance);
        self.adjacency_stale = false;
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn is_adjacency_stale(&self) -> bool {
        self.adjacency_stale
    }

    // ============== Rotation ==============

    /// Rotate `source` by `delta` radians and propagate through meshed gears
    pub fn propagate(&mut self, source: Uuid, delta: f32) -> Result<PropagationReport, SceneError> {
        if !self.gears.contains(source) {
            return Err(SceneError::GearNotFound(source));
        }
        if self.adjacency_stale {
            tracing::warn!("Propagating rotation on a stale adjacency graph");
        }
        Ok(propagate(&mut self.gears, &self.adjacency, source, delta))
    }

    /// Apply a request produced by a rotate gesture
    pub fn apply(&mut self, request: PropagationRequest) -> Result<PropagationReport, SceneError> {
        self.propagate(request.source, request.delta_angle)
    }

    // ============== Queries ==============

    /// Gears in insertion order
    pub fn gears(&self) -> &[Gear] {
        self.gears.as_slice()
    }

    pub fn gear(&self, id: Uuid) -> Option<&Gear> {
        self.gears.get(id)
    }

    pub fn gear_count(&self) -> usize {
        self.gears.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gears.is_empty()
    }

    /// Gear under a point, preferring the one whose center is closest
    pub fn gear_at(&self, point: Vec2) -> Option<Uuid> {
        self.gears
            .iter()
            .filter(|gear| gear.contains_point(point))
            .min_by(|a, b| {
                let da = a.position().distance_squared(point);
                let db = b.position().distance_squared(point);
                da.total_cmp(&db)
            })
            .map(Gear::id)
    }

    /// Smallest radius around the origin that contains every gear (teeth included)
    pub fn extent(&self) -> f32 {
        self.gears
            .iter()
            .map(|gear| gear.position().length() + gear.radius() + gear.tooth_depth())
            .fold(0.0, f32::max)
    }

    /// Largest gear radius
    pub fn max_radius(&self) -> f32 {
        self.gears.iter().map(Gear::radius).fold(0.0, f32::max)
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            name: self.name.clone(),
            ..SceneStats::from_gears(self.gears.iter())
        }
    }

    // ============== Lifecycle ==============

    /// Drop every gear and the adjacency graph
    pub fn teardown(&mut self) {
        self.gears.clear();
        self.adjacency.clear();
        self.adjacency_stale = false;
    }
}

/// Scene-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SceneError {
    #[error("Gear not found: {0}")]
    GearNotFound(Uuid),
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn ids(scene: &Scene) -> Vec<Uuid> {
        scene.gears().iter().map(Gear::id).collect()
    }

    fn rotation(scene: &Scene, id: Uuid) -> f32 {
        scene.gear(id).unwrap().rotation()
    }

    #[test]
    fn test_default_train_layout() {
        let scene = Scene::default_train(KinematicsConfig::default());
        let gears = scene.gears();

        assert_eq!(gears.len(), 3);
        assert_eq!(gears.iter().map(Gear::teeth).collect::<Vec<_>>(), DEFAULT_TRAIN_TEETH);
        assert!((gears[0].position().x - (-3.76)).abs() < EPSILON);
        assert_eq!(gears[1].position(), Vec2::ZERO);
        assert!((gears[2].position().x - 5.44).abs() < EPSILON);
        assert!(!scene.is_adjacency_stale());
        assert_eq!(scene.adjacency().edge_count(), 2);
        assert!(gears.iter().all(|g| g.rotation() == 0.0));
    }

    #[test]
    fn test_default_train_propagation() {
        let mut scene = Scene::default_train(KinematicsConfig::default());
        let [left, center, right] = ids(&scene)[..] else {
            panic!("expected three gears");
        };

        let report = scene.propagate(center, 0.1).unwrap();

        assert_eq!(report.rotated_count(), 3);
        assert!((rotation(&scene, left) - (-0.18)).abs() < EPSILON);
        assert!((rotation(&scene, right) - (-0.075)).abs() < EPSILON);
    }

    #[test]
    fn test_unknown_gear_errors() {
        let mut scene = Scene::default_train(KinematicsConfig::default());
        let ghost = Uuid::new_v4();

        assert!(matches!(scene.propagate(ghost, 1.0), Err(SceneError::GearNotFound(id)) if id == ghost));
        assert!(scene.set_gear_position(ghost, Vec2::ONE).is_err());
        assert!(scene.set_rotation(ghost, 1.0).is_err());
        assert!(scene.place_meshed(ghost, 20, 1.0, 0.6, Vec2::X).is_err());
        assert_eq!(scene.gear_count(), 3);
    }

    #[test]
    fn test_added_gear_needs_rebuild() {
        let mut scene = Scene::new("test");
        let a = scene.create_gear(24, 1.0, 0.6);
        let b = scene.place_meshed(a, 24, 1.0, 0.6, Vec2::Y).unwrap();
        assert!(scene.is_adjacency_stale());

        // Stale graph has neither gear: only the source turns
        scene.propagate(a, 1.0).unwrap();
        assert_eq!(rotation(&scene, b), 0.0);

        scene.rebuild_adjacency();
        assert!(!scene.is_adjacency_stale());
        scene.propagate(a, 1.0).unwrap();
        assert_eq!(rotation(&scene, a), 2.0);
        assert_eq!(rotation(&scene, b), -1.0);
    }

    #[test]
    fn test_moving_gear_keeps_old_graph_until_rebuild() {
        let mut scene = Scene::default_train(KinematicsConfig::default());
        let [left, center, _] = ids(&scene)[..] else {
            panic!("expected three gears");
        };

        scene.set_gear_position(left, Vec2::new(-50.0, 0.0)).unwrap();
        assert!(scene.is_adjacency_stale());
        scene.propagate(center, 0.1).unwrap();
        assert!(rotation(&scene, left) != 0.0);

        scene.rebuild_adjacency();
        scene.reset_rotations();
        scene.propagate(center, 0.1).unwrap();
        assert_eq!(rotation(&scene, left), 0.0);
    }

    #[test]
    fn test_place_meshed_diagonal() {
        let mut scene = Scene::new("test");
        let a = scene.create_gear(20, 1.0, 0.6);
        let b = scene.place_meshed(a, 30, 1.0, 0.6, Vec2::new(1.0, 1.0)).unwrap();
        scene.rebuild_adjacency();

        assert!(scene.adjacency().are_meshed(a, b));
    }

    #[test]
    fn test_apply_request() {
        let mut scene = Scene::default_train(KinematicsConfig::default());
        let center = ids(&scene)[1];

        scene.apply(PropagationRequest::new(center, -0.2)).unwrap();

        assert!((rotation(&scene, center) - (-0.2)).abs() < EPSILON);
    }

    #[test]
    fn test_gear_at() {
        let scene = Scene::default_train(KinematicsConfig::default());
        let [left, center, right] = ids(&scene)[..] else {
            panic!("expected three gears");
        };

        assert_eq!(scene.gear_at(Vec2::ZERO), Some(center));
        assert_eq!(scene.gear_at(Vec2::new(-3.76, 0.5)), Some(left));
        assert_eq!(scene.gear_at(Vec2::new(5.44, -1.0)), Some(right));
        assert_eq!(scene.gear_at(Vec2::new(0.0, 20.0)), None);
    }

    #[test]
    fn test_extent_covers_all_gears() {
        let scene = Scene::default_train(KinematicsConfig::default());
        let right = &scene.gears()[2];
        assert!(scene.extent() >= right.position().x + right.radius());
        assert!((scene.max_radius() - right.radius()).abs() < EPSILON);
    }

    #[test]
    fn test_config_change_marks_stale() {
        let mut scene = Scene::default_train(KinematicsConfig::default());
        let mut config = KinematicsConfig::default();
        config.tolerance.base = 0.5;
        scene.set_config(config);
        assert!(scene.is_adjacency_stale());
    }

    #[test]
    fn test_stats() {
        let mut scene = Scene::default_train(KinematicsConfig::default());
        let center = ids(&scene)[1];
        scene.set_rotation(center, std::f32::consts::PI).unwrap();

        let stats = scene.stats();
        assert_eq!(stats.name, "gear train");
        assert_eq!(stats.gear_count(), 3);
        assert_eq!(stats.gears[0].teeth, 20);
        assert!((stats.gears[1].angle_degrees - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_teardown() {
        let mut scene = Scene::default_train(KinematicsConfig::default());
        scene.teardown();
        assert!(scene.is_empty());
        assert!(scene.adjacency().is_empty());
        assert!(scene.gear_at(Vec2::ZERO).is_none());
    }
}
