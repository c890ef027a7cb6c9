//! Global constants for gt-core

/// Smallest tooth count a gear can have; lower requests are raised to this
pub const MIN_TEETH: u32 = 4;

/// Radius grows by this much per tooth per unit of module
pub const RADIUS_SCALE_FACTOR: f32 = 0.06;

/// Radius offset added to every gear regardless of tooth count
pub const RADIUS_BASE_OFFSET: f32 = 0.2;

/// Absolute slack allowed when deciding whether two gears touch
pub const MESH_BASE_TOLERANCE: f32 = 0.01;

/// Slack proportional to the larger radius of a candidate pair
pub const MESH_RELATIVE_TOLERANCE: f32 = 0.02;

/// Radians of rotation per pixel of horizontal drag
pub const ROTATE_SENSITIVITY: f32 = 0.01;

/// Fraction of the radius that counts as "on the gear" for picking
pub const PICK_RADIUS_FRACTION: f32 = 0.95;

/// Default tooth count
pub const DEFAULT_TEETH: u32 = 24;

/// Default module
pub const DEFAULT_MODULE: f32 = 1.0;

/// Default gear thickness
pub const DEFAULT_WIDTH: f32 = 0.6;
