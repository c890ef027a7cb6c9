//! Kinematics configuration
//!
//! Tunable constants for gear geometry, mesh detection and interaction. Every
//! section falls back to its defaults when missing from a RON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    MESH_BASE_TOLERANCE, MESH_RELATIVE_TOLERANCE, MIN_TEETH, RADIUS_BASE_OFFSET,
    RADIUS_SCALE_FACTOR, ROTATE_SENSITIVITY,
};

/// How a gear's radius is derived from its tooth count and module
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GearGeometryConfig {
    /// Radius per tooth per unit of module
    pub scale_factor: f32,
    /// Radius added to every gear
    pub base_offset: f32,
    /// Tooth count floor
    pub min_teeth: u32,
}

impl Default for GearGeometryConfig {
    fn default() -> Self {
        Self {
            scale_factor: RADIUS_SCALE_FACTOR,
            base_offset: RADIUS_BASE_OFFSET,
            min_teeth: MIN_TEETH,
        }
    }
}

impl GearGeometryConfig {
    /// Radius of a gear with the given (already clamped) tooth count
    pub fn radius(&self, teeth: u32, module: f32) -> f32 {
        teeth as f32 * module * self.scale_factor + self.base_offset
    }

    /// Apply the tooth count floor
    pub fn clamp_teeth(&self, teeth: u32) -> u32 {
        teeth.max(self.min_teeth)
    }
}

/// Slack used when deciding whether two gears are meshed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MeshToleranceConfig {
    /// Absolute tolerance
    pub base: f32,
    /// Tolerance per unit of the larger radius
    pub relative: f32,
}

impl Default for MeshToleranceConfig {
    fn default() -> Self {
        Self {
            base: MESH_BASE_TOLERANCE,
            relative: MESH_RELATIVE_TOLERANCE,
        }
    }
}

impl MeshToleranceConfig {
    /// Tolerance for a pair whose larger radius is `max_radius`
    pub fn for_radius(&self, max_radius: f32) -> f32 {
        self.base + max_radius * self.relative
    }
}

/// Pointer interaction settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InteractionConfig {
    /// Radians per pixel of horizontal drag
    pub rotate_sensitivity: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            rotate_sensitivity: ROTATE_SENSITIVITY,
        }
    }
}

/// Complete kinematics configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KinematicsConfig {
    /// Gear geometry
    #[serde(default)]
    pub geometry: GearGeometryConfig,
    /// Mesh detection
    #[serde(default)]
    pub tolerance: MeshToleranceConfig,
    /// Pointer interaction
    #[serde(default)]
    pub interaction: InteractionConfig,
}

impl KinematicsConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the values that would break radius ordering or mesh detection
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale_factor = self.geometry.scale_factor;
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "geometry.scale_factor must be positive and finite, got {}",
                scale_factor
            )));
        }
        // With a non-negative offset every gear of positive module has a positive radius
        let base_offset = self.geometry.base_offset;
        if !base_offset.is_finite() || base_offset < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "geometry.base_offset must be non-negative and finite, got {}",
                base_offset
            )));
        }
        if self.geometry.min_teeth == 0 {
            return Err(ConfigError::Invalid(
                "geometry.min_teeth must be at least 1".to_string(),
            ));
        }
        let base_ok = self.tolerance.base.is_finite() && self.tolerance.base >= 0.0;
        let relative_ok = self.tolerance.relative.is_finite() && self.tolerance.relative >= 0.0;
        if !base_ok || !relative_ok {
            return Err(ConfigError::Invalid(format!(
                "tolerances must be non-negative, got base {} and relative {}",
                self.tolerance.base, self.tolerance.relative
            )));
        }
        if !self.interaction.rotate_sensitivity.is_finite() {
            return Err(ConfigError::Invalid(
                "interaction.rotate_sensitivity must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize configuration to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load and validate configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::load_from_bytes(content.as_bytes())
    }

    /// Load and validate configuration from bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        let config: KinematicsConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
