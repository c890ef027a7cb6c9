//! Viewer configuration loading

use std::path::Path;

use gt_core::KinematicsConfig;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "gt.ron";

/// Load the kinematics configuration, falling back to defaults.
///
/// A missing file is normal; an unreadable or invalid one is logged.
pub fn load_kinematics_config(path: &Path) -> KinematicsConfig {
    if !path.exists() {
        tracing::debug!("No config at {:?}, using defaults", path);
        return KinematicsConfig::default();
    }

    match KinematicsConfig::load(path) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config from {:?}: {}", path, e);
            KinematicsConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = load_kinematics_config(&temp.path().join(CONFIG_FILE));
        assert_eq!(config, KinematicsConfig::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "not ron at all (").unwrap();
        assert_eq!(load_kinematics_config(&path), KinematicsConfig::default());
    }

    #[test]
    fn test_valid_file_is_used() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        let mut config = KinematicsConfig::default();
        config.interaction.rotate_sensitivity = 0.03;
        config.save(&path).unwrap();

        assert_eq!(load_kinematics_config(&path), config);
    }
}
